//! Interval type rendering.
//!
//! Grammar:
//!
//! ```text
//! INTERVAL <unit>[(p)]
//! INTERVAL <start>[(leading precision)] TO <end>[(fractional precision)]
//! ```
//!
//! Fields run YEAR > MONTH > DAY > HOUR > MINUTE > SECOND. A range must go
//! from a strictly coarser field to a finer one and must stay inside one
//! class: YEAR TO MONTH for year-month intervals, DAY..SECOND for day-time
//! intervals. Only a SECOND end field may carry a precision.

use crate::core::types::{IntervalType, IntervalUnit};
use crate::error::{DdlError, Result};

use super::builder::{TokenList, TypeToken};

/// Render an interval type, e.g. `INTERVAL DAY(5) TO SECOND(2)`.
pub fn render_interval(interval: &IntervalType) -> Result<String> {
    validate_interval(interval)?;

    let mut tokens = TokenList::new();
    tokens.push("INTERVAL");
    match interval {
        IntervalType::SingleField { unit, precision } => {
            tokens.push(TypeToken::new(unit.keyword()).opt_arg(*precision).to_string());
        }
        IntervalType::RangeField {
            start_unit,
            start_precision,
            end_unit,
            end_precision,
        } => {
            let start = TypeToken::new(start_unit.keyword()).opt_arg(*start_precision);
            let end = TypeToken::new(end_unit.keyword()).opt_arg(*end_precision);
            tokens
                .push(start.to_string())
                .push("TO")
                .push(end.to_string());
        }
    }

    Ok(tokens.finish())
}

/// Check field ordering and precision placement.
pub fn validate_interval(interval: &IntervalType) -> Result<()> {
    match interval {
        IntervalType::SingleField { unit, precision } => {
            if let Some(p) = precision {
                match unit {
                    IntervalUnit::Second => check_fractional(*p)?,
                    _ => check_leading(*unit, *p)?,
                }
            }
            Ok(())
        }
        IntervalType::RangeField {
            start_unit,
            start_precision,
            end_unit,
            end_precision,
        } => {
            if start_unit >= end_unit {
                return Err(DdlError::type_spec(format!(
                    "interval start field {} must be coarser than end field {}",
                    start_unit, end_unit
                )));
            }
            if start_unit.is_year_month() != end_unit.is_year_month() {
                return Err(DdlError::type_spec(format!(
                    "interval {} TO {} mixes year-month and day-time fields",
                    start_unit, end_unit
                )));
            }
            if let Some(p) = start_precision {
                check_leading(*start_unit, *p)?;
            }
            if let Some(p) = end_precision {
                if *end_unit != IntervalUnit::Second {
                    return Err(DdlError::type_spec(format!(
                        "only a SECOND end field takes a precision, got {}({})",
                        end_unit, p
                    )));
                }
                check_fractional(*p)?;
            }
            Ok(())
        }
    }
}

fn check_leading(unit: IntervalUnit, precision: i32) -> Result<()> {
    if precision < 1 {
        return Err(DdlError::type_spec(format!(
            "leading precision of {} must be at least 1, got {}",
            unit, precision
        )));
    }
    Ok(())
}

fn check_fractional(precision: i32) -> Result<()> {
    if precision < 0 {
        return Err(DdlError::type_spec(format!(
            "fractional seconds precision must not be negative, got {}",
            precision
        )));
    }
    Ok(())
}
