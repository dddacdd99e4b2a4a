//! Engine-neutral column types.
//!
//! [`AbstractType`] is the closed set of column types the compiler knows how
//! to render. Parameters are kept as signed integers, exactly as upstream
//! schema metadata delivers them, so that nonsensical values (negative
//! lengths, zero precision) reach the renderer and are rejected there instead
//! of being silently clamped.
//!
//! Interval types carry their field list as a structured [`IntervalType`].
//! The textual field form (`DAY(5) TO SECOND(2)`) is also the serialized form,
//! so schema files can write intervals the way DDL does.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DdlError, Result};

/// Width of an integer column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegerWidth {
    /// 16-bit integer.
    Small,
    /// 32-bit integer.
    #[default]
    Normal,
    /// 64-bit integer.
    Big,
}

/// Abstract, database-independent column type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AbstractType {
    /// Exact integer of the given width.
    Integer {
        #[serde(default)]
        width: IntegerWidth,
    },
    /// Exact decimal with precision and optional scale.
    Decimal {
        precision: i32,
        #[serde(default)]
        scale: Option<i32>,
    },
    /// Approximate numeric; `binary_precision` is the mantissa width in bits.
    Float {
        #[serde(default)]
        binary_precision: Option<i32>,
    },
    /// Variable-length character string. A missing length uses the dialect default.
    #[serde(rename = "varchar")]
    VarChar {
        #[serde(default)]
        length: Option<i32>,
    },
    /// Fixed-length character string.
    #[serde(rename = "char")]
    FixedChar { length: i32 },
    /// Unbounded character data.
    Text,
    /// Variable-length national character string.
    #[serde(rename = "nvarchar")]
    NationalVarChar { length: i32 },
    /// Unbounded national character data.
    #[serde(rename = "ntext")]
    NationalText,
    /// Fixed-length binary string.
    #[serde(rename = "binary")]
    FixedBinary { length: i32 },
    /// Variable-length binary string.
    #[serde(rename = "varbinary")]
    VarBinary { length: i32 },
    /// Unbounded binary data.
    Blob,
    Boolean,
    Date,
    Time,
    Timestamp,
    /// Span of time over a field or field range.
    Interval { fields: IntervalType },
    Uuid,
}

impl AbstractType {
    /// 32-bit integer.
    pub fn integer() -> Self {
        AbstractType::Integer {
            width: IntegerWidth::Normal,
        }
    }

    /// 16-bit integer.
    pub fn small_integer() -> Self {
        AbstractType::Integer {
            width: IntegerWidth::Small,
        }
    }

    /// 64-bit integer.
    pub fn big_integer() -> Self {
        AbstractType::Integer {
            width: IntegerWidth::Big,
        }
    }

    pub fn decimal(precision: i32, scale: Option<i32>) -> Self {
        AbstractType::Decimal { precision, scale }
    }

    pub fn float(binary_precision: Option<i32>) -> Self {
        AbstractType::Float { binary_precision }
    }

    pub fn varchar(length: Option<i32>) -> Self {
        AbstractType::VarChar { length }
    }

    pub fn interval(fields: IntervalType) -> Self {
        AbstractType::Interval { fields }
    }

    /// Whether a backing sequence can feed this type.
    pub fn is_integer(&self) -> bool {
        matches!(self, AbstractType::Integer { .. })
    }

    /// Short type name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            AbstractType::Integer { .. } => "integer",
            AbstractType::Decimal { .. } => "decimal",
            AbstractType::Float { .. } => "float",
            AbstractType::VarChar { .. } => "varchar",
            AbstractType::FixedChar { .. } => "char",
            AbstractType::Text => "text",
            AbstractType::NationalVarChar { .. } => "nvarchar",
            AbstractType::NationalText => "ntext",
            AbstractType::FixedBinary { .. } => "binary",
            AbstractType::VarBinary { .. } => "varbinary",
            AbstractType::Blob => "blob",
            AbstractType::Boolean => "boolean",
            AbstractType::Date => "date",
            AbstractType::Time => "time",
            AbstractType::Timestamp => "timestamp",
            AbstractType::Interval { .. } => "interval",
            AbstractType::Uuid => "uuid",
        }
    }
}

/// Interval datetime field.
///
/// Declaration order runs from the most to the least significant field, so
/// the derived `Ord` makes `Year < Month < ... < Second`: a valid range has
/// `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntervalUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl IntervalUnit {
    /// Keyword used in DDL.
    pub fn keyword(self) -> &'static str {
        match self {
            IntervalUnit::Year => "YEAR",
            IntervalUnit::Month => "MONTH",
            IntervalUnit::Day => "DAY",
            IntervalUnit::Hour => "HOUR",
            IntervalUnit::Minute => "MINUTE",
            IntervalUnit::Second => "SECOND",
        }
    }

    /// YEAR and MONTH form the year-month class; everything else is day-time.
    pub fn is_year_month(self) -> bool {
        matches!(self, IntervalUnit::Year | IntervalUnit::Month)
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for IntervalUnit {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "YEAR" => Ok(IntervalUnit::Year),
            "MONTH" => Ok(IntervalUnit::Month),
            "DAY" => Ok(IntervalUnit::Day),
            "HOUR" => Ok(IntervalUnit::Hour),
            "MINUTE" => Ok(IntervalUnit::Minute),
            "SECOND" => Ok(IntervalUnit::Second),
            other => Err(DdlError::type_spec(format!(
                "unknown interval field '{}'",
                other
            ))),
        }
    }
}

/// Field specification of an interval type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IntervalType {
    /// `UNIT[(precision)]`
    SingleField {
        unit: IntervalUnit,
        precision: Option<i32>,
    },
    /// `START[(start_precision)] TO END[(end_precision)]`
    RangeField {
        start_unit: IntervalUnit,
        start_precision: Option<i32>,
        end_unit: IntervalUnit,
        end_precision: Option<i32>,
    },
}

impl IntervalType {
    pub fn single(unit: IntervalUnit, precision: Option<i32>) -> Self {
        IntervalType::SingleField { unit, precision }
    }

    pub fn range(
        start_unit: IntervalUnit,
        start_precision: Option<i32>,
        end_unit: IntervalUnit,
        end_precision: Option<i32>,
    ) -> Self {
        IntervalType::RangeField {
            start_unit,
            start_precision,
            end_unit,
            end_precision,
        }
    }

    /// Generic day/second interval parameterized like an ORM `Interval` type.
    ///
    /// Only the precisions that are given select fields: a day precision alone
    /// gives `DAY(p)`, a second precision alone gives `SECOND(p)`, both give
    /// `DAY(p) TO SECOND(s)` and neither gives `DAY TO SECOND`.
    pub fn day_to_second(day_precision: Option<i32>, second_precision: Option<i32>) -> Self {
        match (day_precision, second_precision) {
            (Some(day), None) => IntervalType::single(IntervalUnit::Day, Some(day)),
            (None, Some(second)) => IntervalType::single(IntervalUnit::Second, Some(second)),
            (day, second) => {
                IntervalType::range(IntervalUnit::Day, day, IntervalUnit::Second, second)
            }
        }
    }

    /// Build from a bare field list such as `"YEAR TO MONTH"`.
    ///
    /// `precision` decorates the leading field; `second_precision` decorates a
    /// trailing SECOND field (or a lone SECOND field when `precision` is unset).
    pub fn from_fields(
        fields: &str,
        precision: Option<i32>,
        second_precision: Option<i32>,
    ) -> Result<Self> {
        let parsed: IntervalType = fields.parse()?;
        let explicit = match &parsed {
            IntervalType::SingleField { precision: p, .. } => p.is_some(),
            IntervalType::RangeField {
                start_precision,
                end_precision,
                ..
            } => start_precision.is_some() || end_precision.is_some(),
        };
        if explicit {
            return Err(DdlError::type_spec(format!(
                "interval fields '{}' must not carry precisions; pass them separately",
                fields
            )));
        }

        Ok(match parsed {
            IntervalType::SingleField { unit, .. } => {
                let precision = match unit {
                    IntervalUnit::Second => precision.or(second_precision),
                    _ => precision,
                };
                IntervalType::single(unit, precision)
            }
            IntervalType::RangeField {
                start_unit,
                end_unit,
                ..
            } => IntervalType::range(start_unit, precision, end_unit, second_precision),
        })
    }
}

fn write_field(
    f: &mut fmt::Formatter<'_>,
    unit: IntervalUnit,
    precision: Option<i32>,
) -> fmt::Result {
    match precision {
        Some(p) => write!(f, "{}({})", unit, p),
        None => write!(f, "{}", unit),
    }
}

impl fmt::Display for IntervalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalType::SingleField { unit, precision } => write_field(f, *unit, *precision),
            IntervalType::RangeField {
                start_unit,
                start_precision,
                end_unit,
                end_precision,
            } => {
                write_field(f, *start_unit, *start_precision)?;
                f.write_str(" TO ")?;
                write_field(f, *end_unit, *end_precision)
            }
        }
    }
}

/// Parse `UNIT` or `UNIT(n)`.
fn parse_field(text: &str) -> Result<(IntervalUnit, Option<i32>)> {
    let text = text.trim();
    match text.find('(') {
        None => Ok((text.parse()?, None)),
        Some(open) => {
            let inner = text[open + 1..].strip_suffix(')').ok_or_else(|| {
                DdlError::type_spec(format!("unbalanced parentheses in interval field '{}'", text))
            })?;
            let precision = inner.trim().parse::<i32>().map_err(|_| {
                DdlError::type_spec(format!("invalid interval precision '{}'", inner.trim()))
            })?;
            Ok((text[..open].parse()?, Some(precision)))
        }
    }
}

impl FromStr for IntervalType {
    type Err = DdlError;

    /// Parse the field list of an interval, e.g. `DAY(5) TO SECOND(2)`.
    ///
    /// Parsing is purely syntactic; ordering and precision rules are checked
    /// when the type is rendered.
    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        let fields = upper.strip_prefix("INTERVAL ").unwrap_or(upper.as_str());
        let parts: Vec<&str> = fields.split(" TO ").collect();
        match parts.as_slice() {
            [single] => {
                let (unit, precision) = parse_field(single)?;
                Ok(IntervalType::single(unit, precision))
            }
            [start, end] => {
                let (start_unit, start_precision) = parse_field(start)?;
                let (end_unit, end_precision) = parse_field(end)?;
                Ok(IntervalType::range(
                    start_unit,
                    start_precision,
                    end_unit,
                    end_precision,
                ))
            }
            _ => Err(DdlError::type_spec(format!(
                "invalid interval field list '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for IntervalType {
    type Error = DdlError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<IntervalType> for String {
    fn from(value: IntervalType) -> Self {
        value.to_string()
    }
}
