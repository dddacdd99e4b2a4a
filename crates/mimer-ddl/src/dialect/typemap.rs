//! Type registry: abstract column types to Mimer SQL type tokens.
//!
//! The match over [`AbstractType`] is exhaustive, so adding a variant without
//! a rendering rule is a compile error rather than a runtime gap. The only
//! runtime "unsupported" case is a type the configured engine lacks (UUID on
//! engines without `BUILTIN.UUID`).

use crate::core::traits::Dialect;
use crate::core::types::{AbstractType, IntegerWidth};
use crate::error::{DdlError, Result};

use super::builder::TypeToken;

/// Render an abstract type as a Mimer SQL type token.
///
/// | Abstract type              | Rendered                                 |
/// |----------------------------|------------------------------------------|
/// | Integer small/normal/big   | `SMALLINT` / `INTEGER` / `BIGINT`        |
/// | Decimal{p, s}              | `DECIMAL(p,s)` or `DECIMAL(p)`           |
/// | Float{bp}                  | `FLOAT(bp)` below the threshold, else `DOUBLE PRECISION` |
/// | VarChar{len}               | `VARCHAR(len)`, default length if absent |
/// | FixedChar / Text           | `CHAR(n)` / `CLOB`                       |
/// | NationalVarChar / NationalText | `NVARCHAR(n)` / `NCLOB`              |
/// | FixedBinary / VarBinary / Blob | `BINARY(n)` / `VARBINARY(n)` / `BLOB` |
/// | Boolean, Date, Time, Timestamp | same keyword                         |
/// | Interval                   | [`Dialect::render_interval`]             |
/// | Uuid                       | `BUILTIN.UUID`                           |
///
/// Numeric limits and the UUID type name come from the dialect's
/// configuration; intervals are handed back to the dialect.
pub fn render_type<D: Dialect + ?Sized>(ty: &AbstractType, dialect: &D) -> Result<String> {
    let config = dialect.config();
    let token = match ty {
        AbstractType::Integer { width } => TypeToken::new(match width {
            IntegerWidth::Small => "SMALLINT",
            IntegerWidth::Normal => "INTEGER",
            IntegerWidth::Big => "BIGINT",
        }),

        AbstractType::Decimal { precision, scale } => {
            require_positive("DECIMAL precision", *precision)?;
            if let Some(s) = scale {
                if *s < 0 || s > precision {
                    return Err(DdlError::type_spec(format!(
                        "DECIMAL scale must be between 0 and the precision {}, got {}",
                        precision, s
                    )));
                }
            }
            TypeToken::new("DECIMAL").arg(*precision).opt_arg(*scale)
        }

        AbstractType::Float { binary_precision } => match binary_precision {
            Some(bp) => {
                require_positive("FLOAT precision", *bp)?;
                if *bp >= config.float_double_threshold {
                    TypeToken::new("DOUBLE PRECISION")
                } else {
                    TypeToken::new("FLOAT").arg(*bp)
                }
            }
            None => TypeToken::new("DOUBLE PRECISION"),
        },

        AbstractType::VarChar { length } => {
            let length = length.unwrap_or(config.default_varchar_length);
            require_positive("VARCHAR length", length)?;
            TypeToken::new("VARCHAR").arg(length)
        }

        AbstractType::FixedChar { length } => sized("CHAR", *length)?,
        AbstractType::Text => TypeToken::new("CLOB"),
        AbstractType::NationalVarChar { length } => sized("NVARCHAR", *length)?,
        AbstractType::NationalText => TypeToken::new("NCLOB"),
        AbstractType::FixedBinary { length } => sized("BINARY", *length)?,
        AbstractType::VarBinary { length } => sized("VARBINARY", *length)?,
        AbstractType::Blob => TypeToken::new("BLOB"),

        AbstractType::Boolean => TypeToken::new("BOOLEAN"),
        AbstractType::Date => TypeToken::new("DATE"),
        AbstractType::Time => TypeToken::new("TIME"),
        AbstractType::Timestamp => TypeToken::new("TIMESTAMP"),

        AbstractType::Interval { fields } => return dialect.render_interval(fields),

        AbstractType::Uuid => {
            if !config.native_uuid {
                return Err(DdlError::unsupported(ty.kind_name(), dialect.name()));
            }
            TypeToken::new(config.uuid_type_name.clone())
        }
    };

    Ok(token.to_string())
}

fn sized(name: &str, length: i32) -> Result<TypeToken> {
    require_positive(&format!("{} length", name), length)?;
    Ok(TypeToken::new(name).arg(length))
}

fn require_positive(what: &str, value: i32) -> Result<()> {
    if value < 1 {
        return Err(DdlError::type_spec(format!(
            "{} must be at least 1, got {}",
            what, value
        )));
    }
    Ok(())
}
