//! Column definition rendering.

use crate::core::schema::Column;
use crate::core::traits::Dialect;
use crate::error::Result;

use crate::dialect::TokenList;

/// Render one column definition.
///
/// `<name> <type>[ DEFAULT NEXT VALUE FOR <sequence>][ NOT NULL]`
///
/// `sequence` is the backing sequence when the column is an identity column.
/// NOT NULL only appears for columns explicitly marked non-nullable.
pub fn render_column<D: Dialect + ?Sized>(
    dialect: &D,
    col: &Column,
    sequence: Option<&str>,
) -> Result<String> {
    let mut tokens = TokenList::new();
    tokens
        .push(dialect.quote_ident(&col.name)?)
        .push(dialect.render_type(&col.data_type)?);

    if let Some(seq) = sequence {
        tokens.push("DEFAULT").push(dialect.identity_default(seq)?);
    }

    if !col.nullable {
        tokens.push("NOT NULL");
    }

    Ok(tokens.finish())
}
