//! Token builders for DDL text.
//!
//! All spacing and punctuation decisions live here. Renderers produce tokens
//! and lists; the builders decide where spaces, commas and parentheses go.
//!
//! - [`TypeToken`]: `NAME` or `NAME(a,b)` (no spaces inside the parentheses)
//! - [`TokenList`]: tokens joined by single spaces, plus parenthesized lists

use std::fmt;

use crate::config::DdlLayout;

/// A type name with optional numeric arguments, e.g. `DECIMAL(10,2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeToken {
    name: String,
    args: Vec<i32>,
}

impl TypeToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, value: i32) -> Self {
        self.args.push(value);
        self
    }

    /// Append an argument if present.
    pub fn opt_arg(self, value: Option<i32>) -> Self {
        match value {
            Some(v) => self.arg(v),
            None => self,
        }
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            let args: Vec<String> = self.args.iter().map(|a| a.to_string()).collect();
            write!(f, "({})", args.join(","))?;
        }
        Ok(())
    }
}

/// Space-separated token sequence.
#[derive(Debug, Clone, Default)]
pub struct TokenList {
    tokens: Vec<String>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one token.
    pub fn push(&mut self, token: impl Into<String>) -> &mut Self {
        self.tokens.push(token.into());
        self
    }

    /// Append a tight parenthesized list: `(a, b)`.
    pub fn push_group<S: AsRef<str>>(&mut self, items: &[S]) -> &mut Self {
        let joined: Vec<&str> = items.iter().map(|s| s.as_ref()).collect();
        self.tokens.push(format!("({})", joined.join(", ")));
        self
    }

    /// Append a statement body list laid out according to `layout`.
    ///
    /// - Compact: `( a, b )`
    /// - Pretty: `(\n\ta,\n\tb\n)`
    pub fn push_elements<S: AsRef<str>>(&mut self, items: &[S], layout: DdlLayout) -> &mut Self {
        let joined: Vec<&str> = items.iter().map(|s| s.as_ref()).collect();
        let body = match layout {
            DdlLayout::Compact => format!("( {} )", joined.join(", ")),
            DdlLayout::Pretty => format!("(\n\t{}\n)", joined.join(",\n\t")),
        };
        self.tokens.push(body);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Join the tokens with single spaces.
    pub fn finish(&self) -> String {
        self.tokens.join(" ")
    }
}
