//! Value expressions used as variable initializers and parameter defaults.

use serde::{Deserialize, Serialize};

/// A Swift value expression.
///
/// In a manifest, booleans and numbers map to literals, `{ string = "…" }`
/// to an escaped string literal, and any other string is taken verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expression {
    Bool(bool),
    Integer(i64),
    Double(f64),
    /// A string literal, quoted and escaped on output.
    String { string: String },
    /// `nil`.
    Nil,
    /// Source text emitted as is.
    Raw(String),
}

impl Expression {
    /// Create a string literal expression.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String {
            string: value.into(),
        }
    }

    /// Create a verbatim expression.
    pub fn raw(source: impl Into<String>) -> Self {
        Self::Raw(source.into())
    }
}
