use serde::{Deserialize, Serialize};

use crate::{Expression, TypeRef};

/// A stored property (`let`/`var`), instance or static depending on where
/// it is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(default)]
    pub public: bool,
    /// `let` when true, `var` otherwise.
    #[serde(default = "default_readonly")]
    pub readonly: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Expression>,
    /// Documentation comment, emitted as `///` lines above the declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

fn default_readonly() -> bool {
    true
}

impl Variable {
    /// A `let` with neither type nor value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            public: false,
            readonly: true,
            ty: None,
            value: None,
            comment: None,
        }
    }

    /// `let name = value`
    pub fn constant(name: impl Into<String>, value: Expression) -> Self {
        Self::new(name).value(value)
    }

    pub fn public(mut self) -> Self {
        self.public = true;
        self
    }

    /// Make this a `var`.
    pub fn mutable(mut self) -> Self {
        self.readonly = false;
        self
    }

    pub fn ty(mut self, ty: impl Into<TypeRef>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn value(mut self, value: Expression) -> Self {
        self.value = Some(value);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
