//! Function definitions.

use serde::{Deserialize, Serialize};

use crate::{Expression, GenericConstraint, TypeRef};

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// External argument label; `_` suppresses it. Defaults to the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Expression>,
    #[serde(default)]
    pub inout: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            label: None,
            name: name.into(),
            ty: ty.into(),
            default: None,
            inout: false,
        }
    }

    /// A parameter without an external label (`_ name: T`).
    pub fn unlabeled(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self::new(name, ty).label("_")
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn default_value(mut self, value: Expression) -> Self {
        self.default = Some(value);
        self
    }

    pub fn inout(mut self) -> Self {
        self.inout = true;
        self
    }
}

/// A function or method, instance or static depending on where it is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_parameters: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(rename = "async", default)]
    pub is_async: bool,
    #[serde(default)]
    pub throws: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_constraints: Vec<GenericConstraint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub inlinable: bool,
    #[serde(default)]
    pub discardable_result: bool,
    /// Body source lines, emitted one indentation level deeper.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<String>,
}

impl FunctionDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            public: false,
            generic_parameters: Vec::new(),
            parameters: Vec::new(),
            is_async: false,
            throws: false,
            return_type: None,
            generic_constraints: Vec::new(),
            comment: None,
            inlinable: false,
            discardable_result: false,
            body: Vec::new(),
        }
    }

    pub fn public(mut self) -> Self {
        self.public = true;
        self
    }

    pub fn generic_parameter(mut self, name: impl Into<String>) -> Self {
        self.generic_parameters.push(name.into());
        self
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn throws(mut self) -> Self {
        self.throws = true;
        self
    }

    pub fn returns(mut self, ty: impl Into<TypeRef>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn constraint(mut self, constraint: GenericConstraint) -> Self {
        self.generic_constraints.push(constraint);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn inlinable(mut self) -> Self {
        self.inlinable = true;
        self
    }

    pub fn discardable_result(mut self) -> Self {
        self.discardable_result = true;
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: impl Into<String>) -> Self {
        for line in content.into().lines() {
            self.body.push(line.to_string());
        }
        self
    }
}
