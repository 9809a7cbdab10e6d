//! Nominal type definitions (`struct`, `class`, `enum`).

use serde::{Deserialize, Serialize};

use crate::{FunctionDefinition, TypeRef, Variable};

/// The kind of nominal type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Struct,
    Class,
    FinalClass,
    /// Case-less enums, used as namespaces.
    Enum,
}

impl TypeKind {
    /// The introducing keyword(s).
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Struct => "struct",
            TypeKind::Class => "class",
            TypeKind::FinalClass => "final class",
            TypeKind::Enum => "enum",
        }
    }
}

/// `typealias Name = Type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAlias {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub public: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            public: false,
        }
    }

    pub fn public(mut self) -> Self {
        self.public = true;
        self
    }
}

/// A nominal type definition with its members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub public: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conformances: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_aliases: Vec<TypeAlias>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_variables: Vec<Variable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<Variable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested_types: Vec<TypeDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_functions: Vec<FunctionDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<FunctionDefinition>,
}

impl TypeDefinition {
    /// Create a new struct definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Struct,
            public: false,
            conformances: Vec::new(),
            comment: None,
            type_aliases: Vec::new(),
            type_variables: Vec::new(),
            variables: Vec::new(),
            nested_types: Vec::new(),
            type_functions: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn public(mut self) -> Self {
        self.public = true;
        self
    }

    pub fn conformance(mut self, ty: impl Into<TypeRef>) -> Self {
        self.conformances.push(ty.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn type_alias(mut self, alias: TypeAlias) -> Self {
        self.type_aliases.push(alias);
        self
    }

    pub fn type_variable(mut self, variable: Variable) -> Self {
        self.type_variables.push(variable);
        self
    }

    pub fn variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    pub fn nested_type(mut self, definition: TypeDefinition) -> Self {
        self.nested_types.push(definition);
        self
    }

    pub fn type_function(mut self, function: FunctionDefinition) -> Self {
        self.type_functions.push(function);
        self
    }

    pub fn function(mut self, function: FunctionDefinition) -> Self {
        self.functions.push(function);
        self
    }

    /// Check if the type has no members at all.
    pub fn is_empty(&self) -> bool {
        self.type_aliases.is_empty()
            && self.type_variables.is_empty()
            && self.variables.is_empty()
            && self.nested_types.is_empty()
            && self.type_functions.is_empty()
            && self.functions.is_empty()
    }
}
