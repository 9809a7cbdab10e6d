//! Extensions, the top-level unit of emission.

use serde::{Deserialize, Serialize};

use crate::{
    FunctionDefinition, GenericConstraint, SwiftVersion, TypeDefinition, TypeRef, Variable,
};

/// `extension Type : Conformances where Constraints { … }`
///
/// Optionally wrapped in `#if swift(>=…)` and `#if canImport(…)` gates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    pub extended_type: TypeRef,
    #[serde(default)]
    pub public: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conformances: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_constraints: Vec<GenericConstraint>,
    /// Must have a major version of at least 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_swift_version: Option<SwiftVersion>,
    /// Module names checked with `canImport`, in emission order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_imports: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_definitions: Vec<TypeDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_variables: Vec<Variable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_functions: Vec<FunctionDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<FunctionDefinition>,
}

impl Extension {
    pub fn new(extended_type: impl Into<TypeRef>) -> Self {
        Self {
            extended_type: extended_type.into(),
            public: false,
            conformances: Vec::new(),
            generic_constraints: Vec::new(),
            minimum_swift_version: None,
            required_imports: Vec::new(),
            type_definitions: Vec::new(),
            type_variables: Vec::new(),
            type_functions: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn public(mut self) -> Self {
        self.public = true;
        self
    }

    pub fn conformance(mut self, ty: impl Into<TypeRef>) -> Self {
        self.conformances.push(ty.into());
        self
    }

    pub fn constraint(mut self, constraint: GenericConstraint) -> Self {
        self.generic_constraints.push(constraint);
        self
    }

    pub fn minimum_swift_version(mut self, major: u32, minor: u32) -> Self {
        self.minimum_swift_version = Some(SwiftVersion::new(major, minor));
        self
    }

    pub fn required_import(mut self, module: impl Into<String>) -> Self {
        self.required_imports.push(module.into());
        self
    }

    pub fn type_definition(mut self, definition: TypeDefinition) -> Self {
        self.type_definitions.push(definition);
        self
    }

    pub fn type_variable(mut self, variable: Variable) -> Self {
        self.type_variables.push(variable);
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

    /// Check if the extension body has no members.
    pub fn is_empty(&self) -> bool {
        self.type_definitions.is_empty()
            && self.type_variables.is_empty()
            && self.type_functions.is_empty()
            && self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let ext = Extension::new("Person")
            .public()
            .conformance("Equatable")
            .minimum_swift_version(5, 5)
            .required_import("_Concurrency");

        assert!(ext.public);
        assert_eq!(ext.conformances, vec![TypeRef::named("Equatable")]);
        assert_eq!(ext.minimum_swift_version, Some(SwiftVersion::new(5, 5)));
        assert_eq!(ext.required_imports, vec!["_Concurrency"]);
        assert!(ext.is_empty());
    }

    #[test]
    fn test_deserialize_minimal() {
        let ext: Extension = serde_json::from_str(r#"{"extended_type": "Person"}"#).unwrap();
        assert_eq!(ext, Extension::new("Person"));
    }

    #[test]
    fn test_required_imports_keep_order() {
        let ext: Extension = serde_json::from_str(
            r#"{"extended_type": "Person", "required_imports": ["SQLite3", "Foundation"]}"#,
        )
        .unwrap();
        assert_eq!(ext.required_imports, vec!["SQLite3", "Foundation"]);
    }
}
