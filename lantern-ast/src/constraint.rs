//! Generic constraints for `where` clauses.

use serde::{Deserialize, Serialize};

use crate::TypeRef;

/// A single requirement in a generic `where` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenericConstraint {
    /// `T : Protocol`
    Conformance { name: String, conforms_to: TypeRef },
    /// `T == Type`
    SameType { name: String, same_type: TypeRef },
}

impl GenericConstraint {
    pub fn conformance(name: impl Into<String>, conforms_to: impl Into<TypeRef>) -> Self {
        Self::Conformance {
            name: name.into(),
            conforms_to: conforms_to.into(),
        }
    }

    pub fn same_type(name: impl Into<String>, same_type: impl Into<TypeRef>) -> Self {
        Self::SameType {
            name: name.into(),
            same_type: same_type.into(),
        }
    }

    /// The constrained generic parameter or associated type.
    pub fn name(&self) -> &str {
        match self {
            Self::Conformance { name, .. } | Self::SameType { name, .. } => name,
        }
    }
}
