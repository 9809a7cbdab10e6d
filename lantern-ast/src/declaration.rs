use crate::{Extension, FunctionDefinition, GenericConstraint, TypeDefinition, Variable};

/// Any node of the declaration model.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Extension(Extension),
    TypeDefinition(TypeDefinition),
    Function(FunctionDefinition),
    Variable(Variable),
    GenericConstraint(GenericConstraint),
}

impl Declaration {
    /// Short name of the variant, for diagnostics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Declaration::Extension(_) => "extension",
            Declaration::TypeDefinition(_) => "type",
            Declaration::Function(_) => "function",
            Declaration::Variable(_) => "variable",
            Declaration::GenericConstraint(_) => "generic constraint",
        }
    }
}

impl From<Extension> for Declaration {
    fn from(value: Extension) -> Self {
        Self::Extension(value)
    }
}

impl From<TypeDefinition> for Declaration {
    fn from(value: TypeDefinition) -> Self {
        Self::TypeDefinition(value)
    }
}

impl From<FunctionDefinition> for Declaration {
    fn from(value: FunctionDefinition) -> Self {
        Self::Function(value)
    }
}

impl From<Variable> for Declaration {
    fn from(value: Variable) -> Self {
        Self::Variable(value)
    }
}

impl From<GenericConstraint> for Declaration {
    fn from(value: GenericConstraint) -> Self {
        Self::GenericConstraint(value)
    }
}
