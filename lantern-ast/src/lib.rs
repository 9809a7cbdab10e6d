//! Declaration model for the Lantern Swift code generator.
//!
//! These types describe *what* to emit. They are built by the caller (or
//! loaded by `lantern-manifest`) and consumed read-only by the emission
//! engine in `lantern-codegen-swift`.
//!
//! # Architecture
//!
//! ```text
//! lantern.toml → lantern-manifest (parsing) → lantern-ast (model) → lantern-codegen-swift
//! ```

mod constraint;
mod declaration;
mod expr;
mod extension;
mod function;
mod type_definition;
mod types;
mod variable;
mod version;

pub use constraint::GenericConstraint;
pub use declaration::Declaration;
pub use expr::Expression;
pub use extension::Extension;
pub use function::{FunctionDefinition, Parameter};
pub use type_definition::{TypeAlias, TypeDefinition, TypeKind};
pub use types::TypeRef;
pub use variable::Variable;
pub use version::SwiftVersion;
