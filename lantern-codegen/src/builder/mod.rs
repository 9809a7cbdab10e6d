//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Output buffer with tracked indentation
//! - [`Indent`] - Indentation configuration
//! - [`IndentGuard`] - Scope guard holding one level of indentation

mod code_builder;
mod guard;
mod indent;

pub use code_builder::CodeBuilder;
pub use guard::{IndentGuard, Indentation, with_indent};
pub use indent::Indent;
