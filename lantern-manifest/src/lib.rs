// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod format;
mod manifest;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use format::{Format, IndentSetting, parse_indent};
pub use manifest::Manifest;
