//! Core types shared across Lantern.
//!
//! - [`SqlError`], the native error value surfaced by generated runtime code
//! - [`SourceFile`], writing generated sources to disk

mod file;
mod sql_error;

pub use file::{Overwrite, SourceFile, WriteResult};
pub use sql_error::{NO_MESSAGE, NativeHandle, SqlError};
