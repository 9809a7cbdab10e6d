//! Emission of each declaration kind, one `impl CodeGenerator` block per file.

mod comments;
mod extensions;
mod functions;
mod type_definitions;
mod variables;

pub use extensions::{CONCURRENCY_AVAILABILITY, CONCURRENCY_MODULE};
