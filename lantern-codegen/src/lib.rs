//! Shared code generation utilities for Lantern.
//!
//! This crate provides the language-agnostic output buffer used by the
//! language-specific generators (e.g., `lantern-codegen-swift`).
//!
//! # Module Organization
//!
//! - [`builder`] - Output buffer, indentation and scope guards

pub mod builder;

pub use builder::{CodeBuilder, Indent};
