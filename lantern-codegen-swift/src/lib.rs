//! Swift declaration emitter for Lantern.
//!
//! [`CodeGenerator`] renders the declaration model of `lantern-ast` into
//! Swift source: extensions with their conformance lists, generic `where`
//! clauses, and `#if swift(>=…)` / `#if canImport(…)` gates, plus the type
//! definitions, functions and variables nested inside them.
//!
//! Guards are emitted as text for the Swift compiler. Their predicates are
//! never evaluated here.

mod configuration;
mod generation;
mod generator;
mod names;

pub use configuration::Configuration;
pub use generation::{CONCURRENCY_AVAILABILITY, CONCURRENCY_MODULE};
pub use generator::CodeGenerator;
pub use names::{NameRenderer, SWIFT_RESERVED_WORDS, SwiftNames};
