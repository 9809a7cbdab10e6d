//! Core operations.
//!
//! This module contains the business logic for lantern commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod emit;

pub use check::check;
pub use emit::{EmitOptions, emit};
