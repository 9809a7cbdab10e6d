//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod emit;
mod output;

pub use check::{CheckReport, ExtensionSummary};
pub use emit::{EmitReport, EmitResult};
pub use output::{Report, TerminalOutput};
