//! Emit command report data structures.

use std::path::PathBuf;

use lantern_core::WriteResult;

use super::output::{Output, Report};

/// Report data from Swift generation.
#[derive(Debug)]
pub struct EmitReport {
    /// Number of extensions emitted.
    pub extension_count: usize,
    /// Where the source went.
    pub result: EmitResult,
}

#[derive(Debug)]
pub enum EmitResult {
    /// The generated source, to be printed.
    Stdout(String),
    /// The source was written to (or left alone at) a file.
    Written { path: PathBuf, result: WriteResult },
}

impl Report for EmitReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            EmitResult::Stdout(source) => out.raw(source),
            EmitResult::Written {
                path,
                result: WriteResult::Written,
            } => out.preformatted(&format!(
                "✓ wrote {} ({} extension{})",
                path.display(),
                self.extension_count,
                if self.extension_count == 1 { "" } else { "s" }
            )),
            EmitResult::Written {
                path,
                result: WriteResult::Skipped,
            } => out.warning(&format!("{} already exists, skipped", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_stdout() {
        let report = EmitReport {
            extension_count: 1,
            result: EmitResult::Stdout("extension Foo {\n}\n".to_string()),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.stdout, "extension Foo {\n}\n");
    }

    #[test]
    fn test_render_written() {
        let report = EmitReport {
            extension_count: 2,
            result: EmitResult::Written {
                path: PathBuf::from("Out.swift"),
                result: WriteResult::Written,
            },
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.stdout, "✓ wrote Out.swift (2 extensions)\n");
    }

    #[test]
    fn test_render_skipped() {
        let report = EmitReport {
            extension_count: 1,
            result: EmitResult::Written {
                path: PathBuf::from("Out.swift"),
                result: WriteResult::Skipped,
            },
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert!(out.stdout.is_empty());
        assert_eq!(out.stderr, "warning: Out.swift already exists, skipped\n");
    }
}
