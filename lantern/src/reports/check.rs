//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the manifest.
    pub manifest_path: PathBuf,
    /// Modules imported at the top of the generated file.
    pub imports: Vec<String>,
    /// One entry per extension, in emission order.
    pub extensions: Vec<ExtensionSummary>,
}

/// What a single extension will emit.
#[derive(Debug)]
pub struct ExtensionSummary {
    pub extended_type: String,
    pub conformances: Vec<String>,
    /// Conditions wrapping the extension, e.g. `swift(>=5.5)`.
    pub gates: Vec<String>,
    pub member_count: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.manifest_path.display()));

        if self.extensions.is_empty() {
            out.warning("no [[extension]] tables, nothing will be emitted");
            return;
        }
        out.newline();

        if !self.imports.is_empty() {
            out.section("imports");
            for module in &self.imports {
                out.list_item(module);
            }
            out.newline();
        }

        let count = self.extensions.len();
        out.section(&format!(
            "{} extension{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for extension in &self.extensions {
            let mut line = extension.extended_type.clone();
            if !extension.conformances.is_empty() {
                line.push_str(" : ");
                line.push_str(&extension.conformances.join(", "));
            }
            line.push_str(&format!(
                " ({} member{})",
                extension.member_count,
                if extension.member_count == 1 { "" } else { "s" }
            ));
            if !extension.gates.is_empty() {
                line.push_str(&format!(" [{}]", extension.gates.join(" && ")));
            }
            out.list_item(&line);
        }
    }
}
