//! Check operation - manifest summary.

use std::path::Path;

use lantern_manifest::Manifest;

use crate::reports::{CheckReport, ExtensionSummary};

/// Execute the check operation.
///
/// The manifest has already been validated while loading; this collects
/// what would be emitted.
pub fn check(manifest: &Manifest, manifest_path: &Path) -> CheckReport {
    let extensions = manifest
        .extensions
        .iter()
        .map(|extension| ExtensionSummary {
            extended_type: extension.extended_type.to_string(),
            conformances: extension
                .conformances
                .iter()
                .map(ToString::to_string)
                .collect(),
            gates: gates(extension),
            member_count: extension.type_definitions.len()
                + extension.type_variables.len()
                + extension.type_functions.len()
                + extension.functions.len(),
        })
        .collect();

    CheckReport {
        manifest_path: manifest_path.to_path_buf(),
        imports: manifest.imports.clone(),
        extensions,
    }
}

fn gates(extension: &lantern_ast::Extension) -> Vec<String> {
    let mut gates = Vec::new();
    if let Some(version) = extension.minimum_swift_version {
        gates.push(format!("swift(>={})", version));
    }
    gates.extend(
        extension
            .required_imports
            .iter()
            .map(|module| format!("canImport({})", module)),
    );
    gates
}
