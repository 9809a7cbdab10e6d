//! Emit operation - Swift generation from a manifest.

use std::path::Path;

use eyre::{Context, Result};
use lantern_ast::Declaration;
use lantern_codegen::Indent;
use lantern_codegen_swift::{CodeGenerator, Configuration};
use lantern_core::{Overwrite, SourceFile};
use lantern_manifest::Manifest;
use tracing::debug;

use crate::reports::{EmitReport, EmitResult};

/// Options for the emit operation.
pub struct EmitOptions<'a> {
    /// Output file; stdout when absent.
    pub output: Option<&'a Path>,
    /// Overrides `[format] indent`.
    pub indent: Option<Indent>,
    /// Leave an existing output file untouched.
    pub keep_existing: bool,
}

/// Build the generator configuration from `[format]`, with `indent` taking
/// precedence over the manifest.
pub fn configuration(manifest: &Manifest, indent: Option<Indent>) -> Configuration {
    let format = &manifest.format;
    let mut configuration = Configuration::default();
    if let Some(indent) = indent.or_else(|| manifest.indent()) {
        configuration = configuration.indent(indent);
    }
    if let Some(separator) = &format.type_conformance_separator {
        configuration = configuration.type_conformance_separator(separator);
    }
    if let Some(separator) = &format.identifier_list_separator {
        configuration = configuration.identifier_list_separator(separator);
    }
    if let Some(separator) = &format.property_type_separator {
        configuration = configuration.property_type_separator(separator);
    }
    configuration
}

/// Render the manifest's imports and extensions as Swift source.
pub fn render(manifest: &Manifest, configuration: &Configuration) -> String {
    let declarations: Vec<Declaration> = manifest
        .extensions
        .iter()
        .cloned()
        .map(Declaration::from)
        .collect();

    let mut generator = CodeGenerator::new(configuration);
    generator.generate_all(&declarations);
    let body = generator.into_source();

    let mut source = String::new();
    for module in &manifest.imports {
        source.push_str("import ");
        source.push_str(module);
        source.push('\n');
    }
    if !source.is_empty() && !body.is_empty() {
        source.push('\n');
    }
    source.push_str(&body);
    if !source.is_empty() && !source.ends_with('\n') {
        source.push('\n');
    }
    source
}

/// Execute the emit operation.
pub fn emit(manifest: &Manifest, opts: EmitOptions) -> Result<EmitReport> {
    let configuration = configuration(manifest, opts.indent);
    debug!(?configuration, "emitting");

    let source = render(manifest, &configuration);
    let path = opts.output.unwrap_or(Path::new("-"));
    let mut file = SourceFile::new(path, source).overwrite(if opts.keep_existing {
        Overwrite::IfMissing
    } else {
        Overwrite::Always
    });
    if let Some(header) = &manifest.format.header {
        file = file.header(header);
    }

    let result = match opts.output {
        None => EmitResult::Stdout(file.render()),
        Some(path) => {
            let written = file
                .write()
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            EmitResult::Written {
                path: path.to_path_buf(),
                result: written,
            }
        }
    };

    Ok(EmitReport {
        extension_count: manifest.extensions.len(),
        result,
    })
}
