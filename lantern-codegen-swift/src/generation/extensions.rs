use lantern_ast::Extension;
use tracing::debug;

use crate::CodeGenerator;

/// The module whose presence in `required_imports` adds an `@available`
/// attribute to the extension. Only this exact name triggers it.
pub const CONCURRENCY_MODULE: &str = "_Concurrency";

/// Availability emitted for extensions that require [`CONCURRENCY_MODULE`].
pub const CONCURRENCY_AVAILABILITY: &str = "@available(macOS 10.15, iOS 13, tvOS 13, watchOS 6, *)";

impl CodeGenerator<'_> {
    /// `extension SQLColumn { … }`
    ///
    /// Wrapped, outermost first, in `#if swift(>=M.m)` when a minimum
    /// version is set and in `#if canImport(…)` when imports are required.
    ///
    /// # Panics
    ///
    /// When the minimum Swift version has a major version below 5.
    pub fn generate_extension(&mut self, value: &Extension) {
        debug!(extended_type = %value.extended_type, "generating extension");

        if !self.is_empty() {
            self.append_eol_if_missing();
        }

        if let Some(version) = value.minimum_swift_version {
            assert!(
                version.major >= 5,
                "minimum Swift version of an extension must be 5.0 or later, got {}",
                version
            );
            self.writeln(&format!("#if swift(>={})", version));
        }
        if !value.required_imports.is_empty() {
            let checks = value
                .required_imports
                .iter()
                .map(|module| format!("canImport({})", module))
                .collect::<Vec<_>>()
                .join(" && ");
            self.writeln(&format!("#if {}", checks));
        }

        if value
            .required_imports
            .iter()
            .any(|module| module == CONCURRENCY_MODULE)
        {
            self.writeln(CONCURRENCY_AVAILABILITY);
        }

        self.append_indent();
        if value.public && value.conformances.is_empty() {
            self.append("public ");
        }
        self.append("extension ");
        let extended_type = self.string_for_type(&value.extended_type);
        self.append(&extended_type);

        if !value.conformances.is_empty() {
            let configuration = self.configuration;
            let conformances = self.join_types(&value.conformances);
            self.append(&configuration.type_conformance_separator);
            self.append(&conformances);
        }

        if !value.generic_constraints.is_empty() {
            let constraints = self.join_constraints(&value.generic_constraints);
            self.append_eol();
            self.indent(|g| g.writeln(&format!("where {}", constraints)));
            self.writeln("{");
        } else {
            self.append(" {");
            self.append_eol();
        }

        self.indent(|g| {
            for definition in &value.type_definitions {
                g.blank();
                g.generate_type_definition(definition, value.public);
            }

            g.generate_variable_group(&value.type_variables, true, false);

            for function in &value.type_functions {
                g.blank();
                g.generate_function_definition(function, value.public, true);
            }

            for function in &value.functions {
                g.blank();
                g.generate_function_definition(function, value.public, false);
            }
        });
        self.writeln("}");

        if !value.required_imports.is_empty() {
            self.writeln("#endif // required canImports");
        }
        if let Some(version) = value.minimum_swift_version {
            self.writeln(&format!("#endif // swift(>={})", version));
        }
    }
}
