use lantern_ast::{TypeAlias, TypeDefinition};
use tracing::trace;

use crate::CodeGenerator;

impl CodeGenerator<'_> {
    /// `public struct Person : Identifiable { … }`
    ///
    /// Members follow in a fixed order: type aliases, static variables,
    /// instance variables, nested types, static functions, functions.
    /// `omit_public` drops the type's own `public` (inside a public
    /// extension); it does not propagate to the members.
    pub fn generate_type_definition(&mut self, value: &TypeDefinition, omit_public: bool) {
        trace!(name = %value.name, kind = value.kind.keyword(), "generating type definition");

        if let Some(comment) = &value.comment {
            self.generate_comment(comment);
        }

        let configuration = self.configuration;
        let name = self.string_for_identifier(&value.name);
        self.append_indent();
        if value.public && !omit_public {
            self.append("public ");
        }
        self.append(value.kind.keyword());
        self.append(" ");
        self.append(&name);
        if !value.conformances.is_empty() {
            let conformances = self.join_types(&value.conformances);
            self.append(&configuration.type_conformance_separator);
            self.append(&conformances);
        }
        self.append(" {");
        self.append_eol();

        self.indent(|g| {
            if !value.type_aliases.is_empty() {
                g.blank();
                for alias in &value.type_aliases {
                    g.generate_type_alias(alias);
                }
            }

            g.generate_variable_group(&value.type_variables, true, false);
            g.generate_variable_group(&value.variables, false, false);

            for nested in &value.nested_types {
                g.blank();
                g.generate_type_definition(nested, false);
            }

            for function in &value.type_functions {
                g.blank();
                g.generate_function_definition(function, false, true);
            }

            for function in &value.functions {
                g.blank();
                g.generate_function_definition(function, false, false);
            }
        });
        self.writeln("}");
    }

    /// `public typealias ID = Int64`
    pub fn generate_type_alias(&mut self, value: &TypeAlias) {
        let visibility = if value.public { "public " } else { "" };
        let line = format!(
            "{}typealias {} = {}",
            visibility,
            self.string_for_identifier(&value.name),
            self.string_for_type(&value.ty)
        );
        self.writeln(&line);
    }
}
