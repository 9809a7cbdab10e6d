use lantern_ast::{FunctionDefinition, Parameter};
use tracing::trace;

use crate::CodeGenerator;

impl CodeGenerator<'_> {
    /// `@inlinable public static func name<T>(…) async throws -> R { … }`
    ///
    /// Generic constraints go into an indented `where` line with the opening
    /// brace on its own line, as for extensions.
    pub fn generate_function_definition(
        &mut self,
        value: &FunctionDefinition,
        omit_public: bool,
        is_static: bool,
    ) {
        trace!(name = %value.name, is_static, "generating function");

        if let Some(comment) = &value.comment {
            self.generate_comment(comment);
        }
        if value.inlinable {
            self.writeln("@inlinable");
        }
        if value.discardable_result {
            self.writeln("@discardableResult");
        }

        let signature = self.function_signature(value, omit_public, is_static);
        self.append_indent();
        self.append(&signature);

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
            for line in &value.body {
                if line.is_empty() {
                    g.writeln("");
                }
                for part in line.lines() {
                    g.writeln(part);
                }
            }
        });
        self.writeln("}");
    }

    fn function_signature(
        &self,
        value: &FunctionDefinition,
        omit_public: bool,
        is_static: bool,
    ) -> String {
        let separator = &self.configuration.identifier_list_separator;
        let mut signature = String::new();

        if value.public && !omit_public {
            signature.push_str("public ");
        }
        if is_static {
            signature.push_str("static ");
        }
        signature.push_str("func ");
        signature.push_str(&self.string_for_identifier(&value.name));

        if !value.generic_parameters.is_empty() {
            signature.push('<');
            signature.push_str(&value.generic_parameters.join(separator));
            signature.push('>');
        }

        let parameters = value
            .parameters
            .iter()
            .map(|p| self.string_for_parameter(p))
            .collect::<Vec<_>>()
            .join(separator);
        signature.push('(');
        signature.push_str(&parameters);
        signature.push(')');

        if value.is_async {
            signature.push_str(" async");
        }
        if value.throws {
            signature.push_str(" throws");
        }
        if let Some(return_type) = &value.return_type {
            signature.push_str(" -> ");
            signature.push_str(&self.string_for_type(return_type));
        }
        signature
    }

    /// `label name: inout Type = default`
    pub fn string_for_parameter(&self, parameter: &Parameter) -> String {
        let name = self.string_for_identifier(&parameter.name);
        let mut out = match parameter.label.as_deref() {
            Some(label) if label != parameter.name => format!("{} {}", label, name),
            _ => name,
        };
        out.push_str(": ");
        if parameter.inout {
            out.push_str("inout ");
        }
        out.push_str(&self.string_for_type(&parameter.ty));
        if let Some(default) = &parameter.default {
            out.push_str(" = ");
            out.push_str(&self.string_for_expression(default));
        }
        out
    }
}
