use lantern_ast::Variable;
use tracing::trace;

use crate::CodeGenerator;

impl CodeGenerator<'_> {
    /// `public static let name : Type = value`
    pub fn generate_instance_variable(&mut self, value: &Variable, is_static: bool, omit_public: bool) {
        trace!(name = %value.name, is_static, "generating variable");

        if let Some(comment) = &value.comment {
            self.generate_comment(comment);
        }

        let mut line = String::new();
        if value.public && !omit_public {
            line.push_str("public ");
        }
        if is_static {
            line.push_str("static ");
        }
        line.push_str(if value.readonly { "let " } else { "var " });
        line.push_str(&self.string_for_identifier(&value.name));
        if let Some(ty) = &value.ty {
            line.push_str(&self.configuration.property_type_separator);
            line.push_str(&self.string_for_type(ty));
        }
        if let Some(expression) = &value.value {
            line.push_str(" = ");
            line.push_str(&self.string_for_expression(expression));
        }
        self.writeln(&line);
    }

    /// A group of variables: one blank line before the group, and an extra
    /// one after every variable that carried a comment.
    pub(crate) fn generate_variable_group(
        &mut self,
        variables: &[Variable],
        is_static: bool,
        omit_public: bool,
    ) {
        if variables.is_empty() {
            return;
        }
        self.blank();

        let mut last_had_comment = false;
        for variable in variables {
            if last_had_comment {
                self.blank();
            }
            self.generate_instance_variable(variable, is_static, omit_public);
            last_had_comment = variable.comment.is_some();
        }
    }
}
