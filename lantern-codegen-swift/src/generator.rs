use lantern_ast::{Declaration, Expression, GenericConstraint, TypeRef};
use lantern_codegen::{
    CodeBuilder,
    builder::{Indentation, with_indent},
};
use tracing::debug;

use crate::Configuration;

/// Emits Swift declarations into a buffer it owns.
///
/// One generator serves one generation run: create it, feed it top-level
/// declarations, then take the text with [`into_source`](Self::into_source).
///
/// ```
/// use lantern_ast::Extension;
/// use lantern_codegen_swift::{CodeGenerator, Configuration};
///
/// let configuration = Configuration::default();
/// let mut generator = CodeGenerator::new(&configuration);
/// generator.generate_extension(&Extension::new("Person").public());
///
/// assert_eq!(generator.into_source(), "public extension Person {\n}\n");
/// ```
#[derive(Debug)]
pub struct CodeGenerator<'c> {
    pub(crate) configuration: &'c Configuration,
    builder: CodeBuilder,
}

impl<'c> CodeGenerator<'c> {
    pub fn new(configuration: &'c Configuration) -> Self {
        Self {
            configuration,
            builder: CodeBuilder::new(configuration.indent),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        self.configuration
    }

    /// The text generated so far.
    pub fn source(&self) -> &str {
        self.builder.as_str()
    }

    /// Current indentation depth; zero between top-level declarations.
    pub fn current_indent(&self) -> usize {
        self.builder.current_indent()
    }

    /// Consume the generator and return the generated text.
    pub fn into_source(self) -> String {
        self.builder.build()
    }

    /// Emit any declaration at file scope.
    pub fn generate(&mut self, declaration: &Declaration) {
        debug!(kind = declaration.kind(), "generating declaration");
        match declaration {
            Declaration::Extension(value) => self.generate_extension(value),
            Declaration::TypeDefinition(value) => {
                self.append_eol_if_missing();
                self.generate_type_definition(value, false);
            }
            Declaration::Function(value) => {
                self.append_eol_if_missing();
                self.generate_function_definition(value, false, false);
            }
            Declaration::Variable(value) => {
                self.append_eol_if_missing();
                self.generate_instance_variable(value, false, false);
            }
            // Constraints only have meaning inside a `where` clause.
            Declaration::GenericConstraint(value) => {
                debug!(
                    constraint = %self.string_for_constraint(value),
                    "skipping generic constraint at file scope"
                );
            }
        }
    }

    /// Emit several file-scope declarations separated by blank lines.
    pub fn generate_all<'d>(&mut self, declarations: impl IntoIterator<Item = &'d Declaration>) {
        for (i, declaration) in declarations.into_iter().enumerate() {
            if i > 0 {
                self.append_eol_if_missing();
                self.blank();
            }
            self.generate(declaration);
        }
    }

    // =========================================================================
    // Rendering of references
    // =========================================================================

    pub fn string_for_type(&self, ty: &TypeRef) -> String {
        self.configuration.names.type_name(ty)
    }

    pub fn string_for_identifier(&self, name: &str) -> String {
        self.configuration.names.identifier(name)
    }

    /// `T : P` or `T == U`.
    pub fn string_for_constraint(&self, constraint: &GenericConstraint) -> String {
        match constraint {
            GenericConstraint::Conformance { name, conforms_to } => format!(
                "{}{}{}",
                self.string_for_identifier(name),
                self.configuration.type_conformance_separator,
                self.string_for_type(conforms_to)
            ),
            GenericConstraint::SameType { name, same_type } => format!(
                "{} == {}",
                self.string_for_identifier(name),
                self.string_for_type(same_type)
            ),
        }
    }

    pub fn string_for_expression(&self, expression: &Expression) -> String {
        match expression {
            Expression::Bool(value) => value.to_string(),
            Expression::Integer(value) => value.to_string(),
            Expression::Double(value) if value.is_nan() => "Double.nan".to_string(),
            Expression::Double(value) if value.is_infinite() => {
                if value.is_sign_negative() {
                    "-Double.infinity".to_string()
                } else {
                    "Double.infinity".to_string()
                }
            }
            Expression::Double(value) => format!("{:?}", value),
            Expression::String { string } => string_literal(string),
            Expression::Nil => "nil".to_string(),
            Expression::Raw(source) => source.clone(),
        }
    }

    pub(crate) fn join_types(&self, types: &[TypeRef]) -> String {
        types
            .iter()
            .map(|ty| self.string_for_type(ty))
            .collect::<Vec<_>>()
            .join(&self.configuration.identifier_list_separator)
    }

    pub(crate) fn join_constraints(&self, constraints: &[GenericConstraint]) -> String {
        constraints
            .iter()
            .map(|c| self.string_for_constraint(c))
            .collect::<Vec<_>>()
            .join(&self.configuration.identifier_list_separator)
    }

    // =========================================================================
    // Buffer access
    // =========================================================================

    pub(crate) fn append(&mut self, s: &str) {
        self.builder.append(s);
    }

    pub(crate) fn append_indent(&mut self) {
        self.builder.append_indent();
    }

    pub(crate) fn append_eol(&mut self) {
        self.builder.append_eol();
    }

    pub(crate) fn append_eol_if_missing(&mut self) {
        self.builder.append_eol_if_missing();
    }

    pub(crate) fn writeln(&mut self, s: &str) {
        self.builder.writeln(s);
    }

    pub(crate) fn blank(&mut self) {
        self.builder.blank();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.builder.is_empty()
    }

    /// Run `body` one indentation level deeper, restored on any exit.
    pub(crate) fn indent<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        with_indent(self, body)
    }
}

impl Indentation for CodeGenerator<'_> {
    fn indent_level_mut(&mut self) -> &mut usize {
        self.builder.indent_level_mut()
    }
}

/// Quote and escape a Swift string literal.
fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:X}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
