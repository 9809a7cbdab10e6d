//! Validation of parsed manifests.

use lantern_ast::{Extension, FunctionDefinition, TypeDefinition, Variable};
use miette::SourceSpan;

use crate::{Format, Result, error::SourceContext};

/// Validation context that carries source information and the path of the
/// declaration being checked (e.g. `Person.fetch`).
#[derive(Debug, Clone)]
pub(crate) struct ParseContext<'a> {
    source: &'a SourceContext,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: self.source,
            path,
        }
    }

    /// Get a context description for error messages.
    ///
    /// For example: "parameter in 'Person.fetch'" or just "extension".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path.join("."))
        }
    }

    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), value)
    }

    /// Validate that a name is a Swift identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }
        Ok(())
    }

    pub fn validate_format(&self, format: &Format) -> Result<()> {
        if let Some(indent) = &format.indent
            && indent.resolve().is_none()
        {
            let value = indent.to_string();
            return Err(self
                .source
                .invalid_indent_error(&value, find_key_span(self.source.src(), "indent")));
        }

        let separators = [
            ("identifier_list_separator", &format.identifier_list_separator),
            ("type_conformance_separator", &format.type_conformance_separator),
        ];
        for (key, value) in separators {
            if value.as_deref() == Some("") {
                return Err(self.source.validation_error(
                    format!("{} must not be empty", key),
                    find_key_span(self.source.src(), key),
                ));
            }
        }
        Ok(())
    }

    pub fn validate_extension(
        &self,
        extension: &'a Extension,
        extended_type: &'a str,
    ) -> Result<()> {
        if let Some(version) = extension.minimum_swift_version
            && version.major < 5
        {
            let text = version.to_string();
            return Err(self.source.swift_version_error(
                &text,
                extended_type,
                self.find_span(&text),
            ));
        }

        let ctx = self.push(extended_type);
        for module in &extension.required_imports {
            ctx.validate_name(module, "required import")?;
        }
        for definition in &extension.type_definitions {
            ctx.validate_type_definition(definition)?;
        }
        for variable in &extension.type_variables {
            ctx.validate_variable(variable)?;
        }
        for function in extension.type_functions.iter().chain(&extension.functions) {
            ctx.validate_function(function)?;
        }
        Ok(())
    }

    fn validate_type_definition(&self, definition: &'a TypeDefinition) -> Result<()> {
        self.validate_name(&definition.name, "type")?;

        let ctx = self.push(&definition.name);
        for alias in &definition.type_aliases {
            ctx.validate_name(&alias.name, "type alias")?;
        }
        for variable in definition.type_variables.iter().chain(&definition.variables) {
            ctx.validate_variable(variable)?;
        }
        for nested in &definition.nested_types {
            ctx.validate_type_definition(nested)?;
        }
        for function in definition.type_functions.iter().chain(&definition.functions) {
            ctx.validate_function(function)?;
        }
        Ok(())
    }

    fn validate_variable(&self, variable: &Variable) -> Result<()> {
        self.validate_name(&variable.name, "variable")
    }

    fn validate_function(&self, function: &'a FunctionDefinition) -> Result<()> {
        self.validate_name(&function.name, "function")?;

        let ctx = self.push(&function.name);
        for generic in &function.generic_parameters {
            ctx.validate_name(generic, "generic parameter")?;
        }
        for parameter in &function.parameters {
            ctx.validate_name(&parameter.name, "parameter")?;
            if let Some(label) = parameter.label.as_deref()
                && label != "_"
            {
                ctx.validate_name(label, "parameter label")?;
            }
        }
        Ok(())
    }
}

/// Find the span of a string value (`"value"`) in the source, falling back
/// to any occurrence of the bare text.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return src
            .find("\"\"")
            .map(|pos| SourceSpan::from((pos, 2)));
    }
    let quoted = format!("\"{}\"", value);
    if let Some(pos) = src.find(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, value.len())));
    }
    src.find(value)
        .map(|pos| SourceSpan::from((pos, value.len())))
}

/// Find the span of a `key = …` assignment.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    src.lines()
        .scan(0, |offset, line| {
            let start = *offset;
            *offset += line.len() + 1;
            Some((start, line))
        })
        .find_map(|(start, line)| {
            let trimmed = line.trim_start();
            let rest = trimmed.strip_prefix(key)?;
            if !rest.trim_start().starts_with('=') {
                return None;
            }
            let indent = line.len() - trimmed.len();
            Some(SourceSpan::from((start + indent, line.trim().len())))
        })
}

/// Validate that a name is a Swift identifier (backticks allowed around it).
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<String> {
    let bare = name
        .strip_prefix('`')
        .and_then(|n| n.strip_suffix('`'))
        .unwrap_or(name);

    let mut chars = bare.chars();
    let Some(first) = chars.next() else {
        return Some("name cannot be empty".to_string());
    };
    if !(first.is_alphabetic() || first == '_') {
        return Some(format!("name cannot start with '{}'", first));
    }
    if let Some(c) = chars.find(|c| !(c.is_alphanumeric() || *c == '_')) {
        return Some(format!("name cannot contain '{}'", c));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert_eq!(validate_identifier("personId"), None);
        assert_eq!(validate_identifier("_Concurrency"), None);
        assert_eq!(validate_identifier("`default`"), None);
        assert_eq!(validate_identifier("Straße"), None);
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1st").is_some());
        assert!(validate_identifier("first-name").is_some());
    }

    #[test]
    fn test_find_value_span() {
        let src = "name = \"fetch\"\nother = \"fetchAll\"";
        assert_eq!(find_value_span(src, "fetch"), Some(SourceSpan::from((8, 5))));
        assert_eq!(find_value_span(src, "missing"), None);
    }

    #[test]
    fn test_find_key_span() {
        let src = "[format]\n  indent = 5\n";
        assert_eq!(find_key_span(src, "indent"), Some(SourceSpan::from((11, 10))));
        assert_eq!(find_key_span("indentation = 1", "indent"), None);
    }

    #[test]
    fn test_context_for() {
        let source = SourceContext::new("", "lantern.toml");
        let ctx = ParseContext::new(&source);
        assert_eq!(ctx.context_for("extension"), "extension");
        assert_eq!(
            ctx.push("Person").push("fetch").context_for("parameter"),
            "parameter in 'Person.fetch'"
        );
    }
}
