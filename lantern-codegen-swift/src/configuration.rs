use std::fmt;

use lantern_codegen::Indent;

use crate::{NameRenderer, SwiftNames};

/// Formatting options for one generation run.
///
/// Passed explicitly to every [`CodeGenerator`](crate::CodeGenerator); there
/// is no process-wide default beyond [`Configuration::default`].
pub struct Configuration {
    /// Between a type and its conformance list (`extension Foo : Bar`).
    pub type_conformance_separator: String,
    /// Between items of conformance, constraint and parameter lists.
    pub identifier_list_separator: String,
    /// Between a property name and its type (`let id : Int`).
    pub property_type_separator: String,
    pub indent: Indent,
    pub names: Box<dyn NameRenderer>,
}

impl Configuration {
    /// Replace the name-rendering capability.
    pub fn names(mut self, names: impl NameRenderer + 'static) -> Self {
        self.names = Box::new(names);
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn type_conformance_separator(mut self, separator: impl Into<String>) -> Self {
        self.type_conformance_separator = separator.into();
        self
    }

    pub fn identifier_list_separator(mut self, separator: impl Into<String>) -> Self {
        self.identifier_list_separator = separator.into();
        self
    }

    pub fn property_type_separator(mut self, separator: impl Into<String>) -> Self {
        self.property_type_separator = separator.into();
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            type_conformance_separator: " : ".to_string(),
            identifier_list_separator: ", ".to_string(),
            property_type_separator: " : ".to_string(),
            indent: Indent::SWIFT,
            names: Box::new(SwiftNames),
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("type_conformance_separator", &self.type_conformance_separator)
            .field("identifier_list_separator", &self.identifier_list_separator)
            .field("property_type_separator", &self.property_type_separator)
            .field("indent", &self.indent)
            .finish_non_exhaustive()
    }
}
