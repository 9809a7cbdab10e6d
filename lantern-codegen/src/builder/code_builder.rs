//! Output buffer for generated source with tracked indentation.

use super::{Indent, Indentation, guard};

/// Accumulates generated source text and tracks the current indentation
/// depth.
///
/// Lines written with [`writeln`](Self::writeln) are prefixed with the
/// current indentation, raw text written with [`append`](Self::append) is
/// not. Nested scopes go through [`with_indent`](Self::with_indent), which
/// restores the depth on every exit path, including unwinding.
///
/// # Example
///
/// ```
/// use lantern_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::swift();
/// builder.writeln("struct Person {");
/// builder.with_indent(|b| {
///     b.writeln("let name : String");
/// });
/// builder.writeln("}");
///
/// assert_eq!(builder.build(), "struct Person {\n  let name : String\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    /// One level of `indent`, rendered once.
    unit: String,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            unit: indent.unit().into_owned(),
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (Swift default).
    pub fn swift() -> Self {
        Self::new(Indent::SWIFT)
    }

    /// Append raw text without indentation or line break.
    pub fn append(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Append the indentation prefix for the current depth.
    pub fn append_indent(&mut self) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.unit);
        }
        self
    }

    /// Terminate the current line.
    pub fn append_eol(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Terminate the current line unless the buffer is empty or already
    /// ends with a line terminator.
    pub fn append_eol_if_missing(&mut self) -> &mut Self {
        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        self
    }

    /// Write an indented line. An empty string writes a bare blank line.
    pub fn writeln(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            return self.blank();
        }
        self.append_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Write a blank line (no indentation).
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Run `body` one indentation level deeper.
    ///
    /// The previous depth is restored when `body` returns or unwinds.
    pub fn with_indent<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        guard::with_indent(self, body)
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// The indentation style used for one level.
    pub fn indent_style(&self) -> Indent {
        self.indent
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Indentation for CodeBuilder {
    fn indent_level_mut(&mut self) -> &mut usize {
        &mut self.indent_level
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::swift()
    }
}
