use crate::CodeGenerator;

impl CodeGenerator<'_> {
    /// `/// …` documentation lines, one per line of `comment`.
    pub fn generate_comment(&mut self, comment: &str) {
        for line in comment.lines() {
            if line.trim().is_empty() {
                self.writeln("///");
            } else {
                self.writeln(&format!("/// {}", line.trim_end()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{CodeGenerator, Configuration};

    #[test]
    fn test_multiline_comment() {
        let configuration = Configuration::default();
        let mut generator = CodeGenerator::new(&configuration);
        generator.indent(|g| g.generate_comment("Fetch records.\n\nReturns all rows.  "));
        assert_eq!(
            generator.into_source(),
            "  /// Fetch records.\n  ///\n  /// Returns all rows.\n"
        );
    }
}
