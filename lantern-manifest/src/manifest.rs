use std::{path::Path, str::FromStr};

use lantern_ast::Extension;
use lantern_codegen::Indent;
use serde::Deserialize;
use tracing::debug;

use crate::{Error, Format, Result, error::SourceContext, validate::ParseContext};

/// Root of a `lantern.toml` manifest.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output formatting options
    #[serde(default)]
    pub format: Format,

    /// Modules imported unconditionally at the top of the generated file
    #[serde(default)]
    pub imports: Vec<String>,

    /// Extensions, in emission order
    #[serde(default, rename = "extension")]
    pub extensions: Vec<Extension>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "lantern.toml")
    }
}

impl Manifest {
    /// Parse a lantern.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading manifest");
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a lantern.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source = SourceContext::new(content, filename);
        let manifest: Self = toml::from_str(content).map_err(|e| source.parse_error(e))?;
        manifest.validate(&source)?;
        debug!(
            filename,
            extensions = manifest.extensions.len(),
            imports = manifest.imports.len(),
            "parsed manifest"
        );
        Ok(manifest)
    }

    /// Indent from `[format]`, if set.
    pub fn indent(&self) -> Option<Indent> {
        self.format.indent.as_ref().and_then(|indent| indent.resolve())
    }

    /// Validate the manifest after parsing
    fn validate(&self, source: &SourceContext) -> Result<()> {
        let ctx = ParseContext::new(source);
        ctx.validate_format(&self.format)?;

        for module in &self.imports {
            ctx.validate_name(module, "import")?;
        }

        for extension in &self.extensions {
            let extended_type = extension.extended_type.to_string();
            ctx.validate_extension(extension, &extended_type)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lantern_ast::{GenericConstraint, SwiftVersion, TypeRef};

    use super::*;

    fn parse(content: &str) -> Result<Manifest> {
        Manifest::from_str(content)
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = parse("").unwrap();
        assert!(manifest.extensions.is_empty());
        assert!(manifest.imports.is_empty());
        assert_eq!(manifest.indent(), None);
    }

    #[test]
    fn test_parse_extension() {
        let manifest = parse(
            r#"
imports = ["Foundation", "SQLite3"]

[format]
indent = 4
header = "Generated by lantern"

[[extension]]
extended_type = "SQLDatabase"
public = true
conformances = ["SQLDatabaseAsyncFetchOperations"]
generic_constraints = [{ name = "Row", conforms_to = "Decodable" }]
minimum_swift_version = "5.5"
required_imports = ["_Concurrency"]

[[extension.type_variables]]
name = "schemaVersion"
type = "Int"
value = 3
comment = "Bumped on every migration"

[[extension.functions]]
name = "fetch"
async = true
throws = true
return_type = "[Row]"
body = ["try await fetchAll()"]
"#,
        )
        .unwrap();

        assert_eq!(manifest.imports, vec!["Foundation", "SQLite3"]);
        assert_eq!(manifest.indent(), Some(Indent::Spaces(4)));
        assert_eq!(manifest.format.header.as_deref(), Some("Generated by lantern"));

        let extension = &manifest.extensions[0];
        assert_eq!(extension.extended_type, TypeRef::named("SQLDatabase"));
        assert!(extension.public);
        assert_eq!(extension.minimum_swift_version, Some(SwiftVersion::new(5, 5)));
        assert_eq!(extension.required_imports, vec!["_Concurrency"]);
        assert_eq!(
            extension.generic_constraints,
            vec![GenericConstraint::conformance("Row", "Decodable")]
        );
        assert_eq!(extension.type_variables[0].name, "schemaVersion");
        assert!(extension.functions[0].is_async);
        assert_eq!(extension.functions[0].return_type, Some(TypeRef::from("[Row]")));
    }

    #[test]
    fn test_tab_indent() {
        let manifest = parse("[format]\nindent = \"tab\"\n").unwrap();
        assert_eq!(manifest.indent(), Some(Indent::Tab));
    }

    #[test]
    fn test_invalid_indent() {
        let err = parse("[format]\nindent = 5\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidIndent { ref value, .. } if value == "5"));
    }

    #[test]
    fn test_empty_separator() {
        let err = parse("[format]\nidentifier_list_separator = \"\"\n").unwrap_err();
        assert!(
            matches!(*err, Error::Validation { ref message, .. } if message.contains("identifier_list_separator"))
        );
    }

    #[test]
    fn test_unsupported_swift_version() {
        let err = parse(
            r#"
[[extension]]
extended_type = "Person"
minimum_swift_version = "4.2"
"#,
        )
        .unwrap_err();
        match *err {
            Error::UnsupportedSwiftVersion {
                ref version,
                ref extended_type,
                span,
                ..
            } => {
                assert_eq!(version, "4.2");
                assert_eq!(extended_type, "Person");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_required_import() {
        let err = parse(
            r#"
[[extension]]
extended_type = "Person"
required_imports = ["Combine", "not-a-module"]
"#,
        )
        .unwrap_err();
        match *err {
            Error::InvalidIdentifier {
                ref name,
                ref context,
                ..
            } => {
                assert_eq!(name, "not-a-module");
                assert_eq!(context, "required import in 'Person'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_parameter_name() {
        let err = parse(
            r#"
[[extension]]
extended_type = "Person"

[[extension.functions]]
name = "fetch"
parameters = [{ name = "1id", type = "Int" }]
"#,
        )
        .unwrap_err();
        assert!(
            matches!(*err, Error::InvalidIdentifier { ref context, .. } if context == "parameter in 'Person.fetch'")
        );
    }

    #[test]
    fn test_empty_import_name() {
        let err = parse("imports = [\"\"]\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { ref reason, .. } if reason.contains("empty")));
    }

    #[test]
    fn test_parse_error() {
        let err = parse("[[extension]]\npublic = true\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field() {
        let err = parse("[format]\nwidth = 80\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lantern.toml");
        std::fs::write(&path, "[[extension]]\nextended_type = \"Person\"\n").unwrap();

        let manifest = Manifest::from_file(&path).unwrap();
        assert_eq!(manifest.extensions.len(), 1);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
