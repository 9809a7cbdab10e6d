//! The `[format]` table.

use std::str::FromStr;

use lantern_codegen::Indent;
use serde::Deserialize;

/// Formatting options read from `[format]`. Unset keys keep the
/// generator's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Format {
    /// Number of spaces, or `"tab"`.
    #[serde(default)]
    pub indent: Option<IndentSetting>,
    #[serde(default)]
    pub type_conformance_separator: Option<String>,
    #[serde(default)]
    pub identifier_list_separator: Option<String>,
    #[serde(default)]
    pub property_type_separator: Option<String>,
    /// Comment block written at the top of generated files.
    #[serde(default)]
    pub header: Option<String>,
}

/// Raw `indent` value as written in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IndentSetting {
    Width(i64),
    Name(String),
}

impl IndentSetting {
    /// Resolve to an [`Indent`], or `None` when unsupported.
    pub fn resolve(&self) -> Option<Indent> {
        match self {
            IndentSetting::Width(width) => spaces(*width),
            IndentSetting::Name(name) => parse_indent(name).ok(),
        }
    }
}

impl std::fmt::Display for IndentSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndentSetting::Width(width) => write!(f, "{}", width),
            IndentSetting::Name(name) => f.write_str(name),
        }
    }
}

fn spaces(width: i64) -> Option<Indent> {
    match width {
        2 | 3 | 4 | 8 => Some(Indent::Spaces(width as u8)),
        _ => None,
    }
}

/// Parse an indent given as text: `"2"`, `"4"`, `"tab"`.
pub fn parse_indent(value: &str) -> std::result::Result<Indent, String> {
    if value.eq_ignore_ascii_case("tab") {
        return Ok(Indent::Tab);
    }
    i64::from_str(value)
        .ok()
        .and_then(spaces)
        .ok_or_else(|| format!("invalid indent '{}', expected 2, 3, 4, 8 or 'tab'", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_indent() {
        assert_eq!(parse_indent("tab"), Ok(Indent::Tab));
        assert_eq!(parse_indent("TAB"), Ok(Indent::Tab));
        assert_eq!(parse_indent("4"), Ok(Indent::Spaces(4)));
        assert!(parse_indent("5").is_err());
        assert!(parse_indent("tabs").is_err());
    }

    #[test]
    fn test_resolve_setting() {
        assert_eq!(IndentSetting::Width(2).resolve(), Some(Indent::Spaces(2)));
        assert_eq!(IndentSetting::Width(-1).resolve(), None);
        assert_eq!(
            IndentSetting::Name("tab".to_string()).resolve(),
            Some(Indent::Tab)
        );
    }
}
