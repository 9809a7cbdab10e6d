//! Indentation configuration for code generation.

use std::borrow::Cow;

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation (Swift, as emitted by Xcode templates for generated code).
    pub const SWIFT: Self = Self::Spaces(2);

    /// The text of one indent level.
    pub fn unit(&self) -> Cow<'static, str> {
        match self {
            Self::Spaces(2) => Cow::Borrowed("  "),
            Self::Spaces(4) => Cow::Borrowed("    "),
            Self::Spaces(width) => Cow::Owned(" ".repeat(usize::from(*width))),
            Self::Tab => Cow::Borrowed("\t"),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SWIFT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit() {
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Indent::Spaces(4).unit(), "    ");
        assert_eq!(Indent::Tab.unit(), "\t");
    }

    #[test]
    fn test_any_width_is_honoured() {
        assert_eq!(Indent::Spaces(6).unit(), "      ");
        assert_eq!(Indent::Spaces(1).unit(), " ");
        assert_eq!(Indent::Spaces(0).unit(), "");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::SWIFT);
        assert_eq!(Indent::SWIFT, Indent::Spaces(2));
    }
}
