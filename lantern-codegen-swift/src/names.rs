//! Swift name rendering.

use lantern_ast::TypeRef;

/// Turns type references and identifiers into Swift source text.
///
/// Supplied to the generator through
/// [`Configuration`](crate::Configuration). Implementations must be pure:
/// the generator calls them for every reference it renders and never
/// caches the result.
pub trait NameRenderer {
    /// Render a type reference.
    fn type_name(&self, ty: &TypeRef) -> String;

    /// Render a declaration or parameter name.
    fn identifier(&self, name: &str) -> String;
}

/// Swift keywords that need backticks when used as identifiers.
///
/// Contextual keywords (`open`, `get`, `set`, `mutating`, …) are valid
/// names and stay bare.
pub const SWIFT_RESERVED_WORDS: &[&str] = &[
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import",
    "init", "inout", "internal", "let", "operator", "private", "precedencegroup",
    "protocol", "public", "rethrows", "static", "struct", "subscript", "typealias", "var",
    "break", "case", "catch", "continue", "default", "defer", "do", "else", "fallthrough", "for",
    "guard", "if", "in", "repeat", "return", "throw", "switch", "where", "while", "Any", "as",
    "false", "is", "nil", "self", "Self", "super", "throws", "true", "try",
];

/// The default renderer: Swift type syntax, backticked reserved words.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftNames;

impl NameRenderer for SwiftNames {
    fn type_name(&self, ty: &TypeRef) -> String {
        ty.to_string()
    }

    fn identifier(&self, name: &str) -> String {
        if SWIFT_RESERVED_WORDS.contains(&name) {
            format!("`{}`", name)
        } else {
            name.to_string()
        }
    }
}
