//! Swift type references.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// A reference to a Swift type.
///
/// Parsed from and displayed as Swift type syntax, e.g. `Int?`, `[String]`,
/// `[String : Int]`, `SQLite.Connection`, `Set<Int>` or `(Int, Double)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum TypeRef {
    /// A plain or dotted type name (`Int`, `Person.ID`).
    Name(String),
    /// An optional (`T?`).
    Optional(Box<TypeRef>),
    /// An array (`[T]`).
    Array(Box<TypeRef>),
    /// A dictionary (`[K : V]`).
    Dictionary {
        key: Box<TypeRef>,
        value: Box<TypeRef>,
    },
    /// A generic type with arguments (`Set<Int>`).
    Generic { name: String, args: Vec<TypeRef> },
    /// A tuple (`(A, B)`); the empty tuple is `Void`.
    Tuple(Vec<TypeRef>),
}

impl TypeRef {
    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Create an optional type reference.
    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Create an array type reference.
    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Create a dictionary type reference.
    pub fn dictionary(key: TypeRef, value: TypeRef) -> Self {
        Self::Dictionary {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Create a generic type reference.
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self::Generic {
            name: name.into(),
            args,
        }
    }

    /// Check if this type is optional.
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| Self::Name(name.to_string()))
    }
}

impl TryFrom<String> for TypeRef {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for TypeRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Optional(inner) => write!(f, "{}?", inner),
            Self::Array(inner) => write!(f, "[{}]", inner),
            Self::Dictionary { key, value } => write!(f, "[{} : {}]", key, value),
            Self::Generic { name, args } => {
                write!(f, "{}<", name)?;
                write_list(f, args)?;
                f.write_str(">")
            }
            Self::Tuple(elements) if elements.is_empty() => f.write_str("Void"),
            Self::Tuple(elements) => {
                f.write_str("(")?;
                write_list(f, elements)?;
                f.write_str(")")
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, types: &[TypeRef]) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", ty)?;
    }
    Ok(())
}

impl FromStr for TypeRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = TypeParser { src: s, pos: 0 };
        let ty = parser.parse_type()?;
        parser.skip_whitespace();
        if parser.pos != s.len() {
            return Err(format!(
                "unexpected '{}' after type in '{}'",
                &s[parser.pos..],
                s
            ));
        }
        Ok(ty)
    }
}

struct TypeParser<'a> {
    src: &'a str,
    pos: usize,
}

impl TypeParser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), String> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(format!("expected '{}' in type '{}'", expected, self.src))
        }
    }

    fn parse_type(&mut self) -> Result<TypeRef, String> {
        let mut ty = self.parse_primary()?;
        while self.eat('?') {
            ty = TypeRef::optional(ty);
        }
        Ok(ty)
    }

    fn parse_primary(&mut self) -> Result<TypeRef, String> {
        self.skip_whitespace();
        match self.peek() {
            Some('[') => {
                self.bump();
                let element = self.parse_type()?;
                if self.eat(':') {
                    let value = self.parse_type()?;
                    self.expect(']')?;
                    Ok(TypeRef::dictionary(element, value))
                } else {
                    self.expect(']')?;
                    Ok(TypeRef::array(element))
                }
            }
            Some('(') => {
                self.bump();
                let mut elements = self.parse_list(')')?;
                if elements.len() == 1 {
                    Ok(elements.remove(0))
                } else {
                    Ok(TypeRef::Tuple(elements))
                }
            }
            Some(c) if is_identifier_start(c) => {
                let name = self.parse_name();
                if self.eat('<') {
                    let args = self.parse_list('>')?;
                    if args.is_empty() {
                        return Err(format!("empty generic arguments in type '{}'", self.src));
                    }
                    Ok(TypeRef::generic(name, args))
                } else {
                    Ok(TypeRef::Name(name))
                }
            }
            Some(c) => Err(format!("unexpected '{}' in type '{}'", c, self.src)),
            None => Err(format!("missing type name in '{}'", self.src)),
        }
    }

    fn parse_name(&mut self) -> String {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c == '.' || is_identifier_continue(c))
        {
            self.bump();
        }
        self.src[start..self.pos].to_string()
    }

    fn parse_list(&mut self, close: char) -> Result<Vec<TypeRef>, String> {
        let mut items = Vec::new();
        if self.eat(close) {
            return Ok(items);
        }
        loop {
            items.push(self.parse_type()?);
            if self.eat(',') {
                continue;
            }
            self.expect(close)?;
            return Ok(items);
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || c == '`' || c.is_alphabetic()
}

fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}
