//! Native SQLite error values.

use thiserror::Error;

/// Text reported for an error that carries no message.
pub const NO_MESSAGE: &str = "no message";

/// Access to the last-error state of a native database handle.
///
/// Implemented by whatever wraps the raw `sqlite3 *` connection; the
/// two methods correspond to `sqlite3_errcode` and `sqlite3_errmsg`.
pub trait NativeHandle {
    /// The most recent error code of the handle.
    fn last_error_code(&self) -> i32;

    /// The most recent error message of the handle, if any.
    fn last_error_message(&self) -> Option<String>;
}

/// A raw SQLite error: the result code plus the optional message.
///
/// Two errors are equal when both code and message are equal.
///
/// # Example
///
/// ```
/// use lantern_core::SqlError;
///
/// let busy = SqlError::new(5, Some("database is locked"));
/// assert_eq!(busy.code(), 5);
/// assert_eq!(busy.message(), "database is locked");
/// assert_eq!(SqlError::new(5, None).message(), "no message");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("SQLite error {code}: {}", self.message())]
pub struct SqlError {
    code: i32,
    message: Option<String>,
}

impl SqlError {
    /// Create an error from a result code and optional message.
    pub fn new(code: i32, message: Option<&str>) -> Self {
        Self {
            code,
            message: message.map(str::to_string),
        }
    }

    /// Capture the last error recorded on a native handle.
    pub fn from_handle(handle: &impl NativeHandle) -> Self {
        Self {
            code: handle.last_error_code(),
            message: handle.last_error_message(),
        }
    }

    /// The SQLite result code.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// The message, or [`NO_MESSAGE`] when the error carries none.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(NO_MESSAGE)
    }

    /// The message exactly as captured.
    pub fn raw_message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeConnection {
        code: i32,
        message: Option<&'static str>,
    }

    impl NativeHandle for FakeConnection {
        fn last_error_code(&self) -> i32 {
            self.code
        }

        fn last_error_message(&self) -> Option<String> {
            self.message.map(str::to_string)
        }
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(SqlError::new(1, Some("a")), SqlError::new(1, Some("a")));
        assert_ne!(SqlError::new(1, Some("a")), SqlError::new(2, Some("a")));
        assert_ne!(SqlError::new(1, Some("a")), SqlError::new(1, Some("b")));
    }

    #[test]
    fn test_missing_message() {
        let error = SqlError::new(1, None);
        assert_eq!(error.message(), "no message");
        assert_ne!(error.message(), "");
        assert_eq!(error.raw_message(), None);
    }

    #[test]
    fn test_absent_and_literal_no_message_differ() {
        assert_ne!(SqlError::new(1, None), SqlError::new(1, Some(NO_MESSAGE)));
    }

    #[test]
    fn test_empty_message_is_kept() {
        let error = SqlError::new(1, Some(""));
        assert_eq!(error.message(), "");
        assert_eq!(error.raw_message(), Some(""));
    }

    #[test]
    fn test_from_handle() {
        let db = FakeConnection {
            code: 19,
            message: Some("UNIQUE constraint failed: person.id"),
        };
        let error = SqlError::from_handle(&db);
        assert_eq!(
            error,
            SqlError::new(19, Some("UNIQUE constraint failed: person.id"))
        );
    }

    #[test]
    fn test_from_handle_without_message() {
        let db = FakeConnection {
            code: 21,
            message: None,
        };
        assert_eq!(SqlError::from_handle(&db).message(), NO_MESSAGE);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            SqlError::new(5, Some("database is locked")).to_string(),
            "SQLite error 5: database is locked"
        );
        assert_eq!(SqlError::new(1, None).to_string(), "SQLite error 1: no message");
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&SqlError::new(1, None));
    }
}
