//! Conversions from foreign error types into AstGenError

use super::{AstGenError, ErrorKind};

impl From<std::io::Error> for AstGenError {
    fn from(err: std::io::Error) -> Self {
        AstGenError::new(ErrorKind::IoError, err.to_string())
    }
}

impl From<serde_json::Error> for AstGenError {
    fn from(err: serde_json::Error) -> Self {
        AstGenError::new(
            ErrorKind::ConfigError,
            format!("invalid node table JSON: {}", err),
        )
    }
}

/// Helper trait for converting String errors to AstGenError
pub trait IntoAstGenError {
    fn into_type_error(self) -> AstGenError;
}

impl IntoAstGenError for String {
    fn into_type_error(self) -> AstGenError {
        AstGenError::new(ErrorKind::InvalidTypeExpr, self)
    }
}
