//! Error types for sqeval tables.

use crate::types::SqlType;
use alloc::string::String;
use core::fmt;

/// Result type alias for table construction.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while constructing a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Invalid schema definition.
    InvalidSchema {
        message: String,
    },
    /// A row holds a value whose type differs from its column.
    TypeMismatch {
        column: String,
        expected: SqlType,
        got: SqlType,
    },
    /// A row has the wrong number of values.
    RowArity {
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSchema { message } => {
                write!(f, "Invalid schema: {}", message)
            }
            Error::TypeMismatch {
                column,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Type mismatch in column {}: expected {}, got {}",
                    column, expected, got
                )
            }
            Error::RowArity { expected, got } => {
                write!(f, "Row has {} values, expected {}", got, expected)
            }
        }
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            message: message.into(),
        }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(column: impl Into<String>, expected: SqlType, got: SqlType) -> Self {
        Error::TypeMismatch {
            column: column.into(),
            expected,
            got,
        }
    }

    /// Creates a row arity error.
    pub fn row_arity(expected: usize, got: usize) -> Self {
        Error::RowArity { expected, got }
    }
}
