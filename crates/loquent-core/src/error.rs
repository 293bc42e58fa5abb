//! Error types for Loquent operations.

use crate::value::Value;
use std::fmt;

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The primary error type for all Loquent operations.
#[derive(Debug)]
pub enum Error {
    /// The identifier sanitizer received an unsupported reference shape
    /// (more than one `.` separator).
    MalformedIdentifier {
        /// The offending reference, verbatim.
        reference: String,
    },
    /// CREATE TABLE was attempted with zero declared columns.
    EmptySchema {
        /// Table the statement was built for.
        table: String,
    },
    /// Conflicting or otherwise invalid schema declaration.
    Schema(SchemaError),
    /// The database driver reported a failure.
    Execution(ExecutionError),
    /// Type conversion failure when reading a row value.
    Type(TypeError),
    /// Custom error with message
    Custom(String),
}

/// Driver failure enriched with the statement that produced it.
///
/// Carries the rendered SQL and the bound parameter ledger for diagnostics;
/// nothing beyond the already-bound values is captured.
#[derive(Debug)]
pub struct ExecutionError {
    /// The driver's own message.
    pub message: String,
    /// The rendered SQL text that was dispatched.
    pub sql: String,
    /// The ordered parameter ledger that accompanied it.
    pub params: Vec<Value>,
}

/// Invalid schema declaration (e.g. AUTOINCREMENT combined with a
/// composite primary key).
#[derive(Debug)]
pub struct SchemaError {
    /// Table the declaration belongs to.
    pub table: String,
    /// What was wrong with it.
    pub message: String,
}

/// Value extraction failure.
#[derive(Debug)]
pub struct TypeError {
    /// The type the caller asked for.
    pub expected: &'static str,
    /// The type (or shape) actually found.
    pub actual: String,
    /// Column name, when the failure is tied to one.
    pub column: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedIdentifier { reference } => {
                write!(f, "malformed identifier reference: {reference:?}")
            }
            Error::EmptySchema { table } => {
                write!(f, "cannot create table {table}: no columns declared")
            }
            Error::Schema(e) => write!(f, "schema error on {}: {}", e.table, e.message),
            Error::Execution(e) => {
                write!(f, "execution failed: {} (sql: {})", e.message, e.sql)
            }
            Error::Type(e) => {
                write!(f, "expected {} but found {}", e.expected, e.actual)?;
                if let Some(column) = &e.column {
                    write!(f, " in column {column}")?;
                }
                Ok(())
            }
            Error::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}
