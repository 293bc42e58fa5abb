//! The database execution contract.
//!
//! The query layer never touches the persistence engine directly. Every
//! terminal operation renders one parameterized statement and hands it to
//! an [`Executor`], the narrow seam behind which the real driver lives.
//! All operations integrate with asupersync's structured concurrency via
//! the `Cx` context for cancellation and timeout handling.

use crate::row::Row;
use crate::value::Value;
use asupersync::{Cx, Outcome};
use std::fmt;

/// The result of executing one statement.
#[derive(Debug, Clone, Default)]
pub struct ExecResult {
    /// Result rows, in the engine's result order. Empty for statements
    /// that produce no rows.
    pub rows: Vec<Row>,
    /// Number of rows affected by INSERT/UPDATE/DELETE.
    pub rows_affected: u64,
    /// The generated row identifier, when the statement was an INSERT.
    pub insert_id: Option<i64>,
}

impl ExecResult {
    /// A result carrying rows.
    #[must_use]
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// A result reporting affected rows.
    #[must_use]
    pub fn with_affected(rows_affected: u64) -> Self {
        Self {
            rows_affected,
            ..Self::default()
        }
    }

    /// A result reporting a generated insert id.
    #[must_use]
    pub fn with_insert_id(insert_id: i64) -> Self {
        Self {
            rows_affected: 1,
            insert_id: Some(insert_id),
            ..Self::default()
        }
    }
}

/// An error reported by the driver itself.
///
/// The query layer wraps this into `Error::Execution`, attaching the
/// rendered statement for diagnostics; the message is forwarded verbatim.
#[derive(Debug, Clone)]
pub struct DriverError {
    /// The driver's message.
    pub message: String,
}

impl DriverError {
    /// Create a driver error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for DriverError {}

/// A driver capable of executing parameterized SQL statements.
///
/// Implementations must be `Send + Sync` for use across async boundaries.
/// The query layer calls [`execute`](Executor::execute) exactly once per
/// terminal operation and never retries on its own; statement ordering
/// and atomicity across concurrent statements are the driver's concern.
pub trait Executor: Send + Sync {
    /// Execute one statement with its ordered parameters.
    fn execute(
        &self,
        cx: &Cx,
        sql: &str,
        params: &[Value],
    ) -> impl Future<Output = Outcome<ExecResult, DriverError>> + Send;
}
