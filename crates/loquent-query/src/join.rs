//! JOIN clause types.

use loquent_core::{Result, quote};

/// Types of SQL joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    LeftOuter,
    Cross,
}

impl JoinKind {
    /// Get the SQL keyword for this join type.
    pub const fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::LeftOuter => "LEFT OUTER JOIN",
            JoinKind::Cross => "CROSS JOIN",
        }
    }
}

/// A JOIN clause fragment.
///
/// Joins render in insertion order, space-joined. The ON sides are quoted
/// individually against their owning tables; the table reference itself is
/// taken as written so aliases (`cities AS c`) pass through.
#[derive(Debug, Clone)]
pub struct Join {
    kind: JoinKind,
    table: String,
    left: String,
    operator: String,
    right: String,
}

impl Join {
    /// Create an INNER JOIN.
    pub fn inner(
        table: impl Into<String>,
        left: impl Into<String>,
        operator: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self::new(JoinKind::Inner, table, left, operator, right)
    }

    /// Create a LEFT JOIN.
    pub fn left(
        table: impl Into<String>,
        left: impl Into<String>,
        operator: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self::new(JoinKind::Left, table, left, operator, right)
    }

    /// Create a join of the given kind.
    pub fn new(
        kind: JoinKind,
        table: impl Into<String>,
        left: impl Into<String>,
        operator: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            table: table.into(),
            left: left.into(),
            operator: operator.into(),
            right: right.into(),
        }
    }

    /// Create a CROSS JOIN (no ON condition).
    pub fn cross(table: impl Into<String>) -> Self {
        Self {
            kind: JoinKind::Cross,
            table: table.into(),
            left: String::new(),
            operator: String::new(),
            right: String::new(),
        }
    }

    /// Render this join fragment.
    pub fn render(&self) -> Result<String> {
        if self.kind == JoinKind::Cross {
            return Ok(format!("{} {}", self.kind.as_str(), self.table));
        }
        Ok(format!(
            "{} {} ON {} {} {}",
            self.kind.as_str(),
            self.table,
            quote(&self.left)?,
            self.operator,
            quote(&self.right)?,
        ))
    }
}
