//! ORDER BY and LIMIT clause accumulators.

use loquent_core::{Result, quote};

/// ORDER BY clause accumulator.
///
/// Entries render in insertion order: the first as `ORDER BY col dir`,
/// each subsequent one appended as `, col dir`. Column references are
/// quoted; the direction string is preserved exactly as supplied.
#[derive(Debug, Clone, Default)]
pub struct OrderClause {
    entries: Vec<(String, String)>,
}

impl OrderClause {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ordering entry.
    pub fn push(&mut self, column: impl Into<String>, direction: impl Into<String>) {
        self.entries.push((column.into(), direction.into()));
    }

    /// Whether any entries have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the full ORDER BY fragment.
    pub fn render(&self) -> Result<String> {
        let mut rendered = Vec::with_capacity(self.entries.len());
        for (column, direction) in &self.entries {
            rendered.push(format!("{} {}", quote(column)?, direction));
        }
        Ok(format!("ORDER BY {}", rendered.join(", ")))
    }
}
