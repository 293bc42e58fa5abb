//! CREATE TABLE statement builder.

use crate::column::ColumnDef;
use loquent_core::{Error, Result, SchemaError};

/// Builder for CREATE TABLE statements.
///
/// Accumulates column definitions and an optional composite primary key,
/// then renders them once. Rendering fails fast, before anything reaches
/// the driver, when the declaration is unusable.
#[derive(Debug, Clone)]
pub struct CreateTable {
    table: String,
    columns: Vec<ColumnDef>,
    primary_key: Vec<String>,
}

impl CreateTable {
    /// Create a new CREATE TABLE builder for the given table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            primary_key: Vec::new(),
        }
    }

    /// Add a column definition.
    #[must_use]
    pub fn column(mut self, def: ColumnDef) -> Self {
        self.columns.push(def);
        self
    }

    /// Accumulate composite primary key columns.
    ///
    /// Cannot be combined with an auto-increment column; the conflict is
    /// rejected at render time.
    #[must_use]
    pub fn primary_key<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.primary_key
            .extend(names.iter().map(|n| n.as_ref().to_string()));
        self
    }

    /// Whether any columns have been declared.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Build the CREATE TABLE SQL.
    pub fn build(&self) -> Result<String> {
        if self.columns.is_empty() {
            return Err(Error::EmptySchema {
                table: self.table.clone(),
            });
        }

        if !self.primary_key.is_empty() {
            if let Some(col) = self.columns.iter().find(|c| c.is_auto_increment()) {
                return Err(Error::Schema(SchemaError {
                    table: self.table.clone(),
                    message: format!(
                        "PRIMARY KEY ({}) cannot be combined with AUTOINCREMENT column {}",
                        self.primary_key.join(","),
                        col.name()
                    ),
                }));
            }
        }

        let mut parts: Vec<String> = self.columns.iter().map(ColumnDef::render).collect();
        if !self.primary_key.is_empty() {
            parts.push(format!("PRIMARY KEY ({})", self.primary_key.join(",")));
        }

        Ok(format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.table,
            parts.join(", ")
        ))
    }
}

/// Render a DROP TABLE statement.
pub fn drop_table(table: &str) -> String {
    format!("DROP TABLE IF EXISTS {table}")
}
