//! Database row representation.

use crate::error::{Error, Result, TypeError};
use crate::value::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Column metadata shared across all rows in a result set.
///
/// Wrapped in `Arc` so all rows from the same query share the same column
/// information, saving memory for large result sets.
#[derive(Debug, Clone)]
pub struct ColumnInfo {
    /// Column names in order
    names: Vec<String>,
    /// Name -> index mapping for O(1) lookup
    name_to_index: HashMap<String, usize>,
}

impl ColumnInfo {
    /// Create new column info from a list of column names.
    pub fn new(names: Vec<String>) -> Self {
        let name_to_index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self {
            names,
            name_to_index,
        }
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Get the index of a column by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// Get the name of a column by index.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Get all column names.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// A single row returned from a database query.
///
/// Rows provide both index-based and name-based access to column values.
#[derive(Debug, Clone)]
pub struct Row {
    /// Column values in order
    values: Vec<Value>,
    /// Shared column metadata
    columns: Arc<ColumnInfo>,
}

impl Row {
    /// Create a new row with the given columns and values.
    ///
    /// For multiple rows from the same result set, prefer `with_columns`
    /// to share the column metadata.
    pub fn new(column_names: Vec<String>, values: Vec<Value>) -> Self {
        let columns = Arc::new(ColumnInfo::new(column_names));
        Self { values, columns }
    }

    /// Create a new row with shared column metadata.
    pub fn with_columns(columns: Arc<ColumnInfo>, values: Vec<Value>) -> Self {
        Self { values, columns }
    }

    /// Get the shared column metadata.
    pub fn column_info(&self) -> Arc<ColumnInfo> {
        Arc::clone(&self.columns)
    }

    /// Number of columns in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a value by column index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Get a value by column name.
    pub fn get_named(&self, name: &str) -> Option<&Value> {
        self.columns.index_of(name).and_then(|i| self.get(i))
    }

    /// Get a typed value by column name.
    ///
    /// Fails with a type error when the column is missing or the stored
    /// value does not convert to `T`.
    pub fn try_get<T>(&self, name: &str) -> Result<T>
    where
        T: TryFrom<Value, Error = Error>,
    {
        let value = self.get_named(name).ok_or_else(|| {
            Error::Type(TypeError {
                expected: "existing column",
                actual: format!("no column named {name:?}"),
                column: Some(name.to_string()),
            })
        })?;
        T::try_from(value.clone())
    }

    /// Iterate over `(name, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        Row::new(
            vec!["id".to_string(), "title".to_string()],
            vec![Value::Int(1), Value::Text("Test market 1".to_string())],
        )
    }

    #[test]
    fn test_get_by_index_and_name() {
        let row = sample_row();
        assert_eq!(row.get(0), Some(&Value::Int(1)));
        assert_eq!(
            row.get_named("title"),
            Some(&Value::Text("Test market 1".to_string()))
        );
        assert_eq!(row.get_named("missing"), None);
    }

    #[test]
    fn test_try_get_typed() {
        let row = sample_row();
        let id: i64 = row.try_get("id").unwrap();
        assert_eq!(id, 1);
        let title: String = row.try_get("title").unwrap();
        assert_eq!(title, "Test market 1");
    }

    #[test]
    fn test_try_get_missing_column() {
        let row = sample_row();
        let err = row.try_get::<i64>("city_id").unwrap_err();
        match err {
            Error::Type(t) => assert_eq!(t.column.as_deref(), Some("city_id")),
            other => panic!("expected type error, got {other:?}"),
        }
    }

    #[test]
    fn test_shared_column_info() {
        let row = sample_row();
        let second = Row::with_columns(row.column_info(), vec![Value::Int(2), Value::Null]);
        assert_eq!(second.get_named("id"), Some(&Value::Int(2)));
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_iter_pairs() {
        let row = sample_row();
        let names: Vec<&str> = row.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["id", "title"]);
    }
}
