//! Table descriptors.
//!
//! One shared query engine consumes lightweight per-table configuration
//! records instead of per-table subclasses. A [`Table`] names the table and
//! carries its declared relations plus the attribute mutators applied when
//! values enter through the write path.
//!
//! Mutators are an explicit, statically registered mapping from column name
//! to a transform function, looked up by key.

use crate::relation::Relation;
use crate::value::Value;
use std::collections::HashMap;

/// A value transform applied when a column is assigned through `set`.
pub type Mutator = fn(Value) -> Value;

/// Per-table configuration consumed by the query engine.
#[derive(Debug, Clone, Default)]
pub struct Table {
    name: String,
    relations: Vec<(String, Relation)>,
    mutators: HashMap<String, Mutator>,
}

impl Table {
    /// Describe a table by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relations: Vec::new(),
            mutators: HashMap::new(),
        }
    }

    /// Register a named relation.
    #[must_use]
    pub fn with_relation(mut self, name: impl Into<String>, relation: Relation) -> Self {
        self.relations.push((name.into(), relation));
        self
    }

    /// Register an attribute mutator for a column.
    #[must_use]
    pub fn with_mutator(mut self, column: impl Into<String>, mutator: Mutator) -> Self {
        self.mutators.insert(column.into(), mutator);
        self
    }

    /// The table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared relation names, in declaration order.
    pub fn relation_names(&self) -> Vec<&str> {
        self.relations.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Look up a declared relation by name.
    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rel)| rel)
    }

    /// Run a value through the column's registered mutator, if any.
    pub fn apply_mutator(&self, column: &str, value: Value) -> Value {
        match self.mutators.get(column) {
            Some(mutator) => mutator(value),
            None => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::RelationKind;

    fn suffixed(value: Value) -> Value {
        match value {
            Value::Text(s) => Value::Text(format!("{s} Sven")),
            other => other,
        }
    }

    #[test]
    fn test_relation_registry() {
        let table = Table::new("cities")
            .with_relation("markets", Relation::has_many("markets", "city_id", "id"));

        assert_eq!(table.name(), "cities");
        assert_eq!(table.relation_names(), vec!["markets"]);
        let rel = table.relation("markets").unwrap();
        assert_eq!(rel.kind, RelationKind::HasMany);
        assert!(table.relation("nope").is_none());
    }

    #[test]
    fn test_mutator_lookup_by_key() {
        let table = Table::new("markets").with_mutator("title", suffixed);

        assert_eq!(
            table.apply_mutator("title", Value::Text("Test".into())),
            Value::Text("Test Sven".into())
        );
        // Unregistered columns pass through untouched.
        assert_eq!(
            table.apply_mutator("city_id", Value::Int(1)),
            Value::Int(1)
        );
    }
}
