//! The statement renderer.
//!
//! Pure, idempotent rendering of the accumulated clause state into full
//! SQL text for each statement kind. Fragments appear in canonical order
//! (joins, where, order-by, limit) and are omitted entirely when their
//! accumulator is empty. The Nth `?` placeholder in the rendered text
//! always corresponds to the Nth ledger entry.

use crate::query::Query;
use loquent_core::{Error, Executor, Result, Value, quote, quote_all};

/// A rendered statement: SQL text plus its ordered parameter ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// The parameterized SQL text.
    pub sql: String,
    /// Bound values, in placeholder order.
    pub params: Vec<Value>,
}

impl<E: Executor> Query<'_, E> {
    /// Render the accumulated state as a SELECT statement.
    pub fn render_select(&self) -> Result<Statement> {
        let mut sql = String::from("SELECT ");

        if self.columns.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&quote_all(&self.columns)?.join(", "));
        }

        sql.push_str(" FROM ");
        sql.push_str(self.table.name());
        if let Some(alias) = &self.alias {
            sql.push_str(" AS ");
            sql.push_str(alias);
        }

        let mut params = Vec::new();

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.render()?);
        }

        self.append_where(&mut sql, &mut params);

        if !self.order.is_empty() {
            sql.push(' ');
            sql.push_str(&self.order.render()?);
        }

        self.append_limit(&mut sql);

        Ok(Statement { sql, params })
    }

    /// Render the accumulated assignments as an INSERT statement.
    ///
    /// Column order is `set()` insertion order; the parameter ledger
    /// matches it.
    pub fn render_insert(&self) -> Result<Statement> {
        if self.sets.is_empty() {
            return Err(Error::Custom(format!(
                "INSERT INTO {} requires at least one assigned column",
                self.table.name()
            )));
        }

        let mut columns = Vec::with_capacity(self.sets.len());
        let mut params = Vec::with_capacity(self.sets.len());
        for (column, value) in &self.sets {
            columns.push(quote(column)?);
            params.push(value.clone());
        }

        let placeholders = vec!["?"; params.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table.name(),
            columns.join(", "),
            placeholders
        );

        Ok(Statement { sql, params })
    }

    /// Render the accumulated state as an UPDATE statement.
    ///
    /// SET parameters precede WHERE parameters in the ledger.
    pub fn render_update(&self) -> Result<Statement> {
        if self.sets.is_empty() {
            return Err(Error::Custom(format!(
                "UPDATE {} requires at least one assigned column",
                self.table.name()
            )));
        }

        let mut sql = format!("UPDATE {} SET ", self.table.name());
        let mut params = Vec::new();

        let assignments: Vec<String> = self
            .sets
            .iter()
            .map(|(column, _)| format!("{column} = ?"))
            .collect();
        sql.push_str(&assignments.join(", "));
        params.extend(self.sets.iter().map(|(_, value)| value.clone()));

        self.append_where(&mut sql, &mut params);
        self.append_limit(&mut sql);

        Ok(Statement { sql, params })
    }

    /// Render the accumulated state as a DELETE statement.
    pub fn render_delete(&self) -> Result<Statement> {
        let mut sql = format!("DELETE FROM {}", self.table.name());
        let mut params = Vec::new();

        self.append_where(&mut sql, &mut params);
        self.append_limit(&mut sql);

        Ok(Statement { sql, params })
    }

    /// Render a bare DELETE that truncates the table, ignoring any
    /// accumulated clauses.
    pub fn render_empty(&self) -> Statement {
        Statement {
            sql: format!("DELETE FROM {}", self.table.name()),
            params: Vec::new(),
        }
    }

    fn append_where(&self, sql: &mut String, params: &mut Vec<Value>) {
        if !self.predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.predicates.render(params));
        }
    }

    fn append_limit(&self, sql: &mut String) {
        if let Some(n) = self.limit {
            sql.push_str(" LIMIT ");
            sql.push_str(&n.to_string());
        }
    }
}
