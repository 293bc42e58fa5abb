//! The chainable query facade.
//!
//! A [`Query`] owns the per-statement accumulators exclusively and is
//! consumed by its terminal operation, so state can never leak between two
//! logical statements: build a fresh `Query` per statement. Rendering
//! methods take `&self` and are idempotent; the single asynchronous
//! suspension point is the executor hand-off inside the terminal verbs.
//!
//! The executor is injected at construction. The facade performs no I/O of
//! its own and never reads ambient global state.

use crate::clause::OrderClause;
use crate::join::Join;
use crate::predicate::{Connector, WhereClause};
use crate::statement::Statement;
use asupersync::{Cx, Outcome};
use loquent_core::{
    Error, ExecResult, ExecutionError, Executor, Relation, Row, Table, Value, quote_ident,
};
use loquent_schema::{ColumnDef, CreateTable, drop_table};

/// Fluent builder for one logical statement against one table.
///
/// Chainable verbs accumulate clause fragments; terminal verbs render the
/// statement, dispatch it exactly once through the injected [`Executor`],
/// and shape the result. Rendering errors surface before anything is
/// dispatched.
#[derive(Debug)]
pub struct Query<'a, E: Executor> {
    pub(crate) exec: &'a E,
    pub(crate) table: &'a Table,
    pub(crate) alias: Option<String>,
    pub(crate) columns: Vec<String>,
    pub(crate) sets: Vec<(String, Value)>,
    pub(crate) predicates: WhereClause,
    pub(crate) joins: Vec<Join>,
    pub(crate) order: OrderClause,
    pub(crate) limit: Option<u64>,
    pub(crate) includes: Vec<String>,
    pub(crate) schema: CreateTable,
}

impl<'a, E: Executor> Query<'a, E> {
    /// Start a new statement for `table`, executing through `exec`.
    pub fn new(table: &'a Table, exec: &'a E) -> Self {
        Self {
            exec,
            table,
            alias: None,
            columns: Vec::new(),
            sets: Vec::new(),
            predicates: WhereClause::new(),
            joins: Vec::new(),
            order: OrderClause::new(),
            limit: None,
            includes: Vec::new(),
            schema: CreateTable::new(table.name()),
        }
    }

    /// The table this statement addresses.
    pub fn table(&self) -> &Table {
        self.table
    }

    /// Relation names requested through [`include`](Query::include).
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    // ==================== Chainable Verbs ====================

    /// Select specific columns (quoted at render time; `*` and
    /// `table.column` references are preserved).
    pub fn select<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.columns = columns.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    /// Alias the FROM table.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Add an AND-connected WHERE predicate.
    ///
    /// The column reference renders as written; the value is bound.
    pub fn filter(
        mut self,
        column: impl AsRef<str>,
        operator: &str,
        value: impl Into<Value>,
    ) -> Self {
        self.predicates.and(column, operator, value);
        self
    }

    /// Add an OR-connected WHERE predicate.
    pub fn or_filter(
        mut self,
        column: impl AsRef<str>,
        operator: &str,
        value: impl Into<Value>,
    ) -> Self {
        self.predicates.or(column, operator, value);
        self
    }

    /// Add an AND-connected IN-list predicate; every value is bound.
    pub fn filter_in<V: Into<Value>>(
        mut self,
        column: impl AsRef<str>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.predicates.and_in(column, values);
        self
    }

    /// Add a parenthesized AND-connected group built in a fresh scoped
    /// accumulator.
    pub fn filter_nested(mut self, f: impl FnOnce(&mut WhereClause)) -> Self {
        self.predicates.nested(Connector::And, f);
        self
    }

    /// Add a parenthesized OR-connected group.
    pub fn or_filter_nested(mut self, f: impl FnOnce(&mut WhereClause)) -> Self {
        self.predicates.nested(Connector::Or, f);
        self
    }

    /// Shorthand for filtering on the `id` primary key column.
    pub fn by_id(mut self, id: impl Into<Value>) -> Self {
        self.predicates.and(quote_ident("id"), "=", id);
        self
    }

    /// Add an INNER JOIN.
    pub fn join(
        mut self,
        table: impl Into<String>,
        left: impl Into<String>,
        operator: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        self.joins.push(Join::inner(table, left, operator, right));
        self
    }

    /// Add a LEFT JOIN.
    pub fn left_join(
        mut self,
        table: impl Into<String>,
        left: impl Into<String>,
        operator: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        self.joins.push(Join::left(table, left, operator, right));
        self
    }

    /// Add a join of an explicit kind.
    pub fn join_kind(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// Append an ORDER BY entry. The direction string is preserved as
    /// given.
    pub fn order_by(mut self, column: impl Into<String>, direction: impl Into<String>) -> Self {
        self.order.push(column, direction);
        self
    }

    /// Append an ascending ORDER BY entry.
    pub fn order_by_asc(self, column: impl Into<String>) -> Self {
        self.order_by(column, "ASC")
    }

    /// Set the LIMIT. Calling again overwrites the previous value.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Assign a column value for INSERT/UPDATE.
    ///
    /// The value runs through the table's registered mutator for the
    /// column before it enters the ledger.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        let column = column.into();
        let value = self.table.apply_mutator(&column, value.into());
        self.sets.push((column, value));
        self
    }

    /// Declare a column for the CREATE TABLE path.
    pub fn column(mut self, def: ColumnDef) -> Self {
        self.schema = self.schema.column(def);
        self
    }

    /// Declare composite primary key columns for the CREATE TABLE path.
    pub fn primary_key<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.schema = self.schema.primary_key(names);
        self
    }

    /// Request a declared relation to be resolved after the query.
    ///
    /// The name is validated against the table's declarations at the
    /// terminal verb, before dispatch.
    pub fn include(mut self, name: impl Into<String>) -> Self {
        self.includes.push(name.into());
        self
    }

    // ==================== Terminal Verbs ====================

    /// Execute a SELECT and return at most one row.
    ///
    /// Zero matching rows resolve to `None`, never to an error.
    pub async fn first(self, cx: &Cx) -> Outcome<Option<Row>, Error> {
        let query = self.limit(1);
        let stmt = match query.render_select() {
            Ok(stmt) => stmt,
            Err(e) => return Outcome::Err(e),
        };
        query
            .dispatch(cx, stmt)
            .await
            .map(|res| res.rows.into_iter().next())
    }

    /// Execute a SELECT and return all matching rows in result order.
    pub async fn all(self, cx: &Cx) -> Outcome<Vec<Row>, Error> {
        let stmt = match self.render_select() {
            Ok(stmt) => stmt,
            Err(e) => return Outcome::Err(e),
        };
        self.dispatch(cx, stmt).await.map(|res| res.rows)
    }

    /// Execute a SELECT and return the raw rows together with the
    /// requested relation descriptors for the external resolver.
    pub async fn all_related(self, cx: &Cx) -> Outcome<(Vec<Row>, Vec<Relation>), Error> {
        let mut relations = Vec::with_capacity(self.includes.len());
        for name in &self.includes {
            match self.table.relation(name) {
                Some(rel) => relations.push(rel.clone()),
                None => {
                    return Outcome::Err(Error::Custom(format!(
                        "unknown relation {name:?} on table {}",
                        self.table.name()
                    )));
                }
            }
        }

        let stmt = match self.render_select() {
            Ok(stmt) => stmt,
            Err(e) => return Outcome::Err(e),
        };
        self.dispatch(cx, stmt)
            .await
            .map(|res| (res.rows, relations))
    }

    /// Execute an INSERT of the accumulated assignments and return the
    /// generated row identifier.
    pub async fn insert(self, cx: &Cx) -> Outcome<i64, Error> {
        let stmt = match self.render_insert() {
            Ok(stmt) => stmt,
            Err(e) => return Outcome::Err(e),
        };
        match self.dispatch(cx, stmt).await {
            Outcome::Ok(res) => match res.insert_id {
                Some(id) => Outcome::Ok(id),
                None => Outcome::Err(Error::Custom(
                    "driver reported no generated row id for INSERT".to_string(),
                )),
            },
            Outcome::Err(e) => Outcome::Err(e),
            Outcome::Cancelled(r) => Outcome::Cancelled(r),
            Outcome::Panicked(p) => Outcome::Panicked(p),
        }
    }

    /// Execute an UPDATE; `true` when at least one row was affected.
    ///
    /// Matching nothing is a successful `false`, not an error.
    pub async fn update(self, cx: &Cx) -> Outcome<bool, Error> {
        let stmt = match self.render_update() {
            Ok(stmt) => stmt,
            Err(e) => return Outcome::Err(e),
        };
        self.dispatch(cx, stmt).await.map(|res| res.rows_affected > 0)
    }

    /// Execute a DELETE; `true` when at least one row was affected.
    pub async fn remove(self, cx: &Cx) -> Outcome<bool, Error> {
        let stmt = match self.render_delete() {
            Ok(stmt) => stmt,
            Err(e) => return Outcome::Err(e),
        };
        self.dispatch(cx, stmt).await.map(|res| res.rows_affected > 0)
    }

    /// Delete every row in the table, ignoring accumulated clauses.
    /// Returns the number of rows removed.
    pub async fn empty(self, cx: &Cx) -> Outcome<u64, Error> {
        let stmt = self.render_empty();
        self.dispatch(cx, stmt).await.map(|res| res.rows_affected)
    }

    /// Create the table from the declared columns.
    pub async fn create(self, cx: &Cx) -> Outcome<(), Error> {
        let sql = match self.schema.build() {
            Ok(sql) => sql,
            Err(e) => return Outcome::Err(e),
        };
        let stmt = Statement {
            sql,
            params: Vec::new(),
        };
        self.dispatch(cx, stmt).await.map(|_| ())
    }

    /// Drop the table if it exists.
    pub async fn drop(self, cx: &Cx) -> Outcome<(), Error> {
        let stmt = Statement {
            sql: drop_table(self.table.name()),
            params: Vec::new(),
        };
        self.dispatch(cx, stmt).await.map(|_| ())
    }

    /// Execute raw SQL with bound parameters, bypassing the renderer.
    pub async fn raw(
        self,
        cx: &Cx,
        sql: impl Into<String>,
        params: Vec<Value>,
    ) -> Outcome<Vec<Row>, Error> {
        let stmt = Statement {
            sql: sql.into(),
            params,
        };
        self.dispatch(cx, stmt).await.map(|res| res.rows)
    }

    /// Hand one rendered statement to the executor.
    ///
    /// Driver errors come back wrapped with the statement context; the
    /// message itself is forwarded untouched.
    async fn dispatch(&self, cx: &Cx, stmt: Statement) -> Outcome<ExecResult, Error> {
        tracing::debug!(
            table = self.table.name(),
            params = stmt.params.len(),
            "dispatching statement"
        );
        tracing::trace!(sql = %stmt.sql, "statement SQL");

        match self.exec.execute(cx, &stmt.sql, &stmt.params).await {
            Outcome::Ok(res) => Outcome::Ok(res),
            Outcome::Err(e) => Outcome::Err(Error::Execution(ExecutionError {
                message: e.message,
                sql: stmt.sql,
                params: stmt.params,
            })),
            Outcome::Cancelled(r) => Outcome::Cancelled(r),
            Outcome::Panicked(p) => Outcome::Panicked(p),
        }
    }
}
