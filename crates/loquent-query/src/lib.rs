//! Statement assembly engine and fluent query facade for Loquent.
//!
//! `loquent-query` is the **query construction layer**. It accumulates
//! clause fragments (predicates with boolean connectors and nesting, joins,
//! ordering, limits, assignments) and renders them deterministically into a
//! single parameterized SQL string plus an ordered parameter ledger.
//!
//! # Role In The Architecture
//!
//! - **Predicate accumulator**: [`WhereClause`] collects WHERE fragments in
//!   call order and renders one clause with correct parenthesis nesting.
//! - **Clause builders**: [`Join`] and [`OrderClause`] render their own
//!   fragments independently.
//! - **Statement renderer**: idempotent methods on [`Query`] compose the
//!   fragments into SELECT/INSERT/UPDATE/DELETE text in canonical order.
//! - **Facade**: [`Query`] exposes the chainable verbs and the terminal
//!   operations that dispatch through the injected `Executor`.
//!
//! Statements execute through the `Executor` trait from `loquent-core`.
//! Most users access this crate via the `loquent` facade.

pub mod clause;
pub mod join;
pub mod predicate;
pub mod query;
pub mod sequence;
pub mod statement;

pub use clause::OrderClause;
pub use join::{Join, JoinKind};
pub use predicate::{Connector, WhereClause};
pub use query::Query;
pub use sequence::run_sequence;
pub use statement::Statement;
