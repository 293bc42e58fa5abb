//! Loquent - fluent query building for embedded SQL databases.
//!
//! Loquent lets a caller describe table schemas, build
//! SELECT/INSERT/UPDATE/DELETE statements through chained method calls,
//! and receive results asynchronously, without writing raw SQL by hand.
//! Statements are rendered deterministically into one parameterized SQL
//! string plus an ordered parameter list and handed to an injected
//! [`Executor`] driver.
//!
//! # Quick Start
//!
//! ```ignore
//! use loquent::prelude::*;
//!
//! let markets = Table::new("markets")
//!     .with_relation("city", Relation::belongs_to("cities", "city_id", "id"));
//!
//! async fn example(cx: &Cx, driver: &impl Executor) -> Result<()> {
//!     // Create the table
//!     Query::new(&markets, driver)
//!         .column(ColumnDef::new("id", SqlType::Integer).auto_increment())
//!         .column(ColumnDef::new("city_id", SqlType::Integer))
//!         .column(ColumnDef::new("title", SqlType::Text))
//!         .create(cx)
//!         .await?;
//!
//!     // Insert
//!     let id = Query::new(&markets, driver)
//!         .set("city_id", 1)
//!         .set("title", "Test market 1")
//!         .insert(cx)
//!         .await?;
//!
//!     // Query back
//!     let row = Query::new(&markets, driver).by_id(id).first(cx).await?;
//!
//!     // Filtered, ordered reads
//!     let rows = Query::new(&markets, driver)
//!         .filter("city_id", "=", 1)
//!         .order_by("title", "desc")
//!         .limit(2)
//!         .all(cx)
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! Each `Query` builds exactly one statement and is consumed by its
//! terminal verb; build a fresh one per statement.

// Re-export all public types from sub-crates
pub use loquent_core::{
    ColumnInfo, Cx, DriverError, Error, ExecResult, ExecutionError, Executor, Mutator, Outcome,
    Relation, RelationKind, Result, Row, SchemaError, Table, TypeError, Value, quote, quote_all,
    quote_ident,
};
pub use loquent_query::{
    Connector, Join, JoinKind, OrderClause, Query, Statement, WhereClause, run_sequence,
};
pub use loquent_schema::{ColumnDef, CreateTable, SqlType, drop_table};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use loquent_core::{
        Cx, DriverError, Error, ExecResult, Executor, Outcome, Relation, RelationKind, Result,
        Row, Table, Value,
    };
    pub use loquent_query::{Connector, Join, JoinKind, Query, Statement, run_sequence};
    pub use loquent_schema::{ColumnDef, CreateTable, SqlType};
}
