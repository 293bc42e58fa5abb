//! Core types and traits for Loquent.
//!
//! This crate provides the foundational abstractions the query layer is
//! built on:
//!
//! - `Value` for dynamically-typed parameter binding and result reading
//! - `Row` for result rows with shared column metadata
//! - `Executor` trait for the asynchronous database driver
//! - `Table` descriptors replacing per-table model classes
//! - Identifier quoting utilities
//! - `Outcome`/`Cx` re-exports from asupersync for cancel-correct operations

// Re-export asupersync primitives for structured concurrency
pub use asupersync::{Cx, Outcome};

pub mod error;
pub mod executor;
pub mod identifiers;
pub mod relation;
pub mod row;
pub mod table;
pub mod value;

pub use error::{Error, ExecutionError, Result, SchemaError, TypeError};
pub use executor::{DriverError, ExecResult, Executor};
pub use identifiers::{quote, quote_all, quote_ident};
pub use relation::{Relation, RelationKind};
pub use row::{ColumnInfo, Row};
pub use table::{Mutator, Table};
pub use value::Value;
