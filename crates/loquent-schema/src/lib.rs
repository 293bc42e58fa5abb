//! Schema declaration and DDL rendering for Loquent.
//!
//! Models declare their tables as a sequence of [`ColumnDef`]s consumed
//! once by the CREATE TABLE renderer. The statements produced here execute
//! through the same `Executor` seam as every other statement.

pub mod column;
pub mod create;

pub use column::{ColumnDef, SqlType};
pub use create::{CreateTable, drop_table};
