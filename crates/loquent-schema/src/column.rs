//! Column definitions.

use loquent_core::Value;

/// SQL column types understood by the embedded engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Real,
    Text,
    Blob,
    Boolean,
}

impl SqlType {
    /// Get the SQL name of this type.
    pub const fn sql_name(self) -> &'static str {
        match self {
            SqlType::Integer => "INTEGER",
            SqlType::Real => "REAL",
            SqlType::Text => "TEXT",
            SqlType::Blob => "BLOB",
            SqlType::Boolean => "BOOLEAN",
        }
    }
}

/// A single column declaration for table creation.
///
/// Definitions are immutable once added to a [`CreateTable`](crate::CreateTable)
/// and consumed exactly once by its rendering.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    name: String,
    sql_type: SqlType,
    nullable: bool,
    auto_increment: bool,
    default: Option<Value>,
}

impl ColumnDef {
    /// Declare a column. Columns are NOT NULL unless marked nullable.
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            nullable: false,
            auto_increment: false,
            default: None,
        }
    }

    /// Allow NULL values.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Mark as the auto-incrementing primary key.
    #[must_use]
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Set a default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// The column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this column is the auto-incrementing key.
    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }

    /// Render the column definition fragment.
    pub(crate) fn render(&self) -> String {
        let mut def = format!("{} {}", self.name, self.sql_type.sql_name());

        if !self.nullable && !self.auto_increment {
            def.push_str(" NOT NULL");
        }

        if self.auto_increment {
            def.push_str(" PRIMARY KEY AUTOINCREMENT");
        }

        if let Some(default) = &self.default {
            def.push_str(" DEFAULT(");
            def.push_str(&literal(default));
            def.push(')');
        }

        def
    }
}

/// Render a value as a DDL literal.
///
/// Only DEFAULT clauses go through this path; statement parameters are
/// always bound as placeholders.
fn literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Real(r) => r.to_string(),
        Value::Text(s) => format!("'{}'", s.replace('\'', "''")),
        Value::Blob(b) => {
            let hex: String = b.iter().map(|byte| format!("{byte:02X}")).collect();
            format!("X'{hex}'")
        }
        Value::Json(j) => format!("'{}'", j.to_string().replace('\'', "''")),
    }
}
