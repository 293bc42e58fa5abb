//! The WHERE predicate accumulator.
//!
//! Fragments are stored in call order, each tagged with the boolean
//! connector that joins it to the previous one. Nested groups are built in
//! a fresh, scoped accumulator and merged back into the parent, so group
//! parentheses are computed relative to the group's own fragments only.
//!
//! Every bound value becomes a `?` placeholder pushed onto the parameter
//! ledger in fragment order; values are never interpolated into the SQL
//! text, including array-valued IN conditions.

use loquent_core::Value;

/// Boolean connector between two WHERE fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connector {
    #[default]
    And,
    Or,
}

impl Connector {
    /// Get the SQL keyword for this connector.
    pub const fn as_str(self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

/// One rendered predicate fragment.
///
/// The clause text is only touched after creation when it becomes the
/// boundary of a nested group and gains a parenthesis.
#[derive(Debug, Clone)]
struct Fragment {
    clause: String,
    connector: Connector,
}

/// Ordered accumulator of WHERE fragments and their bound parameters.
#[derive(Debug, Clone, Default)]
pub struct WhereClause {
    fragments: Vec<Fragment>,
    params: Vec<Value>,
}

impl WhereClause {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any fragments have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of bound parameters accumulated so far.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Add an AND-connected predicate.
    ///
    /// The column reference renders exactly as written by the caller; the
    /// value is bound as a placeholder.
    pub fn and(
        &mut self,
        column: impl AsRef<str>,
        operator: &str,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.push(column.as_ref(), operator, value.into(), Connector::And);
        self
    }

    /// Add an OR-connected predicate.
    pub fn or(
        &mut self,
        column: impl AsRef<str>,
        operator: &str,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.push(column.as_ref(), operator, value.into(), Connector::Or);
        self
    }

    /// Add an AND-connected IN-list predicate with every value bound.
    pub fn and_in<V: Into<Value>>(
        &mut self,
        column: impl AsRef<str>,
        values: impl IntoIterator<Item = V>,
    ) -> &mut Self {
        self.push_in(column.as_ref(), values, Connector::And);
        self
    }

    /// Add an OR-connected IN-list predicate with every value bound.
    pub fn or_in<V: Into<Value>>(
        &mut self,
        column: impl AsRef<str>,
        values: impl IntoIterator<Item = V>,
    ) -> &mut Self {
        self.push_in(column.as_ref(), values, Connector::Or);
        self
    }

    /// Add a parenthesized nested group.
    ///
    /// The closure receives a fresh accumulator scoped to the group. The
    /// group's first and last fragments gain the parentheses, its first
    /// connector is replaced by `connector`, and fragments and parameters
    /// merge into the parent in order. An empty group is a no-op.
    pub fn nested(&mut self, connector: Connector, f: impl FnOnce(&mut WhereClause)) -> &mut Self {
        let mut group = WhereClause::new();
        f(&mut group);

        if group.fragments.is_empty() {
            return self;
        }

        let last = group.fragments.len() - 1;
        group.fragments[0].clause.insert_str(0, "( ");
        group.fragments[last].clause.push_str(" )");
        group.fragments[0].connector = connector;

        self.fragments.extend(group.fragments);
        self.params.extend(group.params);
        self
    }

    /// Render the accumulated fragments, without the leading `WHERE`
    /// keyword, appending the bound values to `params`.
    ///
    /// The first fragment renders bare; each subsequent fragment renders
    /// as ` {connector} {clause}`. Rendering never mutates the
    /// accumulator.
    pub fn render(&self, params: &mut Vec<Value>) -> String {
        let mut sql = String::new();
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                sql.push(' ');
                sql.push_str(fragment.connector.as_str());
                sql.push(' ');
            }
            sql.push_str(&fragment.clause);
        }
        params.extend(self.params.iter().cloned());
        sql
    }

    fn push(&mut self, column: &str, operator: &str, value: Value, connector: Connector) {
        self.fragments.push(Fragment {
            clause: format!("{column} {operator} ?"),
            connector,
        });
        self.params.push(value);
    }

    fn push_in<V: Into<Value>>(
        &mut self,
        column: &str,
        values: impl IntoIterator<Item = V>,
        connector: Connector,
    ) {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();

        // An empty IN-list can never match.
        let clause = if values.is_empty() {
            "1 = 0".to_string()
        } else {
            format!("{column} IN ({})", vec!["?"; values.len()].join(","))
        };

        self.fragments.push(Fragment { clause, connector });
        self.params.extend(values);
    }
}
