//! Relationship declarations.
//!
//! Relations are opaque descriptors registered on a [`Table`](crate::Table)
//! by name. The query layer only exposes the declared names and hands the
//! descriptors, together with the raw result rows, to an external resolver;
//! it never issues the secondary queries itself.

/// The kind of relationship between two tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// One row here owns at most one row there.
    HasOne,
    /// One row here owns many rows there.
    HasMany,
    /// Rows here reference a parent row there.
    BelongsTo,
    /// Many-to-many via a link table.
    BelongsToMany,
}

impl RelationKind {
    /// Human-readable name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            RelationKind::HasOne => "has_one",
            RelationKind::HasMany => "has_many",
            RelationKind::BelongsTo => "belongs_to",
            RelationKind::BelongsToMany => "belongs_to_many",
        }
    }
}

/// A declared relationship, as handed to the external resolver.
#[derive(Debug, Clone)]
pub struct Relation {
    /// The kind of relationship.
    pub kind: RelationKind,
    /// Table on the other side.
    pub related_table: String,
    /// Foreign key column.
    pub foreign_key: String,
    /// Local key column the foreign key points at.
    pub local_key: String,
}

impl Relation {
    /// Declare a relationship.
    pub fn new(
        kind: RelationKind,
        related_table: impl Into<String>,
        foreign_key: impl Into<String>,
        local_key: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            related_table: related_table.into(),
            foreign_key: foreign_key.into(),
            local_key: local_key.into(),
        }
    }

    /// Shorthand for a has-many declaration.
    pub fn has_many(
        related_table: impl Into<String>,
        foreign_key: impl Into<String>,
        local_key: impl Into<String>,
    ) -> Self {
        Self::new(RelationKind::HasMany, related_table, foreign_key, local_key)
    }

    /// Shorthand for a belongs-to declaration.
    pub fn belongs_to(
        related_table: impl Into<String>,
        foreign_key: impl Into<String>,
        local_key: impl Into<String>,
    ) -> Self {
        Self::new(RelationKind::BelongsTo, related_table, foreign_key, local_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(RelationKind::HasOne.as_str(), "has_one");
        assert_eq!(RelationKind::BelongsToMany.as_str(), "belongs_to_many");
    }

    #[test]
    fn test_shorthand_constructors() {
        let rel = Relation::has_many("markets", "city_id", "id");
        assert_eq!(rel.kind, RelationKind::HasMany);
        assert_eq!(rel.related_table, "markets");
        assert_eq!(rel.foreign_key, "city_id");
        assert_eq!(rel.local_key, "id");
    }
}
