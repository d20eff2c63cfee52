//! Relationship edges between persons

use super::types::{EdgeId, PersonId, RelationshipType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directed, typed kinship link between two persons.
///
/// The edge reads from the perspective of `from`: `(a, b, Parent)`
/// records that *b is a's parent*. Edges are never mutated after
/// creation except for `kind` and `notes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipEdge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Person declaring the relationship
    pub from: PersonId,

    /// The relative being declared
    pub to: PersonId,

    /// Kind of relationship `to` is to `from`
    pub kind: RelationshipType,

    /// Optional free-text note
    pub notes: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Account that created the edge
    pub created_by: Uuid,
}

impl RelationshipEdge {
    /// Create a new edge stamped with the current time
    pub fn new(
        id: EdgeId,
        from: PersonId,
        to: PersonId,
        kind: RelationshipType,
        notes: Option<String>,
        created_by: Uuid,
    ) -> Self {
        RelationshipEdge {
            id,
            from,
            to,
            kind,
            notes,
            created_at: Utc::now(),
            created_by,
        }
    }

    /// Check if this edge connects two specific persons (in either direction)
    pub fn connects(&self, a: PersonId, b: PersonId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Check if this edge involves a person as either endpoint
    pub fn involves(&self, person: PersonId) -> bool {
        self.from == person || self.to == person
    }

    /// Check if this edge goes FROM a specific person
    pub fn starts_from(&self, person: PersonId) -> bool {
        self.from == person
    }

    /// Check if this edge goes TO a specific person
    pub fn ends_at(&self, person: PersonId) -> bool {
        self.to == person
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(id: u64, from: u64, to: u64, kind: RelationshipType) -> RelationshipEdge {
        RelationshipEdge::new(
            EdgeId::new(id),
            PersonId::new(from),
            PersonId::new(to),
            kind,
            None,
            Uuid::new_v4(),
        )
    }

    #[test]
    fn test_create_edge() {
        let e = edge(1, 1, 2, RelationshipType::Parent);
        assert_eq!(e.id, EdgeId::new(1));
        assert_eq!(e.from, PersonId::new(1));
        assert_eq!(e.to, PersonId::new(2));
        assert_eq!(e.kind, RelationshipType::Parent);
        assert!(e.notes.is_none());
    }

    #[test]
    fn test_edge_direction() {
        let e = edge(2, 10, 20, RelationshipType::Spouse);
        assert!(e.starts_from(PersonId::new(10)));
        assert!(e.ends_at(PersonId::new(20)));
        assert!(!e.starts_from(PersonId::new(20)));
        assert!(!e.ends_at(PersonId::new(10)));
    }

    #[test]
    fn test_edge_connects() {
        let e = edge(3, 10, 20, RelationshipType::Sibling);
        assert!(e.connects(PersonId::new(10), PersonId::new(20)));
        // order doesn't matter for connects()
        assert!(e.connects(PersonId::new(20), PersonId::new(10)));
        assert!(!e.connects(PersonId::new(10), PersonId::new(30)));
    }

    #[test]
    fn test_edge_involves() {
        let e = edge(4, 5, 6, RelationshipType::Cousin);
        assert!(e.involves(PersonId::new(5)));
        assert!(e.involves(PersonId::new(6)));
        assert!(!e.involves(PersonId::new(7)));
    }
}
