//! Core type definitions for the family graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a person within a family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct PersonId(pub u64);

impl PersonId {
    pub fn new(id: u64) -> Self {
        PersonId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonId({})", self.0)
    }
}

impl From<u64> for PersonId {
    fn from(id: u64) -> Self {
        PersonId(id)
    }
}

/// Unique identifier for a relationship edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        EdgeId(id)
    }
}

/// Gender of a person, used for display-label selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Unknown,
    Male,
    Female,
    Other,
}

/// Kinship relationship types
///
/// An edge `(from, to, kind)` records, from the perspective of `from`,
/// that `to` is their `kind`: `(a, b, Parent)` means *b is a's parent*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipType {
    Parent,
    Child,
    Spouse,
    Sibling,
    Grandparent,
    Grandchild,
    Uncle,
    Aunt,
    Nephew,
    Niece,
    Cousin,
    GreatGrandparent,
    GreatGrandchild,
    StepParent,
    StepChild,
    StepSibling,
    HalfSibling,
    Other,
}

/// All relationship types, in declaration order
pub const ALL_RELATIONSHIP_TYPES: [RelationshipType; 18] = [
    RelationshipType::Parent,
    RelationshipType::Child,
    RelationshipType::Spouse,
    RelationshipType::Sibling,
    RelationshipType::Grandparent,
    RelationshipType::Grandchild,
    RelationshipType::Uncle,
    RelationshipType::Aunt,
    RelationshipType::Nephew,
    RelationshipType::Niece,
    RelationshipType::Cousin,
    RelationshipType::GreatGrandparent,
    RelationshipType::GreatGrandchild,
    RelationshipType::StepParent,
    RelationshipType::StepChild,
    RelationshipType::StepSibling,
    RelationshipType::HalfSibling,
    RelationshipType::Other,
];

impl RelationshipType {
    /// The reverse relationship type, as seen from the other person.
    ///
    /// `(a, b, Parent)` implies `(b, a, Child)`; symmetric types map to
    /// themselves; `Other` has no defined reverse. The match is
    /// exhaustive, so extending the enum forces this table to be updated.
    pub fn reverse(self) -> Option<RelationshipType> {
        use RelationshipType::*;
        match self {
            Parent => Some(Child),
            Child => Some(Parent),
            Grandparent => Some(Grandchild),
            Grandchild => Some(Grandparent),
            GreatGrandparent => Some(GreatGrandchild),
            GreatGrandchild => Some(GreatGrandparent),
            Uncle => Some(Nephew),
            Nephew => Some(Uncle),
            Aunt => Some(Niece),
            Niece => Some(Aunt),
            StepParent => Some(StepChild),
            StepChild => Some(StepParent),
            Spouse => Some(Spouse),
            Sibling => Some(Sibling),
            Cousin => Some(Cousin),
            StepSibling => Some(StepSibling),
            HalfSibling => Some(HalfSibling),
            Other => None,
        }
    }

    /// True for types whose reverse is the type itself
    pub fn is_symmetric(self) -> bool {
        self.reverse() == Some(self)
    }

    pub fn as_str(&self) -> &'static str {
        use RelationshipType::*;
        match self {
            Parent => "Parent",
            Child => "Child",
            Spouse => "Spouse",
            Sibling => "Sibling",
            Grandparent => "Grandparent",
            Grandchild => "Grandchild",
            Uncle => "Uncle",
            Aunt => "Aunt",
            Nephew => "Nephew",
            Niece => "Niece",
            Cousin => "Cousin",
            GreatGrandparent => "GreatGrandparent",
            GreatGrandchild => "GreatGrandchild",
            StepParent => "StepParent",
            StepChild => "StepChild",
            StepSibling => "StepSibling",
            HalfSibling => "HalfSibling",
            Other => "Other",
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_id() {
        let id = PersonId::new(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(format!("{}", id), "PersonId(42)");

        let id2: PersonId = 100.into();
        assert_eq!(id2.as_u64(), 100);
    }

    #[test]
    fn test_edge_id() {
        let id = EdgeId::new(99);
        assert_eq!(id.as_u64(), 99);
        assert_eq!(format!("{}", id), "EdgeId(99)");
    }

    #[test]
    fn test_id_ordering() {
        let id1 = PersonId::new(1);
        let id2 = PersonId::new(2);
        assert!(id1 < id2);
    }

    #[test]
    fn test_reverse_is_an_involution() {
        for kind in ALL_RELATIONSHIP_TYPES {
            if let Some(rev) = kind.reverse() {
                assert_eq!(rev.reverse(), Some(kind), "reverse of {} not involutive", kind);
            }
        }
    }

    #[test]
    fn test_symmetric_types() {
        use RelationshipType::*;
        for kind in [Spouse, Sibling, Cousin, StepSibling, HalfSibling] {
            assert!(kind.is_symmetric());
            assert_eq!(kind.reverse(), Some(kind));
        }
        assert!(!Parent.is_symmetric());
        assert!(!Uncle.is_symmetric());
    }

    #[test]
    fn test_other_has_no_reverse() {
        assert_eq!(RelationshipType::Other.reverse(), None);
        assert!(!RelationshipType::Other.is_symmetric());
    }

    #[test]
    fn test_asymmetric_pairs() {
        use RelationshipType::*;
        assert_eq!(Parent.reverse(), Some(Child));
        assert_eq!(Grandparent.reverse(), Some(Grandchild));
        assert_eq!(GreatGrandparent.reverse(), Some(GreatGrandchild));
        assert_eq!(Uncle.reverse(), Some(Nephew));
        assert_eq!(Aunt.reverse(), Some(Niece));
        assert_eq!(StepParent.reverse(), Some(StepChild));
    }

    #[test]
    fn test_default_gender() {
        assert_eq!(Gender::default(), Gender::Unknown);
    }
}
