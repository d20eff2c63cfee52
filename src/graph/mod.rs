//! Family relationship graph
//!
//! Persons and typed kinship edges scoped to one family, with edge-level
//! validation and automatic reverse-edge inference.

pub mod edge;
pub mod person;
pub mod reciprocal;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::RelationshipEdge;
pub use person::Person;
pub use reciprocal::{derive_reciprocal, reciprocal_note, DEFAULT_RECIPROCAL_NOTE};
pub use store::{EdgeCreation, FamilyGraph, GraphError, GraphResult};
pub use types::{EdgeId, Gender, PersonId, RelationshipType, ALL_RELATIONSHIP_TYPES};
