//! Vamsha Family Graph Engine
//!
//! The relationship-graph and family-tree construction engine of a
//! record-management application. Given one family's persons and typed
//! kinship edges, it:
//!
//! - keeps the edge set logically consistent by validating new edges and
//!   auto-deriving reciprocal edges for asymmetric relationship types,
//! - selects a root individual and produces a bounded, cycle-safe,
//!   ancestor-oriented display tree for visualization,
//! - derives statistics (ages, alive/deceased counts, a coarse
//!   generation estimate) from the same data.
//!
//! The engine is stateless per invocation: it operates on a point-in-time
//! `FamilyGraph` snapshot supplied by the storage collaborator and returns
//! plain values. Persistence, authentication, HTTP and rendering live
//! outside.
//!
//! # Example Usage
//!
//! ```rust
//! use vamsha::graph::{FamilyGraph, Gender, RelationshipType};
//! use vamsha::stats::family_statistics_today;
//! use vamsha::tree::build_family_tree_today;
//! use uuid::Uuid;
//!
//! let mut family = FamilyGraph::new(Uuid::new_v4());
//!
//! // Create members
//! let kiran = family.create_person("Kiran", "Rao");
//! let asha = family.create_person("Asha", "Rao");
//! if let Some(person) = family.get_person_mut(asha) {
//!     person.gender = Gender::Female;
//! }
//!
//! // "Asha is Kiran's parent"; the Child edge back is derived automatically
//! let created = family
//!     .create_edge(kiran, asha, RelationshipType::Parent, None, Uuid::new_v4())
//!     .unwrap();
//! assert!(created.reciprocal.is_some());
//!
//! let tree = build_family_tree_today(&family);
//! assert_eq!(tree.children.len(), 1);
//!
//! let stats = family_statistics_today(&family);
//! assert_eq!(stats.total_members, 2);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod stats;
pub mod tree;

// Re-export main types for convenience
pub use graph::{
    EdgeCreation, EdgeId, FamilyGraph, Gender, GraphError, GraphResult, Person, PersonId,
    RelationshipEdge, RelationshipType, ALL_RELATIONSHIP_TYPES,
};

pub use stats::{age_between, family_statistics, family_statistics_today, FamilyStatistics};

pub use tree::{
    build_family_tree, build_family_tree_today, display_label, TreeBuilder, TreeNode,
    EMPTY_NODE_ID, EMPTY_NODE_NAME,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
