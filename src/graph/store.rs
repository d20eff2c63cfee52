//! In-memory family graph
//!
//! One `FamilyGraph` holds the persons and relationship edges of a single
//! family, loaded as a point-in-time snapshot by the storage collaborator.
//! The graph enforces the edge-level invariants (no self-relationships,
//! at most one user-created edge per person pair) and runs reverse-edge
//! inference on creation. It retains no hidden state between calls and is
//! not a source of truth; persistence happens outside.

use super::edge::RelationshipEdge;
use super::person::Person;
use super::reciprocal::derive_reciprocal;
use super::types::{EdgeId, PersonId, RelationshipType};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("a relationship cannot reference the same person twice: {0}")]
    SelfReference(PersonId),

    #[error("a relationship already exists between {0} and {1}")]
    DuplicateEdge(PersonId, PersonId),

    #[error("person {0} not found in this family")]
    MemberNotFound(PersonId),

    #[error("edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("person {0} still has relationships attached")]
    PersonInUse(PersonId),

    /// Best-effort secondary write failed; the primary edge stands.
    #[error("could not create reciprocal relationship: {0}")]
    ReciprocalCreationFailed(#[source] Box<GraphError>),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Outcome of a validated edge creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeCreation {
    /// The edge as submitted
    pub primary: EdgeId,

    /// The auto-derived reverse edge, when the type is asymmetric
    pub reciprocal: Option<EdgeId>,
}

/// Persons and typed kinship edges scoped to one family.
///
/// Backed by insertion-ordered maps so iteration (root tie-breaking,
/// parent attachment order) is deterministic across runs.
#[derive(Debug, Clone)]
pub struct FamilyGraph {
    family_id: Uuid,
    persons: IndexMap<PersonId, Person>,
    edges: IndexMap<EdgeId, RelationshipEdge>,
    next_person_id: u64,
    next_edge_id: u64,
}

impl FamilyGraph {
    /// Create an empty graph for a family
    pub fn new(family_id: Uuid) -> Self {
        FamilyGraph {
            family_id,
            persons: IndexMap::new(),
            edges: IndexMap::new(),
            next_person_id: 1,
            next_edge_id: 1,
        }
    }

    /// Assemble a graph from collections loaded by the storage layer.
    ///
    /// The collections are taken as-is; edges referencing persons missing
    /// from `persons` are kept but skipped during traversal.
    pub fn from_parts(
        family_id: Uuid,
        persons: Vec<Person>,
        edges: Vec<RelationshipEdge>,
    ) -> Self {
        let next_person_id = persons.iter().map(|p| p.id.as_u64()).max().unwrap_or(0) + 1;
        let next_edge_id = edges.iter().map(|e| e.id.as_u64()).max().unwrap_or(0) + 1;

        FamilyGraph {
            family_id,
            persons: persons.into_iter().map(|p| (p.id, p)).collect(),
            edges: edges.into_iter().map(|e| (e.id, e)).collect(),
            next_person_id,
            next_edge_id,
        }
    }

    pub fn family_id(&self) -> Uuid {
        self.family_id
    }

    // ---- persons ----------------------------------------------------

    /// Create a new person and return its id
    pub fn create_person(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> PersonId {
        let id = PersonId::new(self.next_person_id);
        self.next_person_id += 1;
        self.persons.insert(id, Person::new(id, first_name, last_name));
        id
    }

    pub fn get_person(&self, id: PersonId) -> Option<&Person> {
        self.persons.get(&id)
    }

    pub fn get_person_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        self.persons.get_mut(&id)
    }

    pub fn has_person(&self, id: PersonId) -> bool {
        self.persons.contains_key(&id)
    }

    /// Iterate members in insertion order
    pub fn members(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    pub fn member_count(&self) -> usize {
        self.persons.len()
    }

    /// Remove a person that has no relationships attached.
    ///
    /// Edges reference persons by id and are not independently deletable
    /// once orphaned, so removal is refused while any edge involves the
    /// person.
    pub fn remove_person(&mut self, id: PersonId) -> GraphResult<Person> {
        if !self.persons.contains_key(&id) {
            return Err(GraphError::MemberNotFound(id));
        }
        if self.edges.values().any(|e| e.involves(id)) {
            return Err(GraphError::PersonInUse(id));
        }
        // shift_remove keeps the remaining iteration order stable
        self.persons
            .shift_remove(&id)
            .ok_or(GraphError::MemberNotFound(id))
    }

    // ---- edges ------------------------------------------------------

    /// True if any edge connects `a` and `b`, regardless of direction or type
    pub fn exists(&self, a: PersonId, b: PersonId) -> bool {
        self.edges.values().any(|e| e.connects(a, b))
    }

    /// Validate a prospective edge against the current edge set.
    ///
    /// Pure check, no side effects: self-relationships and second edges
    /// between an already-connected pair are rejected, as are endpoints
    /// missing from the scoped person collection.
    pub fn validate_new_edge(&self, from: PersonId, to: PersonId) -> GraphResult<()> {
        if from == to {
            return Err(GraphError::SelfReference(from));
        }
        if !self.persons.contains_key(&from) {
            return Err(GraphError::MemberNotFound(from));
        }
        if !self.persons.contains_key(&to) {
            return Err(GraphError::MemberNotFound(to));
        }
        if self.exists(from, to) {
            return Err(GraphError::DuplicateEdge(from, to));
        }
        Ok(())
    }

    /// Validated entry point for new relationships.
    ///
    /// On success the primary edge is stored and, for asymmetric types,
    /// the reverse edge is derived and stored alongside it. Reciprocal
    /// creation is best-effort: a failure there is logged and swallowed,
    /// and the primary edge stands.
    pub fn create_edge(
        &mut self,
        from: PersonId,
        to: PersonId,
        kind: RelationshipType,
        notes: Option<String>,
        created_by: Uuid,
    ) -> GraphResult<EdgeCreation> {
        self.validate_new_edge(from, to)?;

        let primary_id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        let primary = RelationshipEdge::new(primary_id, from, to, kind, notes, created_by);
        self.edges.insert(primary_id, primary.clone());

        let reciprocal = match self.insert_reciprocal(&primary) {
            Ok(reciprocal) => reciprocal,
            Err(source) => {
                let error = GraphError::ReciprocalCreationFailed(Box::new(source));
                warn!(%error, edge = %primary_id, "keeping primary relationship without reciprocal");
                None
            }
        };

        Ok(EdgeCreation {
            primary: primary_id,
            reciprocal,
        })
    }

    /// Derive and store the reverse edge for an asymmetric primary.
    ///
    /// Skipped (Ok(None)) when the type needs no reciprocal or when an
    /// identical reverse edge is already present, e.g. in a snapshot that
    /// was loaded with both directions.
    fn insert_reciprocal(&mut self, primary: &RelationshipEdge) -> GraphResult<Option<EdgeId>> {
        let Some(candidate) = derive_reciprocal(primary, EdgeId::new(self.next_edge_id)) else {
            return Ok(None);
        };

        if !self.persons.contains_key(&candidate.from) {
            return Err(GraphError::MemberNotFound(candidate.from));
        }
        if !self.persons.contains_key(&candidate.to) {
            return Err(GraphError::MemberNotFound(candidate.to));
        }
        if self
            .edges
            .values()
            .any(|e| e.from == candidate.from && e.to == candidate.to && e.kind == candidate.kind)
        {
            return Ok(None);
        }

        self.next_edge_id += 1;
        let id = candidate.id;
        self.edges.insert(id, candidate);
        Ok(Some(id))
    }

    pub fn get_edge(&self, id: EdgeId) -> Option<&RelationshipEdge> {
        self.edges.get(&id)
    }

    /// Iterate edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &RelationshipEdge> {
        self.edges.values()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges connecting a pair, in either direction
    pub fn edges_between(&self, a: PersonId, b: PersonId) -> Vec<&RelationshipEdge> {
        self.edges.values().filter(|e| e.connects(a, b)).collect()
    }

    /// All edges involving a person as either endpoint
    pub fn relationships_of(&self, person: PersonId) -> Vec<&RelationshipEdge> {
        self.edges.values().filter(|e| e.involves(person)).collect()
    }

    /// Change the kind of an existing edge
    pub fn set_edge_kind(&mut self, id: EdgeId, kind: RelationshipType) -> GraphResult<()> {
        let edge = self.edges.get_mut(&id).ok_or(GraphError::EdgeNotFound(id))?;
        edge.kind = kind;
        Ok(())
    }

    /// Change the notes of an existing edge
    pub fn set_edge_notes(&mut self, id: EdgeId, notes: Option<String>) -> GraphResult<()> {
        let edge = self.edges.get_mut(&id).ok_or(GraphError::EdgeNotFound(id))?;
        edge.notes = notes;
        Ok(())
    }

    /// Remove a single edge.
    ///
    /// Deliberately does not cascade: a primary edge and its auto-derived
    /// reciprocal have independent lifecycles.
    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<RelationshipEdge> {
        self.edges
            .shift_remove(&id)
            .ok_or(GraphError::EdgeNotFound(id))
    }
}
