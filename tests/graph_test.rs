use uuid::Uuid;
use vamsha::graph::{FamilyGraph, GraphError, PersonId, RelationshipType, ALL_RELATIONSHIP_TYPES};

fn two_member_family() -> (FamilyGraph, PersonId, PersonId) {
    let mut family = FamilyGraph::new(Uuid::new_v4());
    let a = family.create_person("Asha", "Rao");
    let b = family.create_person("Ravi", "Rao");
    (family, a, b)
}

#[test]
fn test_every_asymmetric_type_round_trips_through_its_reverse() {
    for kind in ALL_RELATIONSHIP_TYPES {
        let Some(reverse) = kind.reverse() else { continue };
        if kind.is_symmetric() {
            continue;
        }

        let (mut family, a, b) = two_member_family();
        family
            .create_edge(a, b, kind, None, Uuid::new_v4())
            .unwrap();

        // querying for the reverse edge (b, a, reverse) succeeds
        let found = family
            .edges()
            .any(|e| e.from == b && e.to == a && e.kind == reverse);
        assert!(found, "no ({}, reverse) edge for {}", reverse, kind);
        assert_eq!(family.edge_count(), 2);
    }
}

#[test]
fn test_every_symmetric_type_exists_in_both_directions() {
    for kind in ALL_RELATIONSHIP_TYPES.into_iter().filter(|k| k.is_symmetric()) {
        let (mut family, a, b) = two_member_family();
        family
            .create_edge(a, b, kind, None, Uuid::new_v4())
            .unwrap();

        assert!(family.exists(b, a), "exists(b, a) false for {}", kind);
        assert_eq!(family.edge_count(), 1, "unexpected reciprocal for {}", kind);
    }
}

#[test]
fn test_other_type_never_creates_a_reciprocal() {
    let (mut family, a, b) = two_member_family();
    let created = family
        .create_edge(a, b, RelationshipType::Other, None, Uuid::new_v4())
        .unwrap();
    assert!(created.reciprocal.is_none());
    assert_eq!(family.edge_count(), 1);
}

#[test]
fn test_self_relationship_is_rejected() {
    let (mut family, a, _) = two_member_family();
    let result = family.create_edge(a, a, RelationshipType::Parent, None, Uuid::new_v4());
    assert_eq!(result, Err(GraphError::SelfReference(a)));
}

#[test]
fn test_duplicate_edge_rejected_even_reversed() {
    let (mut family, a, b) = two_member_family();
    family
        .create_edge(a, b, RelationshipType::Spouse, None, Uuid::new_v4())
        .unwrap();

    let result = family.create_edge(b, a, RelationshipType::Spouse, None, Uuid::new_v4());
    assert_eq!(result, Err(GraphError::DuplicateEdge(b, a)));
}

#[test]
fn test_validation_leaves_no_partial_state() {
    let (mut family, a, b) = two_member_family();
    family
        .create_edge(a, b, RelationshipType::Sibling, None, Uuid::new_v4())
        .unwrap();

    let before = family.edge_count();
    let _ = family.create_edge(a, b, RelationshipType::Cousin, None, Uuid::new_v4());
    let _ = family.create_edge(a, a, RelationshipType::Parent, None, Uuid::new_v4());
    assert_eq!(family.edge_count(), before);
}

#[test]
fn test_deleting_reciprocal_leaves_original_intact() {
    let (mut family, a, b) = two_member_family();
    let created = family
        .create_edge(a, b, RelationshipType::Uncle, None, Uuid::new_v4())
        .unwrap();

    family.remove_edge(created.reciprocal.unwrap()).unwrap();

    let original = family.get_edge(created.primary).unwrap();
    assert_eq!(original.kind, RelationshipType::Uncle);
    assert_eq!(original.from, a);
    assert_eq!(original.to, b);
    assert_eq!(family.edge_count(), 1);
}

#[test]
fn test_deleting_primary_leaves_reciprocal_intact() {
    let (mut family, a, b) = two_member_family();
    let created = family
        .create_edge(a, b, RelationshipType::StepParent, None, Uuid::new_v4())
        .unwrap();

    family.remove_edge(created.primary).unwrap();

    let reciprocal = family.get_edge(created.reciprocal.unwrap()).unwrap();
    assert_eq!(reciprocal.kind, RelationshipType::StepChild);
    assert_eq!(family.edge_count(), 1);
}

#[test]
fn test_reciprocal_note_references_the_original() {
    let (mut family, a, b) = two_member_family();
    let created = family
        .create_edge(
            a,
            b,
            RelationshipType::Grandparent,
            Some("paternal side".to_string()),
            Uuid::new_v4(),
        )
        .unwrap();

    let reciprocal = family.get_edge(created.reciprocal.unwrap()).unwrap();
    assert_eq!(
        reciprocal.notes.as_deref(),
        Some("auto-generated reciprocal of: paternal side")
    );
}
