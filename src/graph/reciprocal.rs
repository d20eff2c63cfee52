//! Reverse-relationship inference
//!
//! When an asymmetric edge is created, the opposite-direction edge is
//! derived automatically so both persons see the relationship from their
//! own side: `(a, b, Parent)` produces `(b, a, Child)`. Symmetric types
//! (Spouse, Sibling, ...) need no second edge: the single stored edge
//! plus the direction-insensitive existence check covers both sides.
//! `Other` has no defined reverse and never produces one.

use super::edge::RelationshipEdge;
use super::types::EdgeId;

/// Default note stamped on a reciprocal whose original carries no note
pub const DEFAULT_RECIPROCAL_NOTE: &str = "auto-generated reciprocal relationship";

/// Note for an auto-derived reciprocal edge
pub fn reciprocal_note(original: Option<&str>) -> String {
    match original {
        Some(note) if !note.is_empty() => format!("auto-generated reciprocal of: {}", note),
        _ => DEFAULT_RECIPROCAL_NOTE.to_string(),
    }
}

/// Derive the reciprocal edge for a freshly validated primary edge.
///
/// Returns `None` when no reciprocal is needed: the type is symmetric,
/// or has no defined reverse. The derived edge keeps the original
/// creator but gets its own id, note and a fresh timestamp; its
/// lifecycle is independent of the primary from here on.
pub fn derive_reciprocal(primary: &RelationshipEdge, id: EdgeId) -> Option<RelationshipEdge> {
    let reverse = primary.kind.reverse()?;
    if primary.kind.is_symmetric() {
        return None;
    }

    Some(RelationshipEdge::new(
        id,
        primary.to,
        primary.from,
        reverse,
        Some(reciprocal_note(primary.notes.as_deref())),
        primary.created_by,
    ))
}
