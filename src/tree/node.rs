//! Display-tree node type
//!
//! A fixed-shape record consumed by the rendering layer. The tree is a
//! visualization artifact, not a source of truth for relationships.

use serde::Serialize;

/// Sentinel node id for a family with no members
pub const EMPTY_NODE_ID: &str = "empty";

/// Placeholder display name for the sentinel node
pub const EMPTY_NODE_NAME: &str = "No family members yet";

/// One node of the display tree.
///
/// "Children" here are display children: the tree is ancestor-oriented,
/// so a node's children are the person's parents. Serializes with
/// camelCase keys, omitting absent optional fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i32>,

    pub is_alive: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    /// Display label relative to the descendant this node hangs under;
    /// absent on the root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_id: Option<String>,

    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Sentinel returned for an empty member collection, so the
    /// visualization layer always has something renderable
    pub fn placeholder() -> Self {
        TreeNode {
            id: EMPTY_NODE_ID.to_string(),
            name: EMPTY_NODE_NAME.to_string(),
            birth_year: None,
            death_year: None,
            is_alive: false,
            age: None,
            relationship_type: None,
            spouse_id: None,
            children: Vec::new(),
        }
    }

    /// Total node count of the subtree rooted here
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }

    /// Height of the subtree rooted here; a leaf has depth 0
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_shape() {
        let node = TreeNode::placeholder();
        assert_eq!(node.id, "empty");
        assert_eq!(node.name, "No family members yet");
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_serialization_uses_camel_case_and_omits_absent_fields() {
        let node = TreeNode {
            id: "3".to_string(),
            name: "Asha Rao".to_string(),
            birth_year: Some(1950),
            death_year: None,
            is_alive: true,
            age: Some(74),
            relationship_type: Some("Mother".to_string()),
            spouse_id: None,
            children: Vec::new(),
        };

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["birthYear"], 1950);
        assert_eq!(json["isAlive"], true);
        assert_eq!(json["relationshipType"], "Mother");
        assert!(json.get("deathYear").is_none());
        assert!(json.get("spouseId").is_none());
        assert_eq!(json["children"], serde_json::json!([]));
    }

    #[test]
    fn test_size_and_depth() {
        let leaf = TreeNode::placeholder();
        assert_eq!(leaf.size(), 1);
        assert_eq!(leaf.depth(), 0);

        let mut root = TreeNode::placeholder();
        let mut mid = TreeNode::placeholder();
        mid.children.push(TreeNode::placeholder());
        root.children.push(mid);
        assert_eq!(root.size(), 3);
        assert_eq!(root.depth(), 2);
    }
}
