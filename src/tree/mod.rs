//! Display-tree construction for visualization
//!
//! Root selection, spouse pairing and bounded ancestor ascent over one
//! family's relationship graph, plus the gender-aware label table the
//! rendering layer consumes.

pub mod builder;
pub mod labels;
pub mod node;

// Re-export main types
pub use builder::{build_family_tree, build_family_tree_today, TreeBuilder};
pub use labels::display_label;
pub use node::{TreeNode, EMPTY_NODE_ID, EMPTY_NODE_NAME};
