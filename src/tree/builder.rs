//! Family tree construction
//!
//! Produces a single rooted, bounded-depth display tree from a family's
//! flat person/edge collections. The view is ancestor-oriented: a node's
//! display "children" are the person's parents, so the selected root sits
//! at the top and the tree climbs toward ancestors.

use super::labels::display_label;
use super::node::TreeNode;
use crate::graph::{FamilyGraph, Person, PersonId, RelationshipType};
use chrono::{NaiveDate, Utc};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Ascent depth cap, scaled to family size
fn ascent_depth_limit(member_count: usize) -> usize {
    if member_count <= 5 {
        3
    } else if member_count <= 8 {
        4
    } else {
        5
    }
}

/// A one-pass projection of the edge list into the adjacency the builder
/// needs: parent lists, spouse pairing and the two root-selection sets.
///
/// Remember the direction reading: `(a, b, Parent)` means *b is a's
/// parent* and `(a, b, Child)` means *b is a's child*. Both spellings of
/// the same fact (and the auto-derived reciprocals) collapse into one
/// parent entry here.
struct KinshipView {
    /// person -> recorded parents, deduplicated, in edge order
    parents: FxHashMap<PersonId, Vec<PersonId>>,
    /// symmetric spouse pairing; one pass over Spouse edges suffices
    spouses: FxHashMap<PersonId, PersonId>,
    /// persons with at least one recorded parent
    has_parent: FxHashSet<PersonId>,
    /// persons recorded as somebody's parent
    is_parent: FxHashSet<PersonId>,
}

impl KinshipView {
    fn new(graph: &FamilyGraph) -> Self {
        let mut view = KinshipView {
            parents: FxHashMap::default(),
            spouses: FxHashMap::default(),
            has_parent: FxHashSet::default(),
            is_parent: FxHashSet::default(),
        };

        for edge in graph.edges() {
            match edge.kind {
                RelationshipType::Parent => {
                    view.record_parent(graph, edge.from, edge.to);
                }
                RelationshipType::Child => {
                    view.record_parent(graph, edge.to, edge.from);
                }
                RelationshipType::Spouse => {
                    if graph.has_person(edge.from) && graph.has_person(edge.to) {
                        view.spouses.insert(edge.from, edge.to);
                        view.spouses.insert(edge.to, edge.from);
                    }
                }
                _ => {}
            }
        }

        view
    }

    fn record_parent(&mut self, graph: &FamilyGraph, child: PersonId, parent: PersonId) {
        self.has_parent.insert(child);
        self.is_parent.insert(parent);

        // edges referencing persons outside the scoped collection are
        // skipped rather than failing the whole build
        if !graph.has_person(parent) {
            return;
        }
        let recorded = self.parents.entry(child).or_default();
        if !recorded.contains(&parent) {
            recorded.push(parent);
        }
    }
}

/// Builds the display tree for one family as of a reference date
pub struct TreeBuilder<'g> {
    graph: &'g FamilyGraph,
    view: KinshipView,
    today: NaiveDate,
    depth_limit: usize,
}

impl<'g> TreeBuilder<'g> {
    pub fn new(graph: &'g FamilyGraph, today: NaiveDate) -> Self {
        TreeBuilder {
            graph,
            view: KinshipView::new(graph),
            today,
            depth_limit: ascent_depth_limit(graph.member_count()),
        }
    }

    /// Build the tree, or the sentinel node for an empty family
    pub fn build(&self) -> TreeNode {
        let root = match self.select_root() {
            Some(person) => person,
            None => return TreeNode::placeholder(),
        };
        debug!(root = %root.id, name = %root.full_name(), "selected family tree root");

        let mut node = self.node_for(root, None);
        let mut lineage = FxHashSet::default();
        lineage.insert(root.id);
        self.attach_parents(&mut node, root.id, 0, &mut lineage);
        node
    }

    /// Pick the root person: prefer someone who has a recorded parent and
    /// is not a parent themselves (a youngest-generation member), earliest
    /// born among ties; fall back to the earliest-born member overall.
    /// Members without a birth date sort last.
    fn select_root(&self) -> Option<&'g Person> {
        let birth_key = |p: &&Person| (p.birth_date.is_none(), p.birth_date);

        self.graph
            .members()
            .filter(|p| self.view.has_parent.contains(&p.id) && !self.view.is_parent.contains(&p.id))
            .min_by_key(birth_key)
            .or_else(|| self.graph.members().min_by_key(birth_key))
    }

    /// Recursively attach the parents of `person` as display children.
    ///
    /// `lineage` is the ancestor path of the current branch only;
    /// entries are removed on the way back up. A shared ancestor may
    /// therefore legitimately reappear where two branches converge
    /// (cousin marriages); only a true cycle within one lineage is
    /// blocked. A per-node set additionally keeps the same member from
    /// being attached twice under one node.
    fn attach_parents(
        &self,
        node: &mut TreeNode,
        person: PersonId,
        depth: usize,
        lineage: &mut FxHashSet<PersonId>,
    ) {
        if depth >= self.depth_limit {
            return;
        }
        let Some(parents) = self.view.parents.get(&person) else {
            return;
        };

        let mut attached = FxHashSet::default();
        for &parent_id in parents {
            if lineage.contains(&parent_id) || attached.contains(&parent_id) {
                continue;
            }
            let Some(parent) = self.graph.get_person(parent_id) else {
                continue;
            };

            let label = display_label(RelationshipType::Parent, parent.gender);
            let mut parent_node = self.node_for(parent, Some(label));
            attached.insert(parent_id);

            lineage.insert(parent_id);
            self.attach_parents(&mut parent_node, parent_id, depth + 1, lineage);
            lineage.remove(&parent_id);
            node.children.push(parent_node);

            // the parent's spouse joins at the same level, labeled by their
            // own gender, but the ascent does not continue through them
            if let Some(&spouse_id) = self.view.spouses.get(&parent_id) {
                if spouse_id != person
                    && !parents.contains(&spouse_id)
                    && !attached.contains(&spouse_id)
                    && !lineage.contains(&spouse_id)
                {
                    if let Some(spouse) = self.graph.get_person(spouse_id) {
                        let spouse_label = display_label(RelationshipType::Parent, spouse.gender);
                        node.children.push(self.node_for(spouse, Some(spouse_label)));
                        attached.insert(spouse_id);
                    }
                }
            }
        }
    }

    fn node_for(&self, person: &Person, label: Option<&'static str>) -> TreeNode {
        TreeNode {
            id: person.id.as_u64().to_string(),
            name: person.full_name(),
            birth_year: person.birth_year(),
            death_year: person.death_year(),
            is_alive: person.is_alive(),
            age: person.age_on(self.today),
            relationship_type: label.map(str::to_string),
            spouse_id: self
                .view
                .spouses
                .get(&person.id)
                .map(|s| s.as_u64().to_string()),
            children: Vec::new(),
        }
    }
}

/// Build the display tree for a family as of `today`
pub fn build_family_tree(graph: &FamilyGraph, today: NaiveDate) -> TreeNode {
    TreeBuilder::new(graph, today).build()
}

/// Build the display tree as of the current date
pub fn build_family_tree_today(graph: &FamilyGraph) -> TreeNode {
    build_family_tree(graph, Utc::now().date_naive())
}
