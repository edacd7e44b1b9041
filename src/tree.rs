//! Tree Utilities
//!
//! Hierarchy assembly for the structures screen: the expandable table
//! rows of the pre-nested forest, and the family tree of a single root
//! built from its flat descendant list.

use std::collections::{HashMap, HashSet};

use crate::models::{StructureNode, TreeNode};

/// Indentation step per depth level, in px
pub const INDENT_UNIT_PX: usize = 24;
/// Indentation of top-level rows, in px
pub const INDENT_BASE_PX: usize = 12;

pub fn row_indent_px(depth: usize) -> usize {
    depth * INDENT_UNIT_PX + INDENT_BASE_PX
}

// ========================
// Forest (table view)
// ========================

/// Per-view expansion flags of the structures table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionState {
    expanded: HashMap<u32, bool>,
    known: HashSet<u32>,
}

impl ExpansionState {
    /// Fresh state for a newly fetched forest: top-level nodes expanded,
    /// everything deeper collapsed.
    pub fn for_forest(forest: &[StructureNode]) -> Self {
        fn collect_ids(nodes: &[StructureNode], known: &mut HashSet<u32>) {
            for node in nodes {
                known.insert(node.id);
                collect_ids(&node.children, known);
            }
        }

        let mut known = HashSet::new();
        collect_ids(forest, &mut known);
        let expanded = forest.iter().map(|node| (node.id, true)).collect();
        Self { expanded, known }
    }

    /// Absent ids count as collapsed
    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded.get(&id).copied().unwrap_or(false)
    }

    /// Flip one node. Ids outside the current forest are ignored.
    /// Returns whether anything changed.
    pub fn toggle(&mut self, id: u32) -> bool {
        if !self.known.contains(&id) {
            return false;
        }
        let flag = self.expanded.entry(id).or_insert(false);
        *flag = !*flag;
        true
    }
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// The node without its nested children
    pub node: StructureNode,
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
}

/// Render the forest as indented rows using recursive DFS.
/// Children of collapsed nodes are skipped.
pub fn visible_rows(forest: &[StructureNode], expansion: &ExpansionState) -> Vec<TableRow> {
    fn collect(
        nodes: &[StructureNode],
        depth: usize,
        expansion: &ExpansionState,
        result: &mut Vec<TableRow>,
    ) {
        for node in nodes {
            let has_children = node.has_children();
            let expanded = expansion.is_expanded(node.id);
            let mut row_node = node.clone();
            row_node.children = Vec::new();
            result.push(TableRow { node: row_node, depth, has_children, expanded });
            if has_children && expanded {
                collect(&node.children, depth + 1, expansion, result);
            }
        }
    }

    let mut result = Vec::new();
    collect(forest, 0, expansion, &mut result);
    result
}

/// Ids of `id` and everything nested under it in the forest.
/// Empty when `id` is not in the forest.
pub fn subtree_ids(forest: &[StructureNode], id: u32) -> HashSet<u32> {
    fn find(nodes: &[StructureNode], id: u32) -> Option<&StructureNode> {
        nodes
            .iter()
            .find_map(|node| if node.id == id { Some(node) } else { find(&node.children, id) })
    }

    fn collect(node: &StructureNode, out: &mut HashSet<u32>) {
        out.insert(node.id);
        for child in &node.children {
            collect(child, out);
        }
    }

    let mut out = HashSet::new();
    if let Some(node) = find(forest, id) {
        collect(node, &mut out);
    }
    out
}

// ========================
// Family tree
// ========================

/// Assembled family tree plus the descendants that could not be linked
#[derive(Debug, Clone, PartialEq)]
pub struct SubtreeBuild {
    pub tree: TreeNode,
    /// Ids of descendants whose parent chain does not reach the root,
    /// in the order they were returned
    pub dropped: Vec<u32>,
}

/// Link a flat descendant list under `root`.
///
/// A descendant is attached to its parent when that parent is the root or
/// another returned descendant; siblings keep the order they were returned
/// in. Anything not reachable from the root is left out of the tree and
/// reported in [`SubtreeBuild::dropped`]. Each id is placed at most once,
/// so a malformed (cyclic) parent relation cannot recurse forever.
pub fn build_subtree(root: &StructureNode, descendants: &[StructureNode]) -> SubtreeBuild {
    let mut known: HashSet<u32> = descendants.iter().map(|node| node.id).collect();
    known.insert(root.id);

    let mut children_map: HashMap<u32, Vec<&StructureNode>> = HashMap::new();
    for node in descendants {
        if let Some(parent_id) = node.parent_id.filter(|pid| known.contains(pid)) {
            children_map.entry(parent_id).or_default().push(node);
        }
    }

    fn attach(
        node: &StructureNode,
        children_map: &HashMap<u32, Vec<&StructureNode>>,
        placed: &mut HashSet<u32>,
    ) -> TreeNode {
        let mut tree = TreeNode::leaf(node.clone());
        if let Some(children) = children_map.get(&node.id) {
            for child in children {
                if placed.insert(child.id) {
                    tree.children.push(attach(child, children_map, placed));
                }
            }
        }
        tree
    }

    let mut placed = HashSet::from([root.id]);
    let tree = attach(root, &children_map, &mut placed);
    let dropped = descendants
        .iter()
        .map(|node| node.id)
        .filter(|id| !placed.contains(id))
        .collect();

    SubtreeBuild { tree, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_node(id: u32, parent_id: Option<u32>) -> StructureNode {
        StructureNode {
            id,
            name: Some(format!("Structure {}", id)),
            parent_id,
            level: None,
            level_name: None,
            is_branch: false,
            order: Some(id as i32),
            image: None,
            description: None,
            right_address: None,
            left_address: None,
            children: Vec::new(),
        }
    }

    fn nested(id: u32, children: Vec<StructureNode>) -> StructureNode {
        let mut node = make_node(id, None);
        node.children = children
            .into_iter()
            .map(|mut child| {
                child.parent_id = Some(id);
                child
            })
            .collect();
        node
    }

    fn ids(rows: &[TableRow]) -> Vec<(u32, usize)> {
        rows.iter().map(|row| (row.node.id, row.depth)).collect()
    }

    /// Pre-order (id, depth) listing of an assembled tree
    fn shape(tree: &TreeNode) -> Vec<(u32, usize)> {
        fn walk(tree: &TreeNode, depth: usize, out: &mut Vec<(u32, usize)>) {
            out.push((tree.id(), depth));
            for child in &tree.children {
                walk(child, depth + 1, out);
            }
        }
        let mut out = Vec::new();
        walk(tree, 0, &mut out);
        out
    }

    #[test]
    fn test_first_level_expanded_by_default() {
        let forest = vec![nested(1, vec![nested(2, vec![])]), nested(3, vec![])];
        let expansion = ExpansionState::for_forest(&forest);

        assert!(expansion.is_expanded(1));
        assert!(expansion.is_expanded(3));
        assert!(!expansion.is_expanded(2));

        let rows = visible_rows(&forest, &expansion);
        assert_eq!(ids(&rows), vec![(1, 0), (2, 1), (3, 0)]);
        assert!(rows[0].has_children);
        assert!(!rows[1].has_children);
        assert!(rows[0].node.children.is_empty());
    }

    #[test]
    fn test_toggle_hides_children() {
        let forest = vec![nested(1, vec![nested(2, vec![])]), nested(3, vec![])];
        let mut expansion = ExpansionState::for_forest(&forest);

        assert!(expansion.toggle(1));
        let rows = visible_rows(&forest, &expansion);
        assert_eq!(ids(&rows), vec![(1, 0), (3, 0)]);
        assert!(!rows[0].expanded);
    }

    #[test]
    fn test_deeper_levels_start_collapsed() {
        let forest = vec![nested(1, vec![nested(2, vec![nested(4, vec![])])])];
        let mut expansion = ExpansionState::for_forest(&forest);

        assert_eq!(ids(&visible_rows(&forest, &expansion)), vec![(1, 0), (2, 1)]);

        expansion.toggle(2);
        assert_eq!(ids(&visible_rows(&forest, &expansion)), vec![(1, 0), (2, 1), (4, 2)]);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let forest = vec![nested(1, vec![nested(2, vec![])]), nested(3, vec![])];
        let mut expansion = ExpansionState::for_forest(&forest);
        let before = [1, 2, 3].map(|id| expansion.is_expanded(id));

        for id in [1, 2, 3] {
            expansion.toggle(id);
            expansion.toggle(id);
            assert_eq!([1, 2, 3].map(|id| expansion.is_expanded(id)), before);
        }
    }

    #[test]
    fn test_toggle_leaves_other_ids_alone() {
        let forest = vec![nested(1, vec![nested(2, vec![])]), nested(3, vec![])];
        let mut expansion = ExpansionState::for_forest(&forest);

        expansion.toggle(3);
        assert!(expansion.is_expanded(1));
        assert!(!expansion.is_expanded(2));
        assert!(!expansion.is_expanded(3));
    }

    #[test]
    fn test_toggle_unknown_id_is_ignored() {
        let forest = vec![nested(1, vec![])];
        let mut expansion = ExpansionState::for_forest(&forest);
        let before = expansion.clone();

        assert!(!expansion.toggle(42));
        assert_eq!(expansion, before);
        assert!(!expansion.is_expanded(42));
    }

    #[test]
    fn test_empty_forest_has_no_rows() {
        let expansion = ExpansionState::for_forest(&[]);
        assert!(visible_rows(&[], &expansion).is_empty());
    }

    #[test]
    fn test_row_indent() {
        assert_eq!(row_indent_px(0), 12);
        assert_eq!(row_indent_px(2), 60);
    }

    #[test]
    fn test_subtree_ids() {
        let forest = vec![nested(1, vec![nested(2, vec![nested(4, vec![])])]), nested(3, vec![])];

        assert_eq!(subtree_ids(&forest, 2), HashSet::from([2, 4]));
        assert_eq!(subtree_ids(&forest, 3), HashSet::from([3]));
        assert!(subtree_ids(&forest, 9).is_empty());
    }

    #[test]
    fn test_build_subtree_drops_orphans() {
        let root = make_node(1, None);
        let descendants = vec![make_node(5, Some(1)), make_node(6, Some(5)), make_node(7, Some(99))];

        let build = build_subtree(&root, &descendants);

        assert_eq!(shape(&build.tree), vec![(1, 0), (5, 1), (6, 2)]);
        assert_eq!(build.dropped, vec![7]);
    }

    #[test]
    fn test_build_subtree_keeps_returned_order() {
        let root = make_node(1, None);
        // Child listed before its parent, siblings out of id order
        let descendants = vec![
            make_node(9, Some(4)),
            make_node(4, Some(1)),
            make_node(3, Some(1)),
            make_node(8, Some(4)),
        ];

        let build = build_subtree(&root, &descendants);

        assert_eq!(shape(&build.tree), vec![(1, 0), (4, 1), (9, 2), (8, 2), (3, 1)]);
        assert!(build.dropped.is_empty());
        assert_eq!(shape(&build.tree).len(), 5);
    }

    #[test]
    fn test_build_subtree_drops_descendants_of_orphans() {
        let root = make_node(1, None);
        let descendants = vec![make_node(7, Some(99)), make_node(8, Some(7)), make_node(2, Some(1))];

        let build = build_subtree(&root, &descendants);

        assert_eq!(shape(&build.tree), vec![(1, 0), (2, 1)]);
        assert_eq!(build.dropped, vec![7, 8]);
    }

    #[test]
    fn test_build_subtree_without_descendants() {
        let root = make_node(1, None);
        let build = build_subtree(&root, &[]);

        assert_eq!(shape(&build.tree), vec![(1, 0)]);
        assert!(build.dropped.is_empty());
    }

    #[test]
    fn test_build_subtree_ignores_root_nesting() {
        // A root picked from the forest still carries its nested children
        let root = nested(1, vec![nested(2, vec![])]);
        let build = build_subtree(&root, &[make_node(3, Some(1))]);

        assert_eq!(shape(&build.tree), vec![(1, 0), (3, 1)]);
        assert!(build.tree.node.children.is_empty());
    }

    #[test]
    fn test_build_subtree_survives_cycles() {
        let root = make_node(1, None);
        let descendants = vec![
            make_node(2, Some(1)),
            make_node(3, Some(4)),
            make_node(4, Some(3)),
            make_node(5, Some(5)),
        ];

        let build = build_subtree(&root, &descendants);

        assert_eq!(shape(&build.tree), vec![(1, 0), (2, 1)]);
        assert_eq!(build.dropped, vec![3, 4, 5]);
    }

    #[test]
    fn test_build_subtree_is_idempotent() {
        let root = make_node(1, None);
        let descendants = vec![
            make_node(2, Some(1)),
            make_node(3, Some(2)),
            make_node(4, Some(1)),
            make_node(5, Some(3)),
            make_node(6, Some(77)),
        ];

        let first = build_subtree(&root, &descendants);
        let second = build_subtree(&root, &descendants);
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_subtree_depth_matches_ancestor_chain() {
        let root = make_node(10, None);
        let descendants: Vec<_> = (11..20).map(|id| make_node(id, Some(id - 1))).collect();

        let build = build_subtree(&root, &descendants);

        for (id, depth) in shape(&build.tree) {
            assert_eq!(depth, (id - 10) as usize);
        }
        assert_eq!(shape(&build.tree).len(), 10);
    }
}
