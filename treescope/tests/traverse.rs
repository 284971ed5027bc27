use treescope::{PlainNode, TreeNode};

/// Root with two children; the second child has one child of its own.
///
/// ```text
/// Root ─┬─ Left
///       └─ Right ─── Leaf
/// ```
fn sample_tree() -> (PlainNode, PlainNode, PlainNode, PlainNode) {
    let left = PlainNode::new("Left");
    let leaf = PlainNode::new("Leaf");
    let right = PlainNode::new("Right").child(leaf.clone());
    let root = PlainNode::new("Root").child(left.clone()).child(right.clone());
    (root, left, right, leaf)
}

fn titles(nodes: &[PlainNode]) -> Vec<String> {
    use treescope::NodeInfo;
    nodes.iter().map(|node| node.title()).collect()
}

// ============================================================================
// Root / depth
// ============================================================================

#[test]
fn test_root_has_depth_one_from_every_node() {
    let (root, left, right, leaf) = sample_tree();
    for node in [&root, &left, &right, &leaf] {
        assert_eq!(node.root().depth(), 1);
        assert!(node.root().same_node(&root));
    }
}

#[test]
fn test_depth_counts_ancestors_inclusive() {
    let (root, left, right, leaf) = sample_tree();
    assert_eq!(root.depth(), 1);
    assert_eq!(left.depth(), 2);
    assert_eq!(right.depth(), 2);
    assert_eq!(leaf.depth(), 3);
}

#[test]
fn test_lone_root_is_its_own_root() {
    let lone = PlainNode::new("Lone");
    assert!(lone.root().same_node(&lone));
    assert_eq!(lone.depth(), 1);
}

// ============================================================================
// Pre-order enumeration
// ============================================================================

#[test]
fn test_descendants_are_preorder() {
    let (root, _, _, _) = sample_tree();
    let order = titles(&root.descendants(true));
    assert_eq!(order, ["Root", "Left", "Right", "Leaf"]);
}

#[test]
fn test_sibling_subtrees_stay_whole() {
    // First child's entire subtree must come before the second child.
    let a1 = PlainNode::new("A1");
    let a2 = PlainNode::new("A2");
    let a = PlainNode::new("A").child(a1.clone()).child(a2.clone());
    let b = PlainNode::new("B");
    let root = PlainNode::new("Root").child(a.clone()).child(b.clone());

    let order = titles(&root.descendants(true));
    assert_eq!(order, ["Root", "A", "A1", "A2", "B"]);
}

#[test]
fn test_descendants_first_element_is_self() {
    let (root, _, right, _) = sample_tree();
    for node in [&root, &right] {
        let subtree = node.descendants(true);
        assert!(subtree[0].same_node(node));
    }
}

#[test]
fn test_exclude_self_keeps_all_descendants() {
    let (root, _, _, _) = sample_tree();
    let order = titles(&root.descendants(false));
    assert_eq!(order, ["Left", "Right", "Leaf"]);
}

#[test]
fn test_subtree_length_identity() {
    // len(subtree(n)) == 1 + sum over children of len(subtree(child))
    let (root, _, _, _) = sample_tree();
    for node in root.descendants(true) {
        let expected: usize = node
            .children()
            .iter()
            .map(|child| child.descendants(true).len())
            .sum::<usize>()
            + 1;
        assert_eq!(node.descendants(true).len(), expected);
    }
}

// ============================================================================
// Sibling facts
// ============================================================================

#[test]
fn test_sibling_index_positions() {
    let (root, left, right, leaf) = sample_tree();
    assert_eq!(root.sibling_index(), 0);
    assert_eq!(left.sibling_index(), 0);
    assert_eq!(right.sibling_index(), 1);
    assert_eq!(leaf.sibling_index(), 0);
}

#[test]
fn test_has_next_sibling() {
    let (root, left, right, leaf) = sample_tree();
    assert!(!root.has_next_sibling(), "a root never has a next sibling");
    assert!(left.has_next_sibling());
    assert!(!right.has_next_sibling());
    assert!(!leaf.has_next_sibling());
}

#[test]
fn test_has_children_and_parent() {
    let (root, left, _, leaf) = sample_tree();
    assert!(root.has_children());
    assert!(!root.has_parent());
    assert!(!left.has_children());
    assert!(left.has_parent());
    assert!(leaf.has_parent());
}

// ============================================================================
// Tree depth
// ============================================================================

#[test]
fn test_tree_depth_is_tree_global() {
    let (root, left, right, leaf) = sample_tree();
    for node in [&root, &left, &right, &leaf] {
        assert_eq!(node.tree_depth(), 3);
    }
}

#[test]
fn test_tree_depth_of_lone_root_is_one() {
    let lone = PlainNode::new("Lone");
    assert_eq!(lone.tree_depth(), 1);
}

// ============================================================================
// Index path
// ============================================================================

#[test]
fn test_index_path_is_root_inclusive() {
    let (root, left, right, leaf) = sample_tree();
    assert_eq!(root.index_path(), [0]);
    assert_eq!(left.index_path(), [0, 0]);
    assert_eq!(right.index_path(), [0, 1]);
    assert_eq!(leaf.index_path(), [0, 1, 0]);
}

#[test]
fn test_index_path_length_matches_depth() {
    let (_, _, _, leaf) = sample_tree();
    for node in leaf.root().descendants(true) {
        assert_eq!(node.index_path().len(), node.depth());
    }
}
