/// Structural contract for tree participants.
///
/// Implementors are cheap handles onto nodes of a rooted tree: every node
/// has at most one parent, and following `parent` repeatedly terminates at
/// a node without one. Cycles and multi-parent graphs violate that
/// precondition and make the derived methods recurse without bound; they
/// are not detected.
pub trait TreeNode: Clone {
    /// The owning node, if any. `None` means this node is a root.
    fn parent(&self) -> Option<Self>;

    /// Child nodes in insertion order. Insertion order is traversal order.
    fn children(&self) -> Vec<Self>;

    /// Stable node identity. Handle types compare by pointer, not value.
    fn same_node(&self, other: &Self) -> bool;

    /// 1-based distance from the root (the root itself is depth 1).
    fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.parent();
        while let Some(node) = current {
            depth += 1;
            current = node.parent();
        }
        depth
    }

    /// Position among the parent's children. 0 for a root, or when the
    /// parent does not list this node.
    fn sibling_index(&self) -> usize {
        let Some(parent) = self.parent() else {
            return 0;
        };
        parent
            .children()
            .iter()
            .position(|child| child.same_node(self))
            .unwrap_or(0)
    }

    fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    fn has_parent(&self) -> bool {
        self.parent().is_some()
    }

    /// Whether a sibling follows this node in the parent's child order.
    /// A root never has a next sibling.
    fn has_next_sibling(&self) -> bool {
        let count = self.parent().map(|p| p.children().len()).unwrap_or(1);
        self.sibling_index() + 1 < count
    }

    /// Walk `parent` links to the top of the tree.
    fn root(&self) -> Self {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// This subtree in pre-order: a node precedes all of its descendants,
    /// and sibling subtrees appear whole, in child order. With
    /// `include_self == false` the node itself is omitted but all of its
    /// descendants are kept.
    fn descendants(&self, include_self: bool) -> Vec<Self> {
        let mut nodes = Vec::new();
        if include_self {
            nodes.push(self.clone());
        }
        collect_descendants(self, &mut nodes);
        nodes
    }

    /// Maximum depth across the whole tree this node belongs to, at
    /// least 1. Tree-global: every node of one tree reports the same
    /// value.
    fn tree_depth(&self) -> usize {
        self.root()
            .descendants(true)
            .iter()
            .map(TreeNode::depth)
            .max()
            .unwrap_or(1)
    }

    /// Sibling indices from the root down to this node, root inclusive
    /// (the root contributes 0), so `index_path().len() == depth()`.
    fn index_path(&self) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut current = Some(self.clone());
        while let Some(node) = current {
            current = node.parent();
            chain.push(node);
        }
        chain.reverse();
        chain.iter().map(TreeNode::sibling_index).collect()
    }
}

fn collect_descendants<T: TreeNode>(node: &T, out: &mut Vec<T>) {
    for child in node.children() {
        out.push(child.clone());
        collect_descendants(&child, out);
    }
}

/// What a node shows when rendered, plus its host-owned fold state.
pub trait NodeInfo {
    /// One-line label, always present.
    fn title(&self) -> String;

    /// Longer description shown under the title when detail rendering is
    /// on.
    fn detail(&self) -> Option<String> {
        None
    }

    /// Whether the detail block is collapsed in a list UI. The flag is
    /// owned by the host object; this accessor pair is a lens onto it,
    /// not storage. Last write wins.
    fn folded(&self) -> bool {
        true
    }

    fn set_folded(&self, _folded: bool) {}

    /// True when the host object behind this handle has been invalidated
    /// (a weak handle that no longer upgrades, say). Stale branches are
    /// dropped during snapshot capture.
    fn is_stale(&self) -> bool {
        false
    }
}

/// Short type name without the module path, for adapters that title
/// nodes after their host type.
pub fn type_title<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::type_title;

    struct Widget;

    #[test]
    fn test_type_title_strips_module_path() {
        assert_eq!(type_title::<Widget>(), "Widget");
        assert_eq!(type_title::<String>(), "String");
    }
}
