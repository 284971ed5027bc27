use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::tree::{NodeInfo, TreeNode};

/// One render pass worth of tree state, captured from a live host graph.
///
/// The host graph may mutate between renders; renderers never touch it
/// directly. Capture reads every node exactly once, and the captured tree
/// stays fixed until dropped. There is no lifecycle beyond a single
/// render pass.
pub struct Snapshot<N> {
    root: Rc<SnapshotNode<N>>,
}

/// A captured node: title, detail and sibling index frozen at capture
/// time, strong links to captured children, weak link back to the
/// captured parent. The fold flag round-trips to the host.
pub struct SnapshotNode<N> {
    host: N,
    title: String,
    detail: Option<String>,
    folded: Cell<bool>,
    index: usize,
    parent: RefCell<Weak<SnapshotNode<N>>>,
    children: Vec<Rc<SnapshotNode<N>>>,
}

impl<N: TreeNode + NodeInfo> Snapshot<N> {
    /// Capture the subtree rooted at `host`. Returns `None` when the host
    /// handle itself is stale; stale descendants are dropped silently.
    pub fn capture(host: &N) -> Option<Self> {
        capture_node(host).map(|root| Self { root })
    }

    pub fn root(&self) -> Rc<SnapshotNode<N>> {
        Rc::clone(&self.root)
    }

    /// Pre-order row list, ready to back a flat list UI.
    pub fn rows(&self) -> Vec<Rc<SnapshotNode<N>>> {
        self.root().descendants(true)
    }

    /// The captured wrapper for a given host node, if it was captured.
    pub fn find(&self, host: &N) -> Option<Rc<SnapshotNode<N>>> {
        self.rows()
            .into_iter()
            .find(|node| node.host.same_node(host))
    }
}

impl<N> SnapshotNode<N> {
    /// The host handle this node was captured from.
    pub fn host(&self) -> &N {
        &self.host
    }

    /// Sibling index in the host graph, frozen at capture time.
    pub fn index(&self) -> usize {
        self.index
    }
}

fn capture_node<N: TreeNode + NodeInfo>(host: &N) -> Option<Rc<SnapshotNode<N>>> {
    if host.is_stale() {
        log::debug!("[snapshot] dropping stale node at sibling index {}", host.sibling_index());
        return None;
    }
    let children: Vec<_> = host
        .children()
        .iter()
        .filter_map(capture_node)
        .collect();
    let node = Rc::new(SnapshotNode {
        host: host.clone(),
        title: host.title(),
        detail: host.detail(),
        folded: Cell::new(host.folded()),
        index: host.sibling_index(),
        parent: RefCell::new(Weak::new()),
        children,
    });
    for child in &node.children {
        *child.parent.borrow_mut() = Rc::downgrade(&node);
    }
    Some(node)
}

impl<N: TreeNode + NodeInfo> TreeNode for Rc<SnapshotNode<N>> {
    fn parent(&self) -> Option<Self> {
        self.parent.borrow().upgrade()
    }

    fn children(&self) -> Vec<Self> {
        self.children.clone()
    }

    fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }

    fn sibling_index(&self) -> usize {
        self.index
    }
}

impl<N: TreeNode + NodeInfo> NodeInfo for Rc<SnapshotNode<N>> {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn detail(&self) -> Option<String> {
        self.detail.clone()
    }

    fn folded(&self) -> bool {
        self.folded.get()
    }

    /// Writes through to the host: the wrapper is a lens onto the host's
    /// fold state, not authoritative storage.
    fn set_folded(&self, folded: bool) {
        self.folded.set(folded);
        self.host.set_folded(folded);
    }
}
