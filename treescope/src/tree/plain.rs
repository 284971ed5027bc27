use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::{NodeInfo, TreeNode};

/// An owned tree for callers without a host object graph: build it by
/// hand, then feed it to the renderers like any other adapter.
///
/// Cloning is cheap and identity-preserving (clones are handles onto the
/// same node), so keep a clone of any node you want to query after
/// attaching it.
#[derive(Debug, Clone)]
pub struct PlainNode(Rc<Inner>);

#[derive(Debug)]
struct Inner {
    title: RefCell<String>,
    detail: RefCell<Option<String>>,
    folded: Cell<bool>,
    parent: RefCell<Weak<Inner>>,
    children: RefCell<Vec<PlainNode>>,
}

impl PlainNode {
    pub fn new(title: impl Into<String>) -> Self {
        Self(Rc::new(Inner {
            title: RefCell::new(title.into()),
            detail: RefCell::new(None),
            folded: Cell::new(true),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
        }))
    }

    pub fn with_detail(self, detail: impl Into<String>) -> Self {
        *self.0.detail.borrow_mut() = Some(detail.into());
        self
    }

    /// Attach a child; its parent link is pointed back at this node.
    pub fn child(self, child: PlainNode) -> Self {
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child);
        self
    }
}

impl TreeNode for PlainNode {
    fn parent(&self) -> Option<Self> {
        self.0.parent.borrow().upgrade().map(PlainNode)
    }

    fn children(&self) -> Vec<Self> {
        self.0.children.borrow().clone()
    }

    fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl NodeInfo for PlainNode {
    fn title(&self) -> String {
        self.0.title.borrow().clone()
    }

    fn detail(&self) -> Option<String> {
        self.0.detail.borrow().clone()
    }

    fn folded(&self) -> bool {
        self.0.folded.get()
    }

    fn set_folded(&self, folded: bool) {
        self.0.folded.set(folded);
    }
}
