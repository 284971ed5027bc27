mod shade;

pub use shade::{shade_rgb, Rgb, ShadeScale};

use crate::tree::TreeNode;

/// Axis of an index-column line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Horizontal,
    Vertical,
}

/// One connector line in a node's index column.
///
/// Offsets are row-local: a vertical segment runs downward from `start`
/// below the row top, in the column `depth_index` units from the left; the
/// horizontal connector runs rightward from `depth_index` units at height
/// `start`. Segments carry no identity and are recomputed every pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub kind: SegmentKind,
    pub depth_index: usize,
    pub start: f32,
    pub length: f32,
    pub hidden: bool,
}

impl LineSegment {
    const fn vertical(depth_index: usize) -> Self {
        Self {
            kind: SegmentKind::Vertical,
            depth_index,
            start: 0.0,
            length: 0.0,
            hidden: true,
        }
    }
}

/// Horizontal unit for the column: a fixed width per depth level, or a
/// total column width split evenly across the tree depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitWidth {
    Each(f32),
    Total(f32),
}

impl UnitWidth {
    /// Width of one depth level.
    pub fn resolve(self, tree_depth: usize) -> f32 {
        match self {
            Self::Each(width) => width,
            Self::Total(width) => width / tree_depth.max(1) as f32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnMetrics {
    pub unit: UnitWidth,
    pub row_height: f32,
}

impl Default for ColumnMetrics {
    fn default() -> Self {
        Self {
            unit: UnitWidth::Total(80.0),
            row_height: 20.0,
        }
    }
}

/// Compute the full segment set for one rendered row: the `depth + 1`
/// vertical slots in slot order, then the horizontal connector. Every
/// call recomputes from scratch; there is no incremental state.
pub fn column_layout<T: TreeNode>(node: &T, metrics: ColumnMetrics) -> Vec<LineSegment> {
    let (mut segments, horizontal) = column_parts(node, metrics);
    segments.push(horizontal);
    segments
}

fn column_parts<T: TreeNode>(node: &T, metrics: ColumnMetrics) -> (Vec<LineSegment>, LineSegment) {
    let depth = node.depth();
    let unit = metrics.unit.resolve(node.tree_depth());
    let height = metrics.row_height;

    let mut verticals: Vec<LineSegment> = (0..=depth).map(LineSegment::vertical).collect();

    // The node's own column: the bar stops halfway down unless a sibling
    // follows below.
    verticals[depth - 1] = LineSegment {
        kind: SegmentKind::Vertical,
        depth_index: depth - 1,
        start: 0.0,
        length: if node.has_next_sibling() {
            height
        } else {
            height / 2.0
        },
        hidden: false,
    };
    // Lower stub leading into the first child.
    verticals[depth] = LineSegment {
        kind: SegmentKind::Vertical,
        depth_index: depth,
        start: height / 2.0,
        length: if node.has_children() { height / 2.0 } else { 0.0 },
        hidden: false,
    };

    // Re-extend every ancestor's bar across this row so continuous lines
    // span multiple rows; hide it where the ancestor was the last child.
    let mut parent = node.parent();
    while let Some(ancestor) = parent {
        let slot = ancestor.depth() - 1;
        verticals[slot] = LineSegment {
            kind: SegmentKind::Vertical,
            depth_index: slot,
            start: 0.0,
            length: height,
            hidden: !ancestor.has_next_sibling(),
        };
        parent = ancestor.parent();
    }

    let horizontal = LineSegment {
        kind: SegmentKind::Horizontal,
        depth_index: depth - 1,
        start: height / 2.0,
        length: 2.0 * unit,
        hidden: false,
    };
    (verticals, horizontal)
}

/// Horizontal offset where a row's title starts, just right of the
/// horizontal connector.
pub fn title_offset<T: TreeNode>(node: &T, metrics: ColumnMetrics) -> f32 {
    let unit = metrics.unit.resolve(node.tree_depth());
    unit * (node.depth() - 1) as f32 + 2.0 * unit
}

/// Grow or shrink a slot pool to `target` entries. New slots come from
/// `create`; discarded slots are handed to `detach` (front of the pool
/// first) before truncation.
pub fn resize_slots<T>(
    pool: &mut Vec<T>,
    target: usize,
    mut create: impl FnMut() -> T,
    mut detach: impl FnMut(T),
) {
    if target > pool.len() {
        for _ in 0..target - pool.len() {
            pool.push(create());
        }
    } else if target < pool.len() {
        let surplus = pool.len() - target;
        for slot in pool.drain(..surplus) {
            detach(slot);
        }
    }
}

/// One drawable object per vertical slot, reused across rows the way a
/// list UI reuses layer objects between cells.
#[derive(Debug, Default)]
pub struct IndexColumn<S> {
    slots: Vec<S>,
}

impl<S> IndexColumn<S> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn slots(&self) -> &[S] {
        &self.slots
    }

    /// Point the column at `node` and recompute every segment. `create`
    /// and `detach` manage slot objects as the pool grows and shrinks;
    /// `apply` receives each surviving slot with its fresh segment.
    /// Returns the horizontal connector.
    pub fn set_node<T: TreeNode>(
        &mut self,
        node: &T,
        metrics: ColumnMetrics,
        create: impl FnMut() -> S,
        detach: impl FnMut(S),
        mut apply: impl FnMut(&mut S, &LineSegment),
    ) -> LineSegment {
        let (verticals, horizontal) = column_parts(node, metrics);
        resize_slots(&mut self.slots, verticals.len(), create, detach);
        for (slot, segment) in self.slots.iter_mut().zip(&verticals) {
            apply(slot, segment);
        }
        horizontal
    }
}
