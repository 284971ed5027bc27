pub mod index;
pub mod pretty;
pub mod snapshot;
pub mod tree;

pub use index::{
    column_layout, resize_slots, shade_rgb, title_offset, ColumnMetrics, IndexColumn, LineSegment,
    Rgb, SegmentKind, ShadeScale, UnitWidth,
};
pub use pretty::{
    highlighted_text, pretty_print, render_line, subtree_text, tree_text, write_highlighted,
    TreeError, TREE_HEADER,
};
pub use snapshot::{Snapshot, SnapshotNode};
pub use tree::{type_title, NodeInfo, PlainNode, TreeNode};
