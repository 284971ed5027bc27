mod node;
mod plain;

pub use node::{type_title, NodeInfo, TreeNode};
pub use plain::PlainNode;
