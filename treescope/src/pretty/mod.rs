use std::io::{self, Write};

use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use crate::snapshot::Snapshot;
use crate::tree::{NodeInfo, TreeNode};

/// Banner prepended to rendered trees when no header is given.
pub const TREE_HEADER: &str = "\n======>> Treescope <<======\n\n";

#[derive(Debug, Error)]
pub enum TreeError {
    /// The claimed ancestor is not on the node's parent chain.
    #[error("\"{ancestor}\" is not an ancestor of \"{node}\"")]
    NotAnAncestor { ancestor: String, node: String },

    #[error("failed to write tree text")]
    Io(#[from] io::Error),
}

fn display_width(s: &str) -> usize {
    s.width()
}

/// Render the single diagram line for `node`: ancestor padding, the
/// box-drawing connector, the title, and (optionally) the detail block
/// indented under it.
pub fn render_line<T: TreeNode + NodeInfo>(node: &T, include_detail: bool) -> String {
    // Ancestor columns, root first: a bar where the ancestor still has a
    // sibling below, blank where it was the last child, nothing for the
    // root.
    let mut ancestors = Vec::new();
    let mut current = node.parent();
    while let Some(ancestor) = current {
        current = ancestor.parent();
        ancestors.push(ancestor);
    }
    let padding: String = ancestors
        .iter()
        .rev()
        .map(|ancestor| {
            if ancestor.has_next_sibling() {
                " │"
            } else if ancestor.has_parent() {
                "  "
            } else {
                ""
            }
        })
        .collect();

    let has_sibling = node.has_next_sibling();
    let is_parent = node.has_children();

    let connector = if node.has_parent() {
        if has_sibling {
            " ├"
        } else {
            " └"
        }
    } else {
        ""
    };
    let stem = if is_parent { "─┬─ " } else { "─── " };

    let mut text = node.title();
    if include_detail {
        if let Some(detail) = node.detail() {
            // Same column rule as the connector, applied to the node
            // itself: detail lines hang under the title without breaking
            // the sibling bar or the stem into the first child.
            let continuation = format!(
                "{}{}",
                if has_sibling { " │" } else { "  " },
                if is_parent { " │  " } else { "   " },
            );
            let pieces: Vec<&str> = detail.split('\n').filter(|line| !line.is_empty()).collect();
            if !pieces.is_empty() {
                let mut block = text;
                for piece in pieces {
                    block.push('\n');
                    block.push_str(&padding);
                    block.push_str(&continuation);
                    block.push_str(piece);
                }
                text = block;
            }
        }
    }

    format!("{padding}{connector}{stem}{text}")
}

/// Render `node` and all of its descendants, one line per node, under a
/// header (the default banner when `None`).
pub fn subtree_text<T: TreeNode + NodeInfo>(
    node: &T,
    header: Option<&str>,
    include_detail: bool,
) -> String {
    let mut out = String::from(header.unwrap_or(TREE_HEADER));
    for member in node.descendants(true) {
        out.push_str(&render_line(&member, include_detail));
        out.push('\n');
    }
    out
}

/// Full tree text from the root, however deep `node` sits in it. The
/// tree is captured into a snapshot first, so the host graph is read
/// exactly once per call.
pub fn tree_text<N: TreeNode + NodeInfo>(node: &N, include_detail: bool) -> String {
    let root = node.root();
    match Snapshot::capture(&root) {
        Some(snapshot) => subtree_text(&snapshot.root(), None, include_detail),
        None => String::from(TREE_HEADER),
    }
}

/// Render `of_ancestor`'s full subtree with `node`'s subtree bracketed by
/// `"= "` separator lines.
///
/// Fails with [`TreeError::NotAnAncestor`] when `of_ancestor` is not on
/// `node`'s parent chain; nothing is rendered in that case.
///
/// The bracket is placed by exact string match of the node's rendered
/// block inside the ancestor's text. When duplicated titles make the
/// block match more than once, every occurrence is bracketed and a
/// warning is logged.
pub fn highlighted_text<N: TreeNode + NodeInfo>(
    node: &N,
    of_ancestor: &N,
    include_detail: bool,
) -> Result<String, TreeError> {
    let mut on_chain = false;
    let mut current = Some(node.clone());
    while let Some(link) = current {
        if link.same_node(of_ancestor) {
            on_chain = true;
            break;
        }
        current = link.parent();
    }
    if !on_chain {
        return Err(TreeError::NotAnAncestor {
            ancestor: of_ancestor.title(),
            node: node.title(),
        });
    }

    // Read the host graph once; both texts render from the same capture.
    let Some(snapshot) = Snapshot::capture(of_ancestor) else {
        return Ok(String::from(TREE_HEADER));
    };
    let ancestor_lines: String = snapshot
        .rows()
        .iter()
        .map(|member| render_line(member, include_detail) + "\n")
        .collect();

    let Some(target) = snapshot.find(node) else {
        log::debug!("[pretty] highlight target vanished during capture");
        return Ok(format!("{TREE_HEADER}{ancestor_lines}"));
    };
    let block_nodes = target.descendants(true);
    let block: String = block_nodes
        .iter()
        .map(|member| render_line(member, include_detail) + "\n")
        .collect();

    let first_width = block_nodes
        .first()
        .map(|member| display_width(&render_line(member, include_detail)))
        .unwrap_or(0);
    let last_width = block_nodes
        .last()
        .map(|member| display_width(&render_line(member, include_detail)))
        .unwrap_or(0);
    let top = "= ".repeat(first_width / 2);
    let bottom = "= ".repeat(last_width / 2);
    let bracketed = format!("{top}\n{block}{bottom}\n");

    let matches = ancestor_lines.matches(block.as_str()).count();
    if matches > 1 {
        log::warn!(
            "[pretty] highlighted block matches {matches} times; bracketing every occurrence"
        );
    }
    Ok(format!(
        "{TREE_HEADER}{}",
        ancestor_lines.replace(block.as_str(), &bracketed)
    ))
}

/// Write the highlighted tree text to `out`. The usage error is surfaced
/// before anything is written.
pub fn write_highlighted<N, W>(
    out: &mut W,
    node: &N,
    of_ancestor: &N,
    include_detail: bool,
) -> Result<(), TreeError>
where
    N: TreeNode + NodeInfo,
    W: Write,
{
    let text = highlighted_text(node, of_ancestor, include_detail)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

/// Print the highlighted tree to stderr, the diagnostic stream.
pub fn pretty_print<N: TreeNode + NodeInfo>(
    node: &N,
    of_ancestor: &N,
    include_detail: bool,
) -> Result<(), TreeError> {
    write_highlighted(&mut io::stderr(), node, of_ancestor, include_detail)
}
