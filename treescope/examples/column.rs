use std::io::{stdout, Write};

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use treescope::{
    column_layout, shade_rgb, ColumnMetrics, NodeInfo, PlainNode, SegmentKind, ShadeScale,
    Snapshot, TreeNode, UnitWidth,
};

// One terminal cell per unit, one row per node: map each segment onto a
// glyph the way a list UI would map it onto a drawn line.
fn glyph(start: f32, length: f32, row_height: f32) -> char {
    if length >= row_height {
        '│'
    } else if length > 0.0 && start == 0.0 {
        '╵'
    } else if length > 0.0 {
        '╷'
    } else {
        ' '
    }
}

fn main() -> std::io::Result<()> {
    let root = PlainNode::new("Window")
        .child(PlainNode::new("Toolbar").child(PlainNode::new("SaveButton")))
        .child(
            PlainNode::new("Sidebar")
                .child(PlainNode::new("LayerList"))
                .child(PlainNode::new("PropertyPane")),
        )
        .child(PlainNode::new("StatusBar"));

    let Some(snapshot) = Snapshot::capture(&root) else {
        return Ok(());
    };
    let metrics = ColumnMetrics {
        unit: UnitWidth::Each(1.0),
        row_height: 1.0,
    };
    let scale = ShadeScale::default();
    let tree_depth = root.tree_depth();

    let mut out = stdout();
    for row in snapshot.rows() {
        let depth = row.depth();
        let mut cells = vec![' '; tree_depth + 2];
        for segment in column_layout(&row, metrics) {
            if segment.hidden {
                continue;
            }
            match segment.kind {
                SegmentKind::Vertical => {
                    cells[segment.depth_index] =
                        glyph(segment.start, segment.length, metrics.row_height);
                }
                SegmentKind::Horizontal => {
                    // Drawn after the verticals so the connector joins the
                    // bar in its slot.
                    let joint = cells[segment.depth_index];
                    cells[segment.depth_index] = match joint {
                        '│' => '├',
                        '╵' => '└',
                        _ => '─',
                    };
                    cells[segment.depth_index + 1] = '─';
                }
            }
        }

        let rgb = shade_rgb(scale, depth, tree_depth);
        out.queue(SetForegroundColor(Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }))?;
        out.queue(Print(cells.into_iter().collect::<String>()))?;
        out.queue(ResetColor)?;
        out.queue(Print(format!(" {}\n", row.title())))?;
    }
    out.flush()?;
    Ok(())
}
