use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use treescope::{pretty_print, subtree_text, tree_text, PlainNode};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("inspect.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let canvas = PlainNode::new("Canvas")
        .with_detail("layers: 3\nblend: normal")
        .child(PlainNode::new("Grid"))
        .child(
            PlainNode::new("Selection")
                .with_detail("anchor: (12, 40)")
                .child(PlainNode::new("Handle")),
        );
    let window = PlainNode::new("Window")
        .with_detail("frame: (0, 0, 1280, 720)")
        .child(PlainNode::new("Toolbar").child(PlainNode::new("SaveButton")))
        .child(
            PlainNode::new("Sidebar")
                .child(PlainNode::new("LayerList"))
                .child(PlainNode::new("PropertyPane")),
        )
        .child(canvas.clone());

    // Full tree from the root, no matter which node we start at.
    println!("{}", tree_text(&canvas, false));

    // Same tree with detail blocks expanded.
    println!("{}", tree_text(&window, true));

    // Just the canvas subtree, with a custom header.
    println!("{}", subtree_text(&canvas, Some("--- canvas ---\n"), false));

    // Highlight the canvas inside the window's tree, on stderr.
    if let Err(err) = pretty_print(&canvas, &window, false) {
        eprintln!("{err}");
    }

    Ok(())
}
