//! Initial Filesystem
//!
//! The fixed tree every session starts from. Sessions clone the seed so
//! mutations never leak between instances.

use lazy_static::lazy_static;

use crate::fs::types::FsNode;

lazy_static! {
    static ref SEED: FsNode = build_seed();
}

/// A fresh copy of the default filesystem tree.
pub fn initial_file_system() -> FsNode {
    SEED.clone()
}

fn build_seed() -> FsNode {
    let home = FsNode::dir(
        "~",
        "755",
        vec![
            FsNode::dir(
                "Documents",
                "755",
                vec![
                    FsNode::file("report.docx", "This is a secret report.", 2450, "644"),
                    FsNode::file("notes.txt", "Remember to buy milk.", 1200, "644"),
                ],
            ),
            FsNode::dir(
                "Pictures",
                "755",
                vec![
                    FsNode::file("vacation.jpg", "Image data...", 120240, "644"),
                    FsNode::dir(
                        "Old",
                        "755",
                        vec![FsNode::file("archive.zip", "Zip data...", 500000, "644")],
                    ),
                ],
            ),
            FsNode::dir(
                ".config",
                "700",
                vec![FsNode::file("settings.json", "{}", 2, "600")],
            ),
            FsNode::file(
                "README.md",
                "Welcome to the Linux Console Explorer!",
                120,
                "644",
            ),
            FsNode::file("main.cpp", "#include <iostream>", 2048, "644"),
        ],
    );
    FsNode::dir("/", "755", vec![home])
}
