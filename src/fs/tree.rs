//! Tree Navigation
//!
//! Lookup of nodes by normalized path and splitting of paths into a
//! parent/name pair. Every path that is not literally `/` or `~` descends
//! from the home directory; the tree has no addressable nodes outside it.

use crate::fs::types::FsNode;

/// Find the node at `path` in the tree rooted at `root`.
///
/// `/` resolves to the root itself and `~` to the root's home child.
/// Any other path is walked segment by segment from home; a missing
/// segment, or an attempt to descend through a file, yields `None`.
pub fn find_node<'a>(path: &str, root: &'a FsNode) -> Option<&'a FsNode> {
    if path == "/" {
        return Some(root);
    }
    let home = home_node(root)?;
    if path == "~" {
        return Some(home);
    }

    let mut current = home;
    for segment in descent_segments(path) {
        current = current
            .children()?
            .iter()
            .find(|child| child.name() == segment)?;
    }
    Some(current)
}

/// Mutable counterpart of [`find_node`].
pub fn find_node_mut<'a>(path: &str, root: &'a mut FsNode) -> Option<&'a mut FsNode> {
    if path == "/" {
        return Some(root);
    }
    let home = home_node_mut(root)?;
    if path == "~" {
        return Some(home);
    }

    let mut current = home;
    for segment in descent_segments(path) {
        current = current
            .children_mut()?
            .iter_mut()
            .find(|child| child.name() == segment)?;
    }
    Some(current)
}

/// Split a normalized path into its parent path and final name.
///
/// The parent of a top-level absolute entry is `/`; the parent of the home
/// directory itself is also `/`, since `~` is a child of the root node.
pub fn split_parent_and_name(path: &str) -> (String, String) {
    match path.rfind('/') {
        Some(idx) => {
            let name = path[idx + 1..].to_string();
            let parent = if idx == 0 {
                "/".to_string()
            } else {
                path[..idx].to_string()
            };
            (parent, name)
        }
        None => ("/".to_string(), path.to_string()),
    }
}

fn descent_segments(path: &str) -> impl Iterator<Item = &str> {
    let trimmed = path
        .strip_prefix("~/")
        .or_else(|| path.strip_prefix('/'))
        .unwrap_or(path);
    trimmed.split('/').filter(|s| !s.is_empty() && *s != "~")
}

fn home_node(root: &FsNode) -> Option<&FsNode> {
    root.children()?.iter().find(|child| child.name() == "~")
}

fn home_node_mut(root: &mut FsNode) -> Option<&mut FsNode> {
    root.children_mut()?
        .iter_mut()
        .find(|child| child.name() == "~")
}
