//! ls - list the current directory

use crate::commands::types::{CommandError, SessionState};
use crate::fs::{find_node, format_size, FsNode};

/// List the current directory's children sorted by name. Directories are
/// marked `[D]` with a trailing slash and report a size of `0 B`.
pub fn handle_ls(state: &SessionState) -> Result<String, CommandError> {
    let children = find_node(&state.current_path, &state.tree)
        .and_then(FsNode::children)
        .ok_or_else(|| {
            CommandError::NotFound(format!(
                "ls: cannot access '{}': No such file or directory",
                state.current_path
            ))
        })?;

    let mut sorted: Vec<&FsNode> = children.iter().collect();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));

    let lines: Vec<String> = sorted
        .iter()
        .map(|child| {
            let label = if child.is_directory() {
                format!("[D] {}/", child.name())
            } else {
                format!("[F] {}", child.name())
            };
            format!("{:<24} {}", label, format_size(child.size()))
        })
        .collect();
    Ok(lines.join("\n"))
}
