//! rm - remove a file or directory

use crate::commands::types::{CommandError, SessionState};
use crate::fs::{find_node_mut, resolve_path, split_parent_and_name, FsNode};

/// Remove the named child from its parent. The root and home directories
/// are protected.
pub fn handle_rm(state: &mut SessionState, args: &[&str]) -> Result<String, CommandError> {
    let operand = args
        .first()
        .copied()
        .ok_or_else(|| CommandError::UserInput("rm: missing operand".to_string()))?;

    let target_path = resolve_path(&state.current_path, operand);
    if target_path == "/" || target_path == "~" {
        return Err(CommandError::ProtectedPath);
    }

    let (parent_path, name) = split_parent_and_name(&target_path);
    let removed = find_node_mut(&parent_path, &mut state.tree)
        .and_then(FsNode::children_mut)
        .map(|children| {
            if let Some(idx) = children.iter().position(|c| c.name() == name) {
                children.remove(idx);
                true
            } else {
                false
            }
        })
        .unwrap_or(false);

    if removed {
        state.mark_mutated();
        Ok(String::new())
    } else {
        Err(CommandError::NotFound(format!(
            "rm: cannot remove '{}': No such file or directory",
            operand
        )))
    }
}
