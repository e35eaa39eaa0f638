//! touch - create an empty file

use crate::commands::types::{CommandError, SessionState};
use crate::fs::{find_node_mut, resolve_path, split_parent_and_name, FsNode};

/// Create an empty file at the resolved path. An existing name is left
/// untouched; a real touch would bump the timestamp, which this tree does
/// not model.
pub fn handle_touch(state: &mut SessionState, args: &[&str]) -> Result<String, CommandError> {
    let operand = args
        .first()
        .copied()
        .ok_or_else(|| CommandError::UserInput("touch: missing file operand".to_string()))?;

    let new_path = resolve_path(&state.current_path, operand);
    let (parent_path, name) = split_parent_and_name(&new_path);

    if let Some(children) = find_node_mut(&parent_path, &mut state.tree).and_then(FsNode::children_mut)
    {
        if children.iter().all(|c| c.name() != name) {
            children.push(FsNode::file(&name, "", 0, "644"));
            state.mark_mutated();
        }
    }
    Ok(String::new())
}
