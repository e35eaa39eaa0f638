//! cd - change the working directory

use crate::commands::types::{CommandError, SessionState};
use crate::fs::{find_node, resolve_path};

/// Change directory. Without an operand the target is `~`. A literal `..`
/// strips the last segment of the current path directly and never fails;
/// every other target must resolve to an existing directory.
pub fn handle_cd(state: &mut SessionState, args: &[&str]) -> Result<String, CommandError> {
    let target = args.first().copied().unwrap_or("~");

    if target == ".." {
        if state.current_path != "~" && state.current_path != "/" {
            let cut = state.current_path.rfind('/').unwrap_or(0);
            let parent = &state.current_path[..cut];
            state.current_path = if parent.is_empty() {
                "~".to_string()
            } else {
                parent.to_string()
            };
        }
        return Ok(String::new());
    }

    let new_path = resolve_path(&state.current_path, target);
    match find_node(&new_path, &state.tree) {
        Some(node) if node.is_directory() => {
            state.current_path = new_path;
            Ok(String::new())
        }
        _ => Err(CommandError::NotFound(format!(
            "cd: no such file or directory: {}",
            target
        ))),
    }
}
