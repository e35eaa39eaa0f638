//! chmod - change a node's permissions

use crate::commands::types::{CommandError, SessionState};
use crate::fs::{find_node_mut, is_valid_mode, resolve_path};

pub fn handle_chmod(state: &mut SessionState, args: &[&str]) -> Result<String, CommandError> {
    if args.len() < 2 {
        return Err(CommandError::UserInput("chmod: missing operand".to_string()));
    }
    let (mode, file_path) = (args[0], args[1]);
    if !is_valid_mode(mode) {
        return Err(CommandError::UserInput(format!(
            "chmod: invalid mode: '{}'",
            mode
        )));
    }

    let target_path = resolve_path(&state.current_path, file_path);
    match find_node_mut(&target_path, &mut state.tree) {
        Some(node) => {
            node.set_permissions(mode);
            state.mark_mutated();
            Ok(String::new())
        }
        None => Err(CommandError::NotFound(format!(
            "chmod: cannot access '{}': No such file or directory",
            file_path
        ))),
    }
}
