//! perm - show a node's permissions

use crate::commands::types::{CommandError, SessionState};
use crate::fs::{find_node, format_permissions, resolve_path};

pub fn handle_perm(state: &SessionState, args: &[&str]) -> Result<String, CommandError> {
    let operand = args
        .first()
        .copied()
        .ok_or_else(|| CommandError::UserInput("perm: missing operand".to_string()))?;

    let target_path = resolve_path(&state.current_path, operand);
    match find_node(&target_path, &state.tree) {
        Some(node) => Ok(format!(
            "{} ({}) {}",
            format_permissions(node.permissions()),
            node.permissions(),
            node.name()
        )),
        None => Err(CommandError::NotFound(format!(
            "perm: cannot access '{}': No such file or directory",
            operand
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perm_file() {
        let state = SessionState::new();
        let output = handle_perm(&state, &["README.md"]).unwrap();
        assert_eq!(output, "rw-r--r-- (644) README.md");
    }

    #[test]
    fn test_perm_directory() {
        let state = SessionState::new();
        let output = handle_perm(&state, &[".config"]).unwrap();
        assert_eq!(output, "rwx------ (700) .config");
    }

    #[test]
    fn test_perm_relative_path() {
        let mut state = SessionState::new();
        state.current_path = "~/Documents".to_string();
        let output = handle_perm(&state, &["notes.txt"]).unwrap();
        assert_eq!(output, "rw-r--r-- (644) notes.txt");
    }

    #[test]
    fn test_chmod_then_perm_reports_new_mode() {
        use crate::commands::chmod_cmd::handle_chmod;
        let mut state = SessionState::new();
        handle_chmod(&mut state, &["640", "main.cpp"]).unwrap();
        let output = handle_perm(&state, &["main.cpp"]).unwrap();
        assert_eq!(output, "rw-r----- (640) main.cpp");
    }

    #[test]
    fn test_perm_missing_operand() {
        let state = SessionState::new();
        let err = handle_perm(&state, &[]).unwrap_err();
        assert_eq!(err.to_string(), "perm: missing operand");
    }

    #[test]
    fn test_perm_not_found() {
        let state = SessionState::new();
        let err = handle_perm(&state, &["ghost"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "perm: cannot access 'ghost': No such file or directory"
        );
    }
}
