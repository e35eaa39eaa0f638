//! mkdir - create a directory

use crate::commands::types::{CommandError, SessionState};
use crate::fs::{find_node_mut, resolve_path, split_parent_and_name, FsNode};

pub fn handle_mkdir(state: &mut SessionState, args: &[&str]) -> Result<String, CommandError> {
    let operand = args
        .first()
        .copied()
        .ok_or_else(|| CommandError::UserInput("mkdir: missing operand".to_string()))?;

    let new_path = resolve_path(&state.current_path, operand);
    let (parent_path, name) = split_parent_and_name(&new_path);

    match find_node_mut(&parent_path, &mut state.tree).and_then(FsNode::children_mut) {
        Some(children) if children.iter().all(|c| c.name() != name) => {
            children.push(FsNode::dir(&name, "755", Vec::new()));
            state.mark_mutated();
            Ok(String::new())
        }
        _ => Err(CommandError::UserInput(format!(
            "mkdir: cannot create directory ‘{}’: File exists or invalid path",
            operand
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::find_node;

    #[test]
    fn test_mkdir_creates_directory() {
        let mut state = SessionState::new();
        handle_mkdir(&mut state, &["projects"]).unwrap();
        let node = find_node("~/projects", &state.tree).unwrap();
        assert!(node.is_directory());
        assert_eq!(node.permissions(), "755");
        assert_eq!(node.children().unwrap().len(), 0);
        assert_eq!(state.revision, 1);
    }

    #[test]
    fn test_mkdir_nested_target() {
        let mut state = SessionState::new();
        state.current_path = "~/Documents".to_string();
        handle_mkdir(&mut state, &["drafts"]).unwrap();
        assert!(find_node("~/Documents/drafts", &state.tree).is_some());
    }

    #[test]
    fn test_mkdir_missing_operand() {
        let mut state = SessionState::new();
        let err = handle_mkdir(&mut state, &[]).unwrap_err();
        assert_eq!(err.to_string(), "mkdir: missing operand");
    }

    #[test]
    fn test_mkdir_existing_name() {
        let mut state = SessionState::new();
        let err = handle_mkdir(&mut state, &["Documents"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "mkdir: cannot create directory ‘Documents’: File exists or invalid path"
        );
        assert_eq!(state.revision, 0);
    }

    #[test]
    fn test_mkdir_invalid_parent() {
        let mut state = SessionState::new();
        let err = handle_mkdir(&mut state, &["missing/child"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "mkdir: cannot create directory ‘missing/child’: File exists or invalid path"
        );
    }

    #[test]
    fn test_mkdir_no_duplicate_names() {
        let mut state = SessionState::new();
        handle_mkdir(&mut state, &["projects"]).unwrap();
        assert!(handle_mkdir(&mut state, &["projects"]).is_err());
        let home = find_node("~", &state.tree).unwrap();
        let count = home
            .children()
            .unwrap()
            .iter()
            .filter(|c| c.name() == "projects")
            .count();
        assert_eq!(count, 1);
    }
}
