//! Command Types
//!
//! Shared state and result types for the command handlers.

use thiserror::Error;

use crate::fs::{initial_file_system, FsNode};

/// Mutable session state the command handlers operate on.
///
/// `revision` increments on every accepted tree mutation so observers can
/// detect changes without diffing the tree.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub tree: FsNode,
    pub current_path: String,
    pub revision: u64,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState {
            tree: initial_file_system(),
            current_path: "~".to_string(),
            revision: 0,
        }
    }

    /// Record that the tree was mutated.
    pub fn mark_mutated(&mut self) {
        self.revision += 1;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Recoverable command failures. Rendered into the history entry's output
/// text; the session always continues.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    /// Missing or malformed operands.
    #[error("{0}")]
    UserInput(String),
    /// Path did not resolve to an existing node of the required kind.
    #[error("{0}")]
    NotFound(String),
    #[error("rm: cannot remove '/' or '~' directories")]
    ProtectedPath,
}

/// What the dispatcher asks the session to do with a parsed line.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandAction {
    /// Append the text as the entry's output.
    Output(String),
    /// Empty the history log.
    ClearHistory,
    /// Emit the farewell message and stop accepting input.
    Exit,
    /// Run the asynchronous server-side file search.
    Search { query: String },
}
