//! Terminal Session
//!
//! One persistent interactive session: an ordered history log, the mutable
//! filesystem state, and the asynchronous `find` round-trip. Exactly one
//! history entry is appended per submitted line; `find`'s entry is patched
//! in place once the server search settles, keeping its log position.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

use crate::commands::{dispatch, CommandAction, SessionState};
use crate::search::{SearchBackend, SearchError, SearchRequest};

pub const WELCOME_MESSAGE: &str =
    "Welcome to Linux Console Explorer! Type 'help' to see available commands.";
const SEARCHING_MESSAGE: &str = "Searching on server with AI-enhanced query...";
const SEARCH_FAILED_MESSAGE: &str = "Failed to execute AI search flow.";

/// One line of the session log. `command` is absent for the welcome entry;
/// `path` is the working directory at invocation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    pub path: String,
    pub output: String,
}

/// History change notifications for observers rendering the log live.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    Appended(HistoryEntry),
    Updated(HistoryEntry),
    Cleared,
}

/// Construction options for [`Terminal`].
pub struct TerminalOptions {
    /// Backend for the `find` command. Without one, `find` reports a
    /// search failure and everything else works normally.
    pub search: Option<Arc<dyn SearchBackend>>,
    /// Real directory subtree `find` scans.
    pub search_scope: String,
    /// Optional channel for live history notifications.
    pub events: Option<UnboundedSender<SessionEvent>>,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        TerminalOptions {
            search: None,
            search_scope: ".".to_string(),
            events: None,
        }
    }
}

pub struct Terminal {
    state: SessionState,
    history: Vec<HistoryEntry>,
    is_exited: bool,
    search: Option<Arc<dyn SearchBackend>>,
    search_scope: String,
    events: Option<UnboundedSender<SessionEvent>>,
}

impl Terminal {
    pub fn new(options: TerminalOptions) -> Self {
        Terminal {
            state: SessionState::new(),
            history: vec![HistoryEntry {
                id: 0,
                command: None,
                path: "~".to_string(),
                output: WELCOME_MESSAGE.to_string(),
            }],
            is_exited: false,
            search: options.search,
            search_scope: options.search_scope,
            events: options.events,
        }
    }

    /// Execute one submitted line. After `exit`, further input is ignored.
    pub async fn execute(&mut self, line: &str) {
        if self.is_exited {
            return;
        }

        let entry = HistoryEntry {
            id: self.history.len() as u64,
            command: Some(line.to_string()),
            path: self.state.current_path.clone(),
            output: String::new(),
        };
        self.history.push(entry.clone());
        self.emit(SessionEvent::Appended(entry));
        let slot = self.history.len() - 1;

        let mut tokens = line.split_whitespace();
        let verb = tokens.next().unwrap_or("");
        let args: Vec<&str> = tokens.collect();

        match dispatch(&mut self.state, verb, &args) {
            CommandAction::Output(output) => self.patch_entry(slot, output),
            CommandAction::ClearHistory => {
                self.history.clear();
                self.emit(SessionEvent::Cleared);
            }
            CommandAction::Exit => {
                self.is_exited = true;
                self.patch_entry(slot, "Goodbye!".to_string());
            }
            CommandAction::Search { query } => {
                self.patch_entry(slot, SEARCHING_MESSAGE.to_string());
                let output = self.run_search(query).await;
                self.patch_entry(slot, output);
            }
        }
    }

    async fn run_search(&self, query: String) -> String {
        let backend = match self.search.as_ref() {
            Some(backend) => backend,
            None => return format!("Error during search: {}", SearchError::Unavailable),
        };
        let request = SearchRequest {
            query,
            scope: self.search_scope.clone(),
        };
        match backend.search(request).await {
            Ok(paths) if paths.is_empty() => "No matching files found on server.".to_string(),
            Ok(paths) => {
                let mut lines = vec![format!("Found {} matching file(s) on server:", paths.len())];
                lines.extend(paths);
                lines.join("\n")
            }
            Err(SearchError::Unavailable) => {
                format!("Error during search: {}", SearchError::Unavailable)
            }
            // Collaborator internals stay server-side; the session shows a
            // generic failure line.
            Err(_) => format!("Error during search: {}", SEARCH_FAILED_MESSAGE),
        }
    }

    fn patch_entry(&mut self, slot: usize, output: String) {
        self.history[slot].output = output;
        self.emit(SessionEvent::Updated(self.history[slot].clone()));
    }

    fn emit(&self, event: SessionEvent) {
        if let Some(events) = &self.events {
            let _ = events.send(event);
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn current_path(&self) -> &str {
        &self.state.current_path
    }

    pub fn is_exited(&self) -> bool {
        self.is_exited
    }

    /// Tree mutation counter; observers compare it to detect changes.
    pub fn revision(&self) -> u64 {
        self.state.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::mpsc::unbounded_channel;

    struct FixedBackend {
        paths: Vec<String>,
    }

    #[async_trait]
    impl SearchBackend for FixedBackend {
        async fn search(&self, _request: SearchRequest) -> Result<Vec<String>, SearchError> {
            Ok(self.paths.clone())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl SearchBackend for FailingBackend {
        async fn search(&self, _request: SearchRequest) -> Result<Vec<String>, SearchError> {
            Err(SearchError::Scan("disk on fire".to_string()))
        }
    }

    #[tokio::test]
    async fn test_welcome_entry() {
        let term = Terminal::new(TerminalOptions::default());
        assert_eq!(term.history().len(), 1);
        assert_eq!(term.history()[0].output, WELCOME_MESSAGE);
        assert_eq!(term.history()[0].command, None);
    }

    #[tokio::test]
    async fn test_entries_record_path_at_invocation() {
        let mut term = Terminal::new(TerminalOptions::default());
        term.execute("cd Documents").await;
        term.execute("pwd").await;
        assert_eq!(term.history()[1].path, "~");
        assert_eq!(term.history()[2].path, "~/Documents");
        assert_eq!(term.history()[2].output, "~/Documents");
    }

    #[tokio::test]
    async fn test_mkdir_cd_pwd_scenario() {
        let mut term = Terminal::new(TerminalOptions::default());
        term.execute("mkdir projects").await;
        term.execute("cd projects").await;
        term.execute("pwd").await;
        assert_eq!(term.history().last().unwrap().output, "~/projects");
        assert_eq!(term.revision(), 1);
    }

    #[tokio::test]
    async fn test_clear_empties_history() {
        let mut term = Terminal::new(TerminalOptions::default());
        term.execute("pwd").await;
        term.execute("clear").await;
        assert!(term.history().is_empty());
        // Entry ids restart from the emptied log.
        term.execute("pwd").await;
        assert_eq!(term.history()[0].id, 0);
    }

    #[tokio::test]
    async fn test_exit_rejects_further_input() {
        let mut term = Terminal::new(TerminalOptions::default());
        term.execute("exit").await;
        assert!(term.is_exited());
        assert_eq!(term.history().last().unwrap().output, "Goodbye!");
        let len = term.history().len();
        term.execute("pwd").await;
        assert_eq!(term.history().len(), len);
    }

    #[tokio::test]
    async fn test_find_without_backend() {
        let mut term = Terminal::new(TerminalOptions::default());
        term.execute("find report").await;
        assert_eq!(
            term.history().last().unwrap().output,
            "Error during search: search backend not configured"
        );
    }

    #[tokio::test]
    async fn test_find_patches_entry_in_place() {
        let (tx, mut rx) = unbounded_channel();
        let mut term = Terminal::new(TerminalOptions {
            search: Some(Arc::new(FixedBackend {
                paths: vec!["./a/report.txt".to_string(), "./b/report.md".to_string()],
            })),
            search_scope: ".".to_string(),
            events: Some(tx),
        });
        term.execute("find report").await;

        assert!(matches!(rx.try_recv(), Ok(SessionEvent::Appended(_))));
        match rx.try_recv() {
            Ok(SessionEvent::Updated(entry)) => {
                assert_eq!(entry.output, "Searching on server with AI-enhanced query...");
                assert_eq!(entry.id, 1);
            }
            other => panic!("expected interim update, got {:?}", other),
        }
        match rx.try_recv() {
            Ok(SessionEvent::Updated(entry)) => {
                assert_eq!(entry.id, 1);
                assert_eq!(
                    entry.output,
                    "Found 2 matching file(s) on server:\n./a/report.txt\n./b/report.md"
                );
            }
            other => panic!("expected final update, got {:?}", other),
        }
        assert_eq!(term.history().len(), 2);
    }

    #[tokio::test]
    async fn test_find_no_matches() {
        let mut term = Terminal::new(TerminalOptions {
            search: Some(Arc::new(FixedBackend { paths: Vec::new() })),
            ..Default::default()
        });
        term.execute("find ghost").await;
        assert_eq!(
            term.history().last().unwrap().output,
            "No matching files found on server."
        );
    }

    #[tokio::test]
    async fn test_find_failure_is_generic() {
        let mut term = Terminal::new(TerminalOptions {
            search: Some(Arc::new(FailingBackend)),
            ..Default::default()
        });
        term.execute("find report").await;
        assert_eq!(
            term.history().last().unwrap().output,
            "Error during search: Failed to execute AI search flow."
        );
    }

    #[tokio::test]
    async fn test_find_missing_query() {
        let mut term = Terminal::new(TerminalOptions::default());
        term.execute("find").await;
        assert_eq!(
            term.history().last().unwrap().output,
            "find: missing search query"
        );
    }

    #[tokio::test]
    async fn test_unknown_command_output() {
        let mut term = Terminal::new(TerminalOptions::default());
        term.execute("vim").await;
        assert_eq!(
            term.history().last().unwrap().output,
            "command not found: vim"
        );
    }

    #[tokio::test]
    async fn test_revision_unchanged_on_failures() {
        let mut term = Terminal::new(TerminalOptions::default());
        term.execute("mkdir Documents").await;
        term.execute("rm ghost").await;
        term.execute("chmod 999 README.md").await;
        assert_eq!(term.revision(), 0);
    }
}
