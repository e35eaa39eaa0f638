//! find - server-side file search

use crate::commands::types::CommandAction;

/// Parse the find invocation. The actual search is asynchronous and runs
/// in the session, which owns the search backend.
pub fn handle_find(args: &[&str]) -> CommandAction {
    if args.is_empty() {
        CommandAction::Output("find: missing search query".to_string())
    } else {
        CommandAction::Search {
            query: args.join(" "),
        }
    }
}
