//! Search Types

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// One search invocation: the user's query and the real directory subtree
/// to scan.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub scope: String,
}

/// Failures of the search collaborator. The session renders these into a
/// single error line; the command itself never aborts the session.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search backend not configured")]
    Unavailable,
    #[error("query refinement failed: {0}")]
    Refine(String),
    #[error("scan failed: {0}")]
    Scan(String),
}

/// Callback that turns a raw request into a refined query string.
/// Parameters mirror the refinement prompt's inputs; errors carry the
/// model client's message.
pub type RefineFn = Arc<
    dyn Fn(SearchRequest) -> Pin<Box<dyn Future<Output = Result<String, String>> + Send>>
        + Send
        + Sync,
>;

/// The collaborator seam the session talks to.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Return matched disk paths in depth-first traversal order.
    async fn search(&self, request: SearchRequest) -> Result<Vec<String>, SearchError>;
}
