//! Server-Side File Search
//!
//! The `find` command's collaborator: a query-refinement step against a
//! generative model followed by a recursive scan of a real directory
//! subtree. The model call is an injected callback so embedders can wire
//! any client; an offline refiner keeps the feature usable without one.

pub mod flow;
pub mod types;

pub use flow::{offline_refine_fn, refine_prompt, IntelligentFileSearch};
pub use types::{RefineFn, SearchBackend, SearchError, SearchRequest};
