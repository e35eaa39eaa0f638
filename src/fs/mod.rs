//! Virtual File System Module
//!
//! Provides the in-memory tree the console operates on:
//! - types: the file/directory node union
//! - path: normalization of user-entered paths
//! - tree: lookup by normalized path
//! - format: size and permission rendering
//! - seed: the fixed initial tree

pub mod format;
pub mod path;
pub mod seed;
pub mod tree;
pub mod types;

pub use format::{format_permissions, format_size, is_valid_mode};
pub use path::resolve_path;
pub use seed::initial_file_system;
pub use tree::{find_node, find_node_mut, split_parent_and_name};
pub use types::FsNode;
