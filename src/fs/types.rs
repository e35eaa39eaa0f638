//! File System Types
//!
//! Core types for the virtual file system: a JSON-serializable tree of
//! files and directories with cosmetic Unix-style permission strings.

use serde::{Deserialize, Serialize};

/// A node in the virtual filesystem tree.
///
/// Serializes with a `"type"` tag (`"file"` / `"directory"`) so the whole
/// tree round-trips through JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FsNode {
    File {
        name: String,
        content: String,
        /// Reported size in bytes; independent of `content` length.
        size: u64,
        /// 3-digit octal string, e.g. "644". Cosmetic only.
        permissions: String,
    },
    Directory {
        name: String,
        children: Vec<FsNode>,
        permissions: String,
    },
}

impl FsNode {
    /// Shorthand constructor for a file node.
    pub fn file(name: &str, content: &str, size: u64, permissions: &str) -> Self {
        FsNode::File {
            name: name.to_string(),
            content: content.to_string(),
            size,
            permissions: permissions.to_string(),
        }
    }

    /// Shorthand constructor for a directory node.
    pub fn dir(name: &str, permissions: &str, children: Vec<FsNode>) -> Self {
        FsNode::Directory {
            name: name.to_string(),
            children,
            permissions: permissions.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FsNode::File { name, .. } => name,
            FsNode::Directory { name, .. } => name,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, FsNode::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FsNode::File { .. })
    }

    pub fn permissions(&self) -> &str {
        match self {
            FsNode::File { permissions, .. } => permissions,
            FsNode::Directory { permissions, .. } => permissions,
        }
    }

    pub fn set_permissions(&mut self, mode: &str) {
        match self {
            FsNode::File { permissions, .. } => *permissions = mode.to_string(),
            FsNode::Directory { permissions, .. } => *permissions = mode.to_string(),
        }
    }

    /// Reported size in bytes; directories report 0.
    pub fn size(&self) -> u64 {
        match self {
            FsNode::File { size, .. } => *size,
            FsNode::Directory { .. } => 0,
        }
    }

    /// Children of a directory node, or `None` for files.
    pub fn children(&self) -> Option<&[FsNode]> {
        match self {
            FsNode::Directory { children, .. } => Some(children),
            FsNode::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<FsNode>> {
        match self {
            FsNode::Directory { children, .. } => Some(children),
            FsNode::File { .. } => None,
        }
    }
}
