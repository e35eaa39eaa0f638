//! console-explorer - A simulated Linux console over a virtual filesystem
//!
//! This library provides a terminal session interpreting a small set of
//! Unix-like commands against an in-memory, JSON-serializable tree, plus an
//! AI-assisted search of a real directory subtree.

pub mod commands;
pub mod fs;
pub mod search;
pub mod terminal;

pub use terminal::{HistoryEntry, SessionEvent, Terminal, TerminalOptions};
