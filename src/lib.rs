//! Project Tree - an ignore-aware project tree renderer
//!
//! This crate provides functionality for:
//! - Resolving gitignore-style patterns from a project's ignore file
//! - Matching relative paths against a simplified gitignore subset
//! - Rendering a directory as an ASCII tree with box-drawing connectors

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ignore;
pub mod tree;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TreeError};
pub use ignore::IgnoreSet;
pub use tree::TreeRenderer;
