//! Core engine for git-postal operations
//!
//! This module contains the fundamental building blocks for all git-postal
//! functionality:
//!
//! - **config**: base-branch resolution from git config keys
//! - **error**: error types with exit-code mapping and help hints
//! - **message**: cover message model, tag annotation parsing, templates
//! - **revision**: `<topic>-v<N>` tag name parsing and revision numbering
//! - **series**: patch formatting, cover-letter substitution, mail sending
//! - **tagging**: tag creation with an interactive editor pass
//! - **vcs**: git operations abstraction (system git subprocess)

pub mod config;
pub mod error;
pub mod message;
pub mod revision;
pub mod series;
pub mod tagging;
pub mod vcs;
