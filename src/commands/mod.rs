//! CLI commands for git-postal
//!
//! - **publish**: the main workflow (tag a revision, optionally mail it),
//!   including the `--edit` draft-only mode
//! - **setup**: one-time `git postal` alias installation

pub mod publish;
pub mod setup;

pub use publish::run_publish;
pub use setup::run_setup;
