//! Git operations abstraction (system git subprocess)

pub mod system_git;
mod tag_ops;

pub use system_git::Git;
