//! Integration tests for git-postal
//!
//! Each test builds a throwaway git repository and drives the compiled
//! binary with a no-op editor, so runs are fully non-interactive.

mod test_publish;
mod test_setup;
mod test_stage;
