//! One-time alias setup

use crate::core::error::PostalResult;
use crate::core::vcs::Git;

/// Install the global `postal` git alias so `git postal` works everywhere
pub fn run_setup(git: &Git) -> PostalResult<()> {
  git.config_set_global("alias.postal", "!git-postal")?;
  println!("✅ Installed git alias: git postal");
  Ok(())
}
