//! Integration tests for --setup and repository detection

use crate::helpers::{TestRepo, run_postal, run_postal_raw};
use anyhow::Result;
use std::process::Command;

#[test]
fn test_setup_installs_global_alias() -> Result<()> {
  let repo = TestRepo::new("foo")?;

  run_postal(&repo.path, &["--setup"])?;

  assert_eq!(repo.global_config("alias.postal")?, "!git-postal");

  Ok(())
}

#[test]
fn test_outside_a_repository_fails() -> Result<()> {
  let dir = tempfile::tempdir()?;

  // Guard against a git repo in an ancestor of the temp dir
  let probe = Command::new("git")
    .current_dir(dir.path())
    .args(["rev-parse", "--show-toplevel"])
    .output()?;
  if probe.status.success() {
    return Ok(());
  }

  let output = run_postal_raw(dir.path(), &[])?;
  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("Not a git repository"));

  Ok(())
}

#[test]
fn test_version_flag() -> Result<()> {
  let repo = TestRepo::new("foo")?;

  let output = run_postal(&repo.path, &["--version"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("git-postal"));

  Ok(())
}
