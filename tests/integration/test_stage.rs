//! Integration tests for the --edit (staging message) mode

use crate::helpers::{TestRepo, run_postal, run_postal_raw};
use anyhow::Result;

#[test]
fn test_edit_creates_staging_with_placeholder_template() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;

  run_postal(&repo.path, &["--edit"])?;

  assert_eq!(repo.tags("foo-staging")?, vec!["foo-staging"]);
  assert_eq!(
    repo.tag_annotation("foo-staging")?,
    "*** SUBJECT HERE ***\n\n*** BLURB HERE ***"
  );
  // No version tag and no email in draft mode
  assert!(repo.tags("foo-v*")?.is_empty());

  Ok(())
}

#[test]
fn test_edit_primes_template_from_latest_revision() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;
  repo.tag_with_message("foo-v1", "Add bar\n\nDoes the bar thing.")?;

  run_postal(&repo.path, &["--edit"])?;

  assert_eq!(
    repo.tag_annotation("foo-staging")?,
    "Add bar\n\nDoes the bar thing."
  );

  Ok(())
}

#[test]
fn test_edit_force_replaces_existing_staging() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;
  repo.tag_with_message("foo-staging", "Draft subject\n\nDraft blurb.")?;

  // The no-op editor keeps the existing draft; force re-tag must not fail
  run_postal(&repo.path, &["--edit"])?;

  assert_eq!(
    repo.tag_annotation("foo-staging")?,
    "Draft subject\n\nDraft blurb."
  );

  Ok(())
}

#[test]
fn test_edit_with_to_is_rejected_without_side_effects() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;

  let output = run_postal_raw(&repo.path, &["--edit", "--to", "list@example.com"])?;
  assert_eq!(output.status.code(), Some(1));

  // No tag was created or modified
  assert!(repo.tags("*")?.is_empty());

  Ok(())
}

#[test]
fn test_edit_with_number_is_rejected() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;

  let output = run_postal_raw(&repo.path, &["--edit", "--number", "2"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(repo.tags("*")?.is_empty());

  Ok(())
}
