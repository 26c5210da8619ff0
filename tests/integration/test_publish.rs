//! Integration tests for the publish workflow

use crate::helpers::{TestRepo, run_postal, run_postal_raw};
use anyhow::Result;

#[test]
fn test_first_revision_single_commit_has_empty_annotation() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;

  run_postal(&repo.path, &[])?;

  // One commit does not trigger a cover letter
  assert_eq!(repo.tags("foo-v*")?, vec!["foo-v1"]);
  assert_eq!(repo.tag_annotation("foo-v1")?, "");

  Ok(())
}

#[test]
fn test_second_revision_reuses_published_message() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;
  repo.tag_with_message("foo-v1", "Add bar\n\nDoes the bar thing.")?;
  repo.commit("baz.txt", "Add baz")?;
  repo.commit("qux.txt", "Add qux")?;

  run_postal(&repo.path, &[])?;

  // Three commits in range, so the cover message is carried forward
  assert_eq!(repo.tags("foo-v*")?, vec!["foo-v1", "foo-v2"]);
  assert_eq!(
    repo.tag_annotation("foo-v2")?,
    "Add bar\n\nDoes the bar thing."
  );

  Ok(())
}

#[test]
fn test_staging_message_wins_over_published() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;
  repo.tag_with_message("foo-v1", "Old subject\n\nOld blurb.")?;
  repo.tag_with_message("foo-staging", "New subject\n\nNew blurb.")?;
  repo.commit("baz.txt", "Add baz")?;

  run_postal(&repo.path, &[])?;

  assert_eq!(repo.tag_annotation("foo-v2")?, "New subject\n\nNew blurb.");

  Ok(())
}

#[test]
fn test_publish_always_drops_staging_tag() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;
  repo.tag_with_message("foo-staging", "Draft subject\n\nDraft blurb.")?;

  run_postal(&repo.path, &[])?;

  assert!(repo.tags("foo-staging")?.is_empty());

  // Re-running without a staging tag also succeeds
  repo.commit("baz.txt", "Add baz")?;
  run_postal(&repo.path, &[])?;
  assert!(repo.tags("foo-staging")?.is_empty());
  assert_eq!(repo.tags("foo-v*")?, vec!["foo-v1", "foo-v2"]);

  Ok(())
}

#[test]
fn test_explicit_number_without_force_fails_on_existing_tag() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;

  run_postal(&repo.path, &["--number", "1"])?;
  let annotation_before = repo.tag_annotation("foo-v1")?;

  let output = run_postal_raw(&repo.path, &["--number", "1"])?;
  assert!(!output.status.success());

  // The existing tag is untouched
  assert_eq!(repo.tag_annotation("foo-v1")?, annotation_before);

  Ok(())
}

#[test]
fn test_message_flag_forces_cover_letter() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;

  run_postal(&repo.path, &["--message"])?;

  // No prior message anywhere, so the editor template is the placeholder
  assert_eq!(
    repo.tag_annotation("foo-v1")?,
    "*** SUBJECT HERE ***\n\n*** BLURB HERE ***"
  );

  Ok(())
}

#[test]
fn test_no_message_flag_skips_cover_letter() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;
  repo.commit("baz.txt", "Add baz")?;
  repo.commit("qux.txt", "Add qux")?;

  run_postal(&repo.path, &["--no-message"])?;

  assert_eq!(repo.tag_annotation("foo-v1")?, "");

  Ok(())
}

#[test]
fn test_message_and_no_message_conflict() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;

  let output = run_postal_raw(&repo.path, &["--message", "--no-message"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(repo.tags("foo-*")?.is_empty());

  Ok(())
}

#[test]
fn test_topic_on_trunk_is_rejected() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;
  repo.checkout("master")?;

  let output = run_postal_raw(&repo.path, &[])?;
  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("Refusing to publish from 'master'"));
  assert!(repo.tags("*")?.is_empty());

  Ok(())
}

#[test]
fn test_base_resolved_from_branch_config() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  let first = repo.commit("bar.txt", "Add bar")?;
  repo.commit("baz.txt", "Add baz")?;

  // Narrow the range to one commit; the trunk fallback would see two
  repo.set_config("branch.foo.postalbase", &first)?;
  run_postal(&repo.path, &[])?;

  assert_eq!(repo.tag_annotation("foo-v1")?, "");

  Ok(())
}

#[test]
fn test_explicit_base_overrides_config() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;
  let second = repo.commit("baz.txt", "Add baz")?;
  repo.commit("qux.txt", "Add qux")?;

  // Config would widen the range to three commits; --base narrows it to one
  repo.set_config("branch.foo.postalbase", "master")?;
  run_postal(&repo.path, &["--base", second.as_str()])?;

  assert_eq!(repo.tag_annotation("foo-v1")?, "");

  Ok(())
}

#[test]
fn test_explicit_topic_overrides_branch() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;

  run_postal(&repo.path, &["--topic", "other"])?;

  assert_eq!(repo.tags("other-v*")?, vec!["other-v1"]);
  assert!(repo.tags("foo-v*")?.is_empty());

  Ok(())
}

#[test]
fn test_foreign_tags_do_not_disturb_numbering() -> Result<()> {
  let repo = TestRepo::new("foo")?;
  repo.commit("bar.txt", "Add bar")?;
  repo.tag_with_message("foo-v1", "Add bar")?;
  repo.tag_with_message("foo-v2rc1", "not a revision")?;
  repo.tag_with_message("foobar-v9", "different topic")?;
  repo.commit("baz.txt", "Add baz")?;

  run_postal(&repo.path, &["--no-message"])?;

  assert!(repo.tags("foo-v2")?.contains(&"foo-v2".to_string()));

  Ok(())
}
