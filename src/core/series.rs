//! Patch formatting and mail sending
//!
//! Formats the publish range into a scoped temp directory, fills the
//! cover-letter placeholders from the revision tag's annotation, and hands
//! the files to git send-email. The temp directory is removed on every exit
//! path, send failures included.

use crate::core::error::{PostalResult, ResultExt};
use crate::core::message::{CoverMessage, CoverTemplate, tag_message};
use crate::core::revision::TagName;
use crate::core::vcs::Git;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Recipients and formatting options for one send
#[derive(Debug)]
pub struct SendOptions {
  pub to: Vec<String>,
  pub cc: Vec<String>,
  pub topic: String,
  pub prefix: String,
  pub number: u32,
  pub base: String,
  pub annotate: bool,
  pub signoff: bool,
}

/// Subject prefix for a revision ("PATCH" for v1, "PATCH v2" onward)
pub fn subject_prefix(prefix: &str, number: u32) -> String {
  if number > 1 {
    format!("{} v{}", prefix, number)
  } else {
    prefix.to_string()
  }
}

/// Format `base..` as a patch series and mail it
pub fn send_series(git: &Git, opts: &SendOptions) -> PostalResult<()> {
  let numbered = git.commits_in_range(&opts.base)?.len() > 1;

  // Empty annotation means the revision was published without a cover letter
  let cover = tag_message(git, &TagName::format(&opts.topic, opts.number))?
    .filter(|message| !message.is_empty());

  let out_dir = TempDir::new().context("Failed to create patch output directory")?;
  let prefix = subject_prefix(&opts.prefix, opts.number);
  let files = git.format_patch(
    &opts.base,
    out_dir.path(),
    &prefix,
    cover.is_some(),
    numbered,
    opts.signoff,
  )?;

  if let Some(message) = &cover {
    fill_cover_letter(&files, message)?;
  }

  git.send_email(&files, &opts.to, &opts.cc, opts.annotate)
  // out_dir dropped here, removing the generated patches
}

/// Substitute the placeholder markers in the generated cover-letter file
fn fill_cover_letter(files: &[PathBuf], message: &CoverMessage) -> PostalResult<()> {
  let Some(cover_path) = files.iter().find(|file| {
    file
      .file_name()
      .and_then(|name| name.to_str())
      .is_some_and(|name| name.contains("cover-letter"))
  }) else {
    return Ok(());
  };

  let template = CoverTemplate::from_message(message);
  let content = fs::read_to_string(cover_path)
    .with_context(|| format!("Failed to read cover letter {}", cover_path.display()))?;
  fs::write(cover_path, template.apply(&content))
    .with_context(|| format!("Failed to write cover letter {}", cover_path.display()))?;

  Ok(())
}
