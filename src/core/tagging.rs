//! Tag creation with an interactive editor pass

use crate::core::error::{PostalError, PostalResult, ResultExt};
use crate::core::message::CoverMessage;
use crate::core::vcs::Git;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;

const DEFAULT_EDITOR: &str = "vi";

/// Create (or force-replace) a tag on HEAD
///
/// With `annotate`, the template is written to a temp file, the user's editor
/// runs on it, and the edited content becomes the tag annotation. The temp
/// file is removed on every exit path, editor failures included (RAII).
pub fn tag(git: &Git, name: &str, template: &CoverMessage, annotate: bool, force: bool) -> PostalResult<()> {
  if !annotate {
    return git.create_tag(name, None, force);
  }

  let mut file = NamedTempFile::new().context("Failed to create temp file for tag message")?;
  for line in &template.lines {
    writeln!(file, "{}", line).context("Failed to write tag message template")?;
  }
  writeln!(file).context("Failed to write tag message template")?;
  file.flush().context("Failed to flush tag message template")?;

  edit_file(file.path())?;
  git.create_tag(name, Some(file.path()), force)
}

/// Run the user's editor on a file ($VISUAL, else $EDITOR, else vi)
fn edit_file(path: &Path) -> PostalResult<()> {
  let editor = std::env::var("VISUAL")
    .or_else(|_| std::env::var("EDITOR"))
    .unwrap_or_else(|_| DEFAULT_EDITOR.to_string());

  let status = Command::new(&editor)
    .arg(path)
    .status()
    .with_context(|| format!("Failed to launch editor '{}'", editor))?;

  if !status.success() {
    return Err(PostalError::with_help(
      format!("Editor '{}' exited with {}", editor, status),
      "Set $VISUAL or $EDITOR to your preferred editor",
    ));
  }

  Ok(())
}
