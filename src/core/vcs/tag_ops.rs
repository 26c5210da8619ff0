//! Tag, range, and mail operations for Git

use super::system_git::Git;
use crate::core::error::PostalResult;
use std::path::{Path, PathBuf};

impl Git {
  /// List tags matching a glob pattern
  pub fn list_tags(&self, pattern: &str) -> PostalResult<Vec<String>> {
    self.run_lines(&["tag", "-l", pattern])
  }

  /// Check whether a tag exists
  pub fn tag_exists(&self, name: &str) -> PostalResult<bool> {
    let spec = format!("refs/tags/{}", name);
    let result = self.run_lines_opt(&["rev-parse", "--verify", "--quiet", &spec])?;
    Ok(result.is_some())
  }

  /// Show a tag; None if the tag does not exist
  ///
  /// Returns the raw `git show` display lines. Annotation extraction lives in
  /// `core::message`, which knows the display format.
  pub fn show_tag(&self, name: &str) -> PostalResult<Option<Vec<String>>> {
    self.run_lines_opt(&["show", name])
  }

  /// Create an annotated tag on HEAD
  ///
  /// `message_file` of None means an empty annotation. Without `force`, an
  /// existing name fails with the underlying git error.
  pub fn create_tag(&self, name: &str, message_file: Option<&Path>, force: bool) -> PostalResult<()> {
    let mut args: Vec<String> = vec!["tag".to_string(), "-a".to_string()];
    if force {
      args.push("-f".to_string());
    }
    match message_file {
      Some(file) => {
        args.push("-F".to_string());
        args.push(file.display().to_string());
      }
      None => {
        args.push("-m".to_string());
        args.push(String::new());
      }
    }
    args.push(name.to_string());

    self.run_lines(&args)?;
    Ok(())
  }

  /// Delete a tag; a missing tag is not an error
  pub fn delete_tag(&self, name: &str) -> PostalResult<()> {
    self.run_lines_opt(&["tag", "-d", name])?;
    Ok(())
  }

  /// Commits in `<base>..HEAD`, newest first
  pub fn commits_in_range(&self, base: &str) -> PostalResult<Vec<String>> {
    let range = format!("{}..", base);
    self.run_lines(&["rev-list", &range])
  }

  /// Format `<base>..HEAD` as patch files into `out_dir`
  ///
  /// Returns the generated file paths (format-patch prints one per line).
  pub fn format_patch(
    &self,
    base: &str,
    out_dir: &Path,
    prefix: &str,
    cover_letter: bool,
    numbered: bool,
    signoff: bool,
  ) -> PostalResult<Vec<PathBuf>> {
    let mut args: Vec<String> = vec![
      "format-patch".to_string(),
      format!("--subject-prefix={}", prefix),
      "-o".to_string(),
      out_dir.display().to_string(),
    ];
    if cover_letter {
      args.push("--cover-letter".to_string());
    }
    if numbered {
      args.push("--numbered".to_string());
    }
    if signoff {
      args.push("--signoff".to_string());
    }
    args.push(format!("{}..", base));

    let lines = self.run_lines(&args)?;
    Ok(lines.into_iter().map(PathBuf::from).collect())
  }

  /// Send patch files with git send-email (interactive)
  pub fn send_email(
    &self,
    files: &[PathBuf],
    to: &[String],
    cc: &[String],
    annotate: bool,
  ) -> PostalResult<()> {
    let mut args: Vec<String> = vec!["send-email".to_string()];
    for addr in to {
      args.push(format!("--to={}", addr));
    }
    for addr in cc {
      args.push(format!("--cc={}", addr));
    }
    if annotate {
      args.push("--annotate".to_string());
    }
    for file in files {
      args.push(file.display().to_string());
    }

    self.run_interactive(&args)
  }

  /// Read a config value; None if the key is unset
  pub fn config_get(&self, key: &str) -> PostalResult<Option<String>> {
    let lines = self.run_lines_opt(&["config", "--get", key])?;
    Ok(lines.and_then(|lines| lines.into_iter().next()))
  }

  /// Set a key in the user's global config
  pub fn config_set_global(&self, key: &str, value: &str) -> PostalResult<()> {
    self.run_lines(&["config", "--global", key, value])?;
    Ok(())
  }
}
