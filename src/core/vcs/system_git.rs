//! System git backend - zero dependencies
//!
//! All repository access goes through the system `git` binary:
//! - Line-oriented stdout parsing (trailing newline stripped)
//! - Safe subprocess execution (isolated environment)
//! - Verbosity threaded in at construction, no global debug flag

use crate::core::error::{GitError, PostalError, PostalResult, ResultExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend using system git (zero crate dependencies)
pub struct Git {
  /// Repository working directory
  repo_path: PathBuf,

  /// Echo every git invocation to stderr before running it
  verbose: bool,
}

impl Git {
  /// Open a git repository
  ///
  /// This performs ONE subprocess call to confirm the repository exists.
  pub fn open(path: &Path, verbose: bool) -> PostalResult<Self> {
    let output = Command::new("git")
      .arg("-C")
      .arg(path)
      .args(["rev-parse", "--show-toplevel"])
      .output()
      .context("Failed to execute git rev-parse")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      if stderr.contains("not a git repository") {
        return Err(PostalError::Git(GitError::RepoNotFound {
          path: path.to_path_buf(),
        }));
      }
      return Err(PostalError::message(format!(
        "Failed to open git repository: {}",
        stderr.trim_end()
      )));
    }

    Ok(Self {
      repo_path: path.to_path_buf(),
      verbose,
    })
  }

  /// Get current branch name
  ///
  /// Detached HEAD is an error here: a topic needs a branch to default from.
  pub fn current_branch(&self) -> PostalResult<String> {
    let lines = self.run_lines(&["rev-parse", "--abbrev-ref", "HEAD"])?;
    match lines.first().map(String::as_str) {
      None | Some("HEAD") => Err(PostalError::Git(GitError::NoCurrentBranch)),
      Some(branch) => Ok(branch.to_string()),
    }
  }

  /// Run a git command and return stdout as lines
  pub(crate) fn run_lines<S: AsRef<str>>(&self, args: &[S]) -> PostalResult<Vec<String>> {
    let output = self
      .git_cmd(args)
      .output()
      .with_context(|| format!("Failed to run {}", render(args)))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(PostalError::Git(GitError::CommandFailed {
        command: render(args),
        stderr: stderr.trim_end().to_string(),
        code: output.status.code(),
      }));
    }

    Ok(split_lines(&output.stdout))
  }

  /// Like `run_lines`, but a nonzero exit means "not there" (stderr discarded)
  ///
  /// Used for queries where the ref may legitimately not exist.
  pub(crate) fn run_lines_opt<S: AsRef<str>>(&self, args: &[S]) -> PostalResult<Option<Vec<String>>> {
    let output = self
      .git_cmd(args)
      .output()
      .with_context(|| format!("Failed to run {}", render(args)))?;

    if !output.status.success() {
      return Ok(None);
    }

    Ok(Some(split_lines(&output.stdout)))
  }

  /// Run a git command with inherited stdio (interactive subcommands)
  pub(crate) fn run_interactive<S: AsRef<str>>(&self, args: &[S]) -> PostalResult<()> {
    let status = self
      .git_cmd(args)
      .status()
      .with_context(|| format!("Failed to run {}", render(args)))?;

    if !status.success() {
      return Err(PostalError::Git(GitError::CommandFailed {
        command: render(args),
        stderr: String::new(),
        code: status.code(),
      }));
    }

    Ok(())
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables, whitelisting PATH and HOME plus the
  ///   interactive set (TERM, VISUAL, EDITOR) that send-email relies on
  /// - Adds safe configuration overrides
  fn git_cmd<S: AsRef<str>>(&self, args: &[S]) -> Command {
    let mut cmd = Command::new("git");

    // Set working directory
    cmd.arg("-C").arg(&self.repo_path);

    // Isolated environment (don't trust ambient git overrides)
    cmd.env_clear();
    for key in ["PATH", "HOME", "TERM", "VISUAL", "EDITOR"] {
      if let Ok(value) = std::env::var(key) {
        cmd.env(key, value);
      }
    }

    // Force safe behavior (override user config)
    cmd.arg("-c").arg("core.quotePath=false"); // Don't escape non-ASCII

    for arg in args {
      cmd.arg(arg.as_ref());
    }

    if self.verbose {
      eprintln!("→ {}", render(args));
    }

    cmd
  }
}

fn render<S: AsRef<str>>(args: &[S]) -> String {
  let mut command = String::from("git");
  for arg in args {
    command.push(' ');
    command.push_str(arg.as_ref());
  }
  command
}

fn split_lines(stdout: &[u8]) -> Vec<String> {
  String::from_utf8_lossy(stdout)
    .lines()
    .map(|line| line.to_string())
    .collect()
}
