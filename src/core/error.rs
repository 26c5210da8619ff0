//! Error types for git-postal
//!
//! Every error carries enough context to print a useful message. The top
//! level maps errors to a process exit code: usage conflicts exit 1, a failed
//! git subprocess propagates its own exit code.

use std::fmt;
use std::path::PathBuf;

pub type PostalResult<T> = Result<T, PostalError>;

/// Errors from git subprocess invocations
#[derive(Debug)]
pub enum GitError {
  /// The working directory is not inside a git repository
  RepoNotFound { path: PathBuf },

  /// A git command exited nonzero
  CommandFailed {
    command: String,
    stderr: String,
    code: Option<i32>,
  },

  /// HEAD is detached, so there is no branch to derive a topic from
  NoCurrentBranch,
}

#[derive(Debug)]
pub enum PostalError {
  Git(GitError),

  /// Incompatible options or a rejected topic; no side effects happened
  Usage(String),

  /// Anything else, with an optional help hint for the user
  Message { message: String, help: Option<String> },
}

impl PostalError {
  pub fn message(msg: impl Into<String>) -> Self {
    PostalError::Message {
      message: msg.into(),
      help: None,
    }
  }

  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    PostalError::Message {
      message: msg.into(),
      help: Some(help.into()),
    }
  }

  pub fn usage(msg: impl Into<String>) -> Self {
    PostalError::Usage(msg.into())
  }

  /// Process exit code for this error
  ///
  /// A failed git command keeps its own exit code; everything else is 1.
  pub fn exit_code(&self) -> i32 {
    match self {
      PostalError::Git(GitError::CommandFailed { code: Some(code), .. }) if *code != 0 => *code,
      _ => 1,
    }
  }

  fn help(&self) -> Option<&str> {
    match self {
      PostalError::Usage(_) => Some("Run 'git-postal --help' for usage"),
      PostalError::Message { help, .. } => help.as_deref(),
      PostalError::Git(_) => None,
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::RepoNotFound { path } => {
        write!(f, "Not a git repository: {}", path.display())
      }
      GitError::CommandFailed { command, stderr, .. } => {
        if stderr.is_empty() {
          write!(f, "Command failed: {}", command)
        } else {
          write!(f, "Command failed: {}\n{}", command, stderr)
        }
      }
      GitError::NoCurrentBranch => {
        write!(f, "No current branch (detached HEAD?)")
      }
    }
  }
}

impl fmt::Display for PostalError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PostalError::Git(err) => err.fmt(f),
      PostalError::Usage(message) => f.write_str(message),
      PostalError::Message { message, .. } => f.write_str(message),
    }
  }
}

impl std::error::Error for PostalError {}

/// Print an error the way the CLI reports it, with an optional help hint
pub fn print_error(err: &PostalError) {
  eprintln!("❌ {}", err);
  if let Some(help) = err.help() {
    eprintln!("💡 {}", help);
  }
}

/// Attach context to fallible calls into std (io, subprocess spawning)
pub trait ResultExt<T> {
  fn context(self, msg: &str) -> PostalResult<T>;
  fn with_context<F>(self, f: F) -> PostalResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E: fmt::Display> ResultExt<T> for Result<T, E> {
  fn context(self, msg: &str) -> PostalResult<T> {
    self.map_err(|e| PostalError::message(format!("{}: {}", msg, e)))
  }

  fn with_context<F>(self, f: F) -> PostalResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| PostalError::message(format!("{}: {}", f(), e)))
  }
}
