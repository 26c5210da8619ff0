//! Cover message storage and resolution
//!
//! Cover messages live in tag annotations: line 0 is the subject, line 1 is
//! blank by convention, the rest is the blurb. Resolution prefers a pending
//! staging message, then the latest published revision's message, then a
//! placeholder template for the editor.

use crate::core::error::PostalResult;
use crate::core::revision::{TagName, latest_number, staging_tag};
use crate::core::vcs::Git;

pub const SUBJECT_PLACEHOLDER: &str = "*** SUBJECT HERE ***";
pub const BLURB_PLACEHOLDER: &str = "*** BLURB HERE ***";

/// An editable cover message (subject line, blank separator, blurb)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverMessage {
  pub lines: Vec<String>,
}

impl CoverMessage {
  /// The template offered when a topic has no prior message
  pub fn placeholder() -> Self {
    Self {
      lines: vec![
        SUBJECT_PLACEHOLDER.to_string(),
        String::new(),
        BLURB_PLACEHOLDER.to_string(),
      ],
    }
  }

  pub fn is_empty(&self) -> bool {
    self.lines.iter().all(|line| line.trim().is_empty())
  }

  pub fn subject(&self) -> &str {
    self.lines.first().map(String::as_str).unwrap_or("")
  }

  pub fn blurb(&self) -> String {
    if self.lines.len() > 2 {
      self.lines[2..].join("\n")
    } else {
      String::new()
    }
  }
}

/// Named substitution slots for a generated cover letter
///
/// format-patch emits literal placeholder markers; these are filled from the
/// tag annotation. A blurb that itself contains a literal marker is
/// substituted too — same behavior as the original tool, left as-is.
#[derive(Debug)]
pub struct CoverTemplate {
  pub subject: String,
  pub body: String,
}

impl CoverTemplate {
  pub fn from_message(message: &CoverMessage) -> Self {
    Self {
      subject: message.subject().to_string(),
      body: message.blurb(),
    }
  }

  /// Fill the placeholder markers in a generated cover-letter file
  pub fn apply(&self, content: &str) -> String {
    content
      .replace(SUBJECT_PLACEHOLDER, &self.subject)
      .replace(BLURB_PLACEHOLDER, &self.body)
  }
}

/// Annotation of a tag as a cover message; None if the tag does not exist
pub fn tag_message(git: &Git, tag: &str) -> PostalResult<Option<CoverMessage>> {
  let Some(lines) = git.show_tag(tag)? else {
    return Ok(None);
  };
  Ok(Some(CoverMessage {
    lines: extract_annotation(&lines),
  }))
}

/// Extract the annotation from `git show <tag>` display lines
///
/// The display is a fixed 4-line header (tag name, tagger, date, blank), the
/// annotation, a blank separator, then the commit log. Collection stops at
/// the first line starting with "commit "; that boundary line and the
/// separator line collected just before it are discarded.
fn extract_annotation(lines: &[String]) -> Vec<String> {
  let mut collected = Vec::new();
  for line in lines.iter().skip(4) {
    if line.starts_with("commit ") {
      collected.pop();
      break;
    }
    collected.push(line.clone());
  }
  collected
}

/// Cover message to prime the editor with for a topic's next revision
pub fn latest_message(git: &Git, topic: &str) -> PostalResult<CoverMessage> {
  if let Some(staged) = tag_message(git, &staging_tag(topic))?
    && !staged.is_empty()
  {
    return Ok(staged);
  }

  let number = latest_number(git, topic)?;
  if let Some(published) = tag_message(git, &TagName::format(topic, number))? {
    return Ok(published);
  }

  Ok(CoverMessage::placeholder())
}
