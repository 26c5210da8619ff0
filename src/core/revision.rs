//! Per-topic revision numbering from tag names
//!
//! Published revisions are tags of the form `<topic>-v<N>`; the pending draft
//! message lives in `<topic>-staging`. The next revision number is one past
//! the highest N found for the topic.

use crate::core::error::PostalResult;
use crate::core::vcs::Git;

/// A validated `<topic>-v<N>` tag name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagName {
  pub topic: String,
  pub number: u32,
}

impl TagName {
  /// Parse a tag of the form `<topic>-v<N>`
  ///
  /// The topic is restricted to alphanumerics plus `/ . _ -`; the number is
  /// one or more ASCII digits at end-of-string. Anything else returns None:
  /// foreign tags sharing a prefix are tolerated, not rejected.
  pub fn parse(tag: &str) -> Option<Self> {
    let (topic, digits) = tag.rsplit_once("-v")?;
    if topic.is_empty() || digits.is_empty() {
      return None;
    }
    if !topic
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-'))
    {
      return None;
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
      return None;
    }

    Some(Self {
      topic: topic.to_string(),
      number: digits.parse().ok()?,
    })
  }

  /// Render the tag name for a topic revision
  pub fn format(topic: &str, number: u32) -> String {
    format!("{}-v{}", topic, number)
  }
}

/// Name of a topic's staging tag
pub fn staging_tag(topic: &str) -> String {
  format!("{}-staging", topic)
}

/// Highest published revision for a topic (0 if none)
pub fn latest_number(git: &Git, topic: &str) -> PostalResult<u32> {
  let pattern = format!("{}-v[0-9]*", topic);
  Ok(max_revision(&git.list_tags(&pattern)?, topic))
}

fn max_revision(tags: &[String], topic: &str) -> u32 {
  let mut latest = 0;
  for tag in tags {
    if let Some(parsed) = TagName::parse(tag)
      && parsed.topic == topic
    {
      latest = latest.max(parsed.number);
    }
  }
  latest
}
