//! Publish command: version a topic and optionally mail the series
//!
//! Sequencing: validate the option set, resolve topic/base/revision number,
//! then either update the staging message (`--edit`) or tag the new revision,
//! drop the staging tag, and send the series when recipients were given.

use crate::core::config::{TRUNK_BRANCH, resolve_base};
use crate::core::error::{PostalError, PostalResult};
use crate::core::message::latest_message;
use crate::core::revision::{TagName, latest_number, staging_tag};
use crate::core::series::{SendOptions, send_series};
use crate::core::tagging::tag;
use crate::core::vcs::Git;

/// Options for a publish run, straight from the CLI
#[derive(Debug)]
pub struct PublishOptions {
  pub topic: Option<String>,
  pub base: Option<String>,
  pub number: Option<u32>,
  pub to: Vec<String>,
  pub cc: Vec<String>,
  pub prefix: String,
  pub signoff: bool,
  pub edit: bool,
  /// Cover message on/off; None means "decide from staging tag / range size"
  pub message: Option<bool>,
  pub annotate: bool,
}

pub fn run_publish(git: &Git, opts: PublishOptions) -> PostalResult<()> {
  check_usage(&opts)?;

  let topic = match opts.topic {
    Some(topic) => topic,
    None => git.current_branch()?,
  };
  if topic == TRUNK_BRANCH {
    return Err(PostalError::usage(format!(
      "Refusing to publish from '{}'; switch to a topic branch or pass --topic",
      TRUNK_BRANCH
    )));
  }

  let staging = staging_tag(&topic);
  let template = latest_message(git, &topic)?;

  if opts.edit {
    // Draft-only mode: force-update the staging message, touch nothing else
    tag(git, &staging, &template, true, true)?;
    println!("✏️  Updated staging message for '{}'", topic);
    return Ok(());
  }

  let base = resolve_base(git, &topic, opts.base.as_deref())?;
  let number = match opts.number {
    Some(number) => number,
    None => latest_number(git, &topic)? + 1,
  };

  let want_message = match opts.message {
    Some(explicit) => explicit,
    None => git.tag_exists(&staging)? || git.commits_in_range(&base)?.len() > 1,
  };

  let version_tag = TagName::format(&topic, number);
  tag(git, &version_tag, &template, want_message, false)?;
  println!("🏷️  Tagged {}", version_tag);

  // Publishing consumes the draft, whether or not one existed
  git.delete_tag(&staging)?;

  if !opts.to.is_empty() {
    send_series(
      git,
      &SendOptions {
        to: opts.to,
        cc: opts.cc,
        topic,
        prefix: opts.prefix,
        number,
        base,
        annotate: opts.annotate,
        signoff: opts.signoff,
      },
    )?;
    println!("📧 Sent {}", version_tag);
  }

  Ok(())
}

/// Reject incompatible option combinations before any side effect
fn check_usage(opts: &PublishOptions) -> PostalResult<()> {
  if opts.edit {
    if !opts.to.is_empty() || !opts.cc.is_empty() {
      return Err(PostalError::usage(
        "--edit only updates the staging message and cannot be combined with --to/--cc",
      ));
    }
    if opts.number.is_some() {
      return Err(PostalError::usage(
        "--edit only updates the staging message and cannot be combined with --number",
      ));
    }
    if opts.annotate {
      return Err(PostalError::usage(
        "--edit only updates the staging message and cannot be combined with --annotate",
      ));
    }
  }
  Ok(())
}
