mod commands;
mod core;

use crate::commands::publish::PublishOptions;
use crate::core::error::{PostalError, print_error};
use crate::core::vcs::Git;
use clap::Parser;

/// Prepare, version, and email patch series from git history
///
/// Each run tags the current commit as `<topic>-v<N>` with a cover message
/// stored in the tag annotation, then optionally mails the series with
/// `git send-email`.
#[derive(Parser)]
#[command(name = "git-postal")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Topic name (default: current branch)
  #[arg(short, long)]
  topic: Option<String>,

  /// Exclusive lower bound of the series (default: branch or global config, then master)
  #[arg(short, long)]
  base: Option<String>,

  /// Revision number to publish (default: next unused for the topic)
  #[arg(short, long)]
  number: Option<u32>,

  /// Email recipient (repeatable)
  #[arg(long, value_name = "ADDRESS")]
  to: Vec<String>,

  /// Email Cc recipient (repeatable)
  #[arg(long, value_name = "ADDRESS")]
  cc: Vec<String>,

  /// Subject prefix for the series
  #[arg(long, default_value = "PATCH")]
  prefix: String,

  /// Add Signed-off-by to each patch
  #[arg(short, long)]
  signoff: bool,

  /// Edit the staging cover message only (no version tag, no email)
  #[arg(short, long)]
  edit: bool,

  /// Force a cover letter even for a single-patch series
  #[arg(short, long)]
  message: bool,

  /// Skip the cover letter
  #[arg(long)]
  no_message: bool,

  /// Review each mail in the editor before sending
  #[arg(long)]
  annotate: bool,

  /// Install the `git postal` alias and exit
  #[arg(long)]
  setup: bool,

  /// Echo git commands as they run
  #[arg(short, long)]
  verbose: bool,
}

fn main() {
  let cli = Cli::parse();

  let cwd = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => {
      eprintln!("Error: Failed to get current directory: {}", e);
      std::process::exit(1);
    }
  };

  let git = match Git::open(&cwd, cli.verbose) {
    Ok(git) => git,
    Err(err) => handle_error(err),
  };

  let result = if cli.setup {
    commands::run_setup(&git)
  } else {
    let message = match (cli.message, cli.no_message) {
      (true, true) => handle_error(PostalError::usage(
        "--message and --no-message are mutually exclusive",
      )),
      (true, false) => Some(true),
      (false, true) => Some(false),
      (false, false) => None,
    };

    commands::run_publish(
      &git,
      PublishOptions {
        topic: cli.topic,
        base: cli.base,
        number: cli.number,
        to: cli.to,
        cc: cli.cc,
        prefix: cli.prefix,
        signoff: cli.signoff,
        edit: cli.edit,
        message,
        annotate: cli.annotate,
      },
    )
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: PostalError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code());
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}
