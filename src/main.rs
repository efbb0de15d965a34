use {
  all::All,
  analysis::Analysis,
  analyze::Analyze,
  anyhow::{Context, anyhow},
  arguments::Arguments,
  batch::Batch,
  clap::Parser,
  client::Client,
  column_kind::ColumnKind,
  comment_collector::CommentCollector,
  comments::Comments,
  crossterm::style::Stylize,
  histogram::Histogram,
  item::Item,
  serde::{Deserialize, Serialize},
  serde_json::{Map, Number, Value},
  std::{
    backtrace::BacktraceStatus,
    collections::HashSet,
    fmt::Display,
    fs,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process,
    time::Duration,
  },
  stories::Stories,
  story_collector::StoryCollector,
  subcommand::Subcommand,
  summary::Summary,
  table::Table,
  tokio::time::sleep,
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
};

mod all;
mod analysis;
mod analyze;
mod arguments;
mod batch;
mod client;
mod column_kind;
mod comment_collector;
mod comments;
mod histogram;
mod item;
mod plot;
mod stories;
mod story_collector;
mod subcommand;
mod summary;
mod table;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging() {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

async fn run() -> Result {
  initialize_logging();

  Arguments::parse().run().await
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
