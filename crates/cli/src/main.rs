// gridfill CLI - drive the fill engine and watcher against page snapshots

mod error;
mod fill;
mod record;
mod timeline;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gridfill")]
#[command(about = "Copy spreadsheet rows into web-form snapshots")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a page snapshot from a record CSV and a mapping profile
    #[command(after_help = "\
Examples:
  gridfill fill --page page.json --record row.csv --profile crm.toml
  gridfill fill --page page.json --record row.csv --profile crm.toml \\
      --timeline postback.json --pretty")]
    Fill {
        /// Page snapshot (JSON)
        #[arg(long)]
        page: PathBuf,

        /// Record CSV: header row plus one data row
        #[arg(long)]
        record: PathBuf,

        /// Mapping profile (TOML)
        #[arg(long)]
        profile: PathBuf,

        /// Scripted mutation timeline (JSON), replayed after the fill
        #[arg(long)]
        timeline: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List the form controls a page snapshot exposes
    Targets {
        /// Page snapshot (JSON)
        #[arg(long)]
        page: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fill { page, record, profile, timeline, pretty } => {
            fill::cmd_fill(&page, &record, &profile, timeline.as_deref(), pretty)
        }
        Commands::Targets { page } => fill::cmd_targets(&page),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.code())
        }
    }
}
