#![forbid(unsafe_code)]
//! Medeco Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use medeco::commands::{
    execute_questions, execute_report, execute_run, QuestionsOptions, ReportOptions, RunOptions,
};
use medeco::Config;

#[derive(Parser)]
#[command(name = "medeco")]
#[command(about = "Decision support: does your study need a medico-economic component?")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = ".medeco.json")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the 15-question screening interactively
    Run {
        /// Report output path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the report without asking
        #[arg(long)]
        save: bool,
    },

    /// List the questionnaire catalog
    Questions {
        /// Output as JSON (default: human-readable)
        #[arg(long)]
        json: bool,
    },

    /// Generate a report from a saved answers file
    Report {
        /// Answers file, a JSON map like {"q1": "yes", "q2": "no", ...}
        answers: PathBuf,

        /// Report output path (stdout if not given)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Run { output, save } => {
            let options = RunOptions { output, save };
            execute_run(options, config)?;
        }

        Commands::Questions { json } => {
            let options = QuestionsOptions { json };
            execute_questions(options)?;
        }

        Commands::Report { answers, output } => {
            let options = ReportOptions { answers, output };
            execute_report(options, config)?;
        }
    }

    Ok(())
}
