//! Report command
//!
//! Non-interactive report generation from an answers file: a JSON map of
//! question id to "yes" or "no", e.g. `{"q1": "yes", "q2": "no", ...}`.
//! Incomplete or unknown answers are rejected before anything is written.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use console::style;
use serde_json::Value;

use crate::config::Config;
use crate::error::MedecoError;
use crate::report::generate_report;
use crate::session::{Choice, Session};

/// Options for the report command
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Answers file to read
    pub answers: PathBuf,
    /// Report output path (stdout if not given)
    pub output: Option<PathBuf>,
}

/// Execute the report command
pub fn execute_report(options: ReportOptions, config: Config) -> Result<()> {
    let mut session = load_session(&options.answers)?;
    let recommendation = session.view_results(&config.thresholds)?;
    let report = generate_report(
        session.catalog(),
        &session,
        &recommendation,
        Local::now().date_naive(),
    );

    match &options.output {
        Some(path) => {
            std::fs::write(path, report)
                .with_context(|| format!("could not write {}", path.display()))?;
            eprintln!("{} Report written to {}", style("✓").green(), path.display());
        }
        None => print!("{report}"),
    }

    Ok(())
}

/// Build a session from an answers file. BTreeMap keeps error messages
/// deterministic when several entries are bad.
fn load_session(path: &PathBuf) -> Result<Session> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let raw: BTreeMap<String, Value> =
        serde_json::from_str(&content).context("answers file is not a JSON object")?;

    let mut session = Session::new();
    for (id, value) in raw {
        let choice = match value.as_str() {
            Some("yes") => Choice::Yes,
            Some("no") => Choice::No,
            _ => {
                return Err(MedecoError::InvalidAnswer {
                    id,
                    value: value.to_string(),
                }
                .into())
            }
        };
        session.answer(&id, choice)?;
    }

    Ok(session)
}
