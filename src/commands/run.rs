//! Run command
//!
//! Interactive questionnaire: one yes/no prompt per question with a progress
//! bar, results once all 15 are answered, optional report export, and a
//! confirmation-gated restart.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::{Question, TOTAL_QUESTIONS};
use crate::config::Config;
use crate::report::generate_report;
use crate::scoring::Severity;
use crate::session::{Choice, Recommendation, Session};

/// Options for the run command
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Report output path (overrides the configured default)
    pub output: Option<PathBuf>,
    /// Skip the save prompt and always write the report
    pub save: bool,
}

/// Execute the run command
pub fn execute_run(options: RunOptions, config: Config) -> Result<()> {
    let mut session = Session::new();

    println!(
        "{} Does your study need a medico-economic component?",
        style("→").cyan()
    );
    println!(
        "  {} questions, about 5 minutes.\n",
        session.catalog().total_questions()
    );

    loop {
        ask_all_questions(&mut session)?;

        let recommendation = session.view_results(&config.thresholds)?;
        print_results(&recommendation);

        maybe_save_report(&session, &recommendation, &options, &config)?;

        let restart = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Start a new assessment?")
            .default(false)
            .interact()?;
        if !restart {
            break;
        }

        // Destructive action gate: the reset only happens if the user
        // confirms it a second time, against the token just issued.
        let token = session.request_reset();
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("This permanently clears all 15 answers. Continue?")
            .default(false)
            .interact()?;
        if confirmed {
            session.confirm_reset(token)?;
            println!();
        } else {
            session.cancel_reset();
            break;
        }
    }

    Ok(())
}

fn ask_all_questions(session: &mut Session) -> Result<()> {
    let total = session.catalog().total_questions() as u64;
    let bar = ProgressBar::new(total);
    bar.set_style(ProgressStyle::with_template(
        "{bar:30.cyan/blue} {pos}/{len} answered",
    )?);
    bar.set_position(session.completion_count() as u64);

    let sections = session.catalog().sections().to_vec();
    for section in &sections {
        bar.suspend(|| println!("\n{}", style(section.title).bold()));
        for question in &section.questions {
            let choice = bar.suspend(|| prompt_question(question))?;
            session.answer(question.id, choice)?;
            bar.set_position(session.completion_count() as u64);
        }
    }
    bar.finish_and_clear();

    Ok(())
}

fn prompt_question(question: &Question) -> Result<Choice> {
    if let Some(detail) = question.detail {
        println!("  {}", style(detail).dim().italic());
    }
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(question.text)
        .items(&["Yes", "No"])
        .default(0)
        .interact()?;

    Ok(if selection == 0 { Choice::Yes } else { Choice::No })
}

fn print_results(recommendation: &Recommendation) {
    let tier = recommendation.tier;
    let title = match tier.severity {
        Severity::High => style(tier.title).red().bold(),
        Severity::Medium => style(tier.title).yellow().bold(),
        Severity::Low => style(tier.title).green().bold(),
    };

    println!();
    println!(
        "{} Score: {}/{}",
        style("✓").green(),
        style(recommendation.score).bold(),
        TOTAL_QUESTIONS
    );
    println!("  {title}");
    println!("\n  {}", tier.action);

    println!("\n{}", style("Next steps:").bold());
    for (i, step) in tier.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
}

fn maybe_save_report(
    session: &Session,
    recommendation: &Recommendation,
    options: &RunOptions,
    config: &Config,
) -> Result<()> {
    let save = options.save
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Save the report to a file?")
            .default(true)
            .interact()?;
    if !save {
        return Ok(());
    }

    let path = options
        .output
        .clone()
        .unwrap_or_else(|| config.report_path.clone());
    let report = generate_report(
        session.catalog(),
        session,
        recommendation,
        Local::now().date_naive(),
    );

    match std::fs::write(&path, report) {
        Ok(()) => println!("{} Report written to {}", style("✓").green(), path.display()),
        // A failed export is reported but never loses the in-memory session.
        Err(e) => eprintln!(
            "{} Could not write {}: {}",
            style("✗").red(),
            path.display(),
            e
        ),
    }

    Ok(())
}
