//! Questions command
//!
//! Prints the catalog, human-readable or as JSON for other tooling.

use anyhow::Result;
use console::style;

use crate::catalog::Catalog;

/// Options for the questions command
#[derive(Debug, Clone, Default)]
pub struct QuestionsOptions {
    /// Output as JSON
    pub json: bool,
}

/// Execute the questions command
pub fn execute_questions(options: QuestionsOptions) -> Result<()> {
    let catalog = Catalog::standard();

    if options.json {
        println!("{}", serde_json::to_string_pretty(catalog.sections())?);
        return Ok(());
    }

    for section in catalog.sections() {
        println!("{}", style(section.title).bold());
        for question in &section.questions {
            println!("  {} {}", style(question.id).cyan(), question.text);
            if let Some(detail) = question.detail {
                println!("     {}", style(detail).dim());
            }
        }
        println!();
    }
    println!("{} questions total", catalog.total_questions());

    Ok(())
}
