//! Report generator
//!
//! Renders a completed session into the plain-text report a user can save
//! or share. This layout is the closest thing the tool has to a stable wire
//! format, so changes here are contract changes. The generation date is a
//! parameter, never read from the wall clock, to keep the function pure.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::session::{Recommendation, Session};

const RULE_WIDTH: usize = 50;

/// Render the full report: title block and date, score line, tier title and
/// action, numbered next steps, then every section with per-question marks.
pub fn generate_report(
    catalog: &Catalog,
    session: &Session,
    recommendation: &Recommendation,
    date: NaiveDate,
) -> String {
    let total = catalog.total_questions();
    let mut out = String::new();

    // Title block and generation date.
    let _ = writeln!(out, "MEDICO-ECONOMIC COMPONENT ASSESSMENT");
    let _ = writeln!(out, "Date: {}", date.format("%Y-%m-%d"));
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    out.push('\n');

    // Score line.
    let _ = writeln!(out, "Score: {}/{} YES answers", recommendation.score, total);
    out.push('\n');

    // Tier title and action text.
    let _ = writeln!(out, "{}", recommendation.tier.title.to_uppercase());
    out.push('\n');
    let _ = writeln!(out, "{}", recommendation.tier.action);
    out.push('\n');

    // Recommended next steps, in tier-defined order.
    let _ = writeln!(out, "Recommended next steps:");
    for (i, step) in recommendation.tier.steps.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, step);
    }
    out.push('\n');

    // Per-section, per-question detail.
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for section in catalog.sections() {
        out.push('\n');
        let _ = writeln!(out, "{}", section.title);
        for question in &section.questions {
            let mark = session.answer_for(question.id).mark();
            let _ = writeln!(out, "  [{}] {}", mark, question.text);
            if let Some(detail) = question.detail {
                let _ = writeln!(out, "        {detail}");
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Thresholds;
    use crate::session::Choice;

    fn completed_session(yes: usize) -> (Session, Recommendation) {
        let mut session = Session::new();
        let ids: Vec<&str> = session.catalog().questions().map(|q| q.id).collect();
        for (i, id) in ids.iter().enumerate() {
            let choice = if i < yes { Choice::Yes } else { Choice::No };
            session.answer(id, choice).unwrap();
        }
        let recommendation = session.view_results(&Thresholds::default()).unwrap();
        (session, recommendation)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 4).unwrap()
    }

    #[test]
    fn test_report_structural_elements_in_order() {
        let (session, recommendation) = completed_session(7);
        let catalog = session.catalog().clone();
        let report = generate_report(&catalog, &session, &recommendation, date());

        let title = report.find("MEDICO-ECONOMIC COMPONENT ASSESSMENT").unwrap();
        let date_line = report.find("Date: 2025-11-04").unwrap();
        let score_line = report.find("Score: 7/15 YES answers").unwrap();
        let tier_line = report
            .find("MEDICO-ECONOMIC COMPONENT STRONGLY RECOMMENDED")
            .unwrap();
        let steps = report.find("Recommended next steps:").unwrap();
        let sections = report.find("1. Intervention").unwrap();

        assert!(title < date_line);
        assert!(date_line < score_line);
        assert!(score_line < tier_line);
        assert!(tier_line < steps);
        assert!(steps < sections);
    }

    #[test]
    fn test_report_steps_numbered_in_tier_order() {
        let (session, recommendation) = completed_session(15);
        let catalog = session.catalog().clone();
        let report = generate_report(&catalog, &session, &recommendation, date());

        for (i, step) in recommendation.tier.steps.iter().enumerate() {
            assert!(report.contains(&format!("{}. {}", i + 1, step)), "{step}");
        }
    }

    #[test]
    fn test_report_marks_every_question() {
        let (session, recommendation) = completed_session(3);
        let catalog = session.catalog().clone();
        let report = generate_report(&catalog, &session, &recommendation, date());

        for question in catalog.questions() {
            let mark = session.answer_for(question.id).mark();
            assert!(
                report.contains(&format!("[{}] {}", mark, question.text)),
                "missing line for {}",
                question.id
            );
        }
        // 3 YES then 12 NO, no unanswered marks.
        assert_eq!(report.matches("[YES]").count(), 3);
        assert_eq!(report.matches("[NO]").count(), 12);
        assert!(!report.contains("[UNANSWERED]"));
    }

    #[test]
    fn test_report_includes_detail_lines() {
        let (session, recommendation) = completed_session(0);
        let catalog = session.catalog().clone();
        let report = generate_report(&catalog, &session, &recommendation, date());

        assert!(report.contains("(hospitalizations, procedures, costly drugs)"));
        assert!(report.contains("(PHRC, INCa, DGOS, innovation calls)"));
    }

    #[test]
    fn test_report_sections_in_catalog_order() {
        let (session, recommendation) = completed_session(5);
        let catalog = session.catalog().clone();
        let report = generate_report(&catalog, &session, &recommendation, date());

        let mut last = 0;
        for section in catalog.sections() {
            let pos = report.find(section.title).unwrap();
            assert!(pos > last, "{} out of order", section.title);
            last = pos;
        }
    }
}
