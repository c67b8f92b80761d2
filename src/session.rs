//! Answer store and session state machine
//!
//! One `Session` owns the per-run answer mapping and the small state machine
//! around it: Collecting (0-14 answered) -> Complete (15 answered) ->
//! ResultsDisplayed (after an explicit `view_results`). Any successful
//! mutation drops back out of ResultsDisplayed so a stale recommendation is
//! never shown against updated answers.
//!
//! Reset is a two-step protocol: `request_reset` hands out a token and
//! `confirm_reset` performs the clear, so the destructive-action gate is
//! testable without a UI harness.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{MedecoError, Result};
use crate::scoring::{self, Thresholds, Tier};

/// A committed user answer. Deliberately two-valued; "unanswered" is the
/// absence of an entry, not a value a user can submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Yes,
    No,
}

/// Tri-state answer as observed per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Unanswered,
    Yes,
    No,
}

impl Answer {
    /// Mark used in the generated report.
    pub fn mark(self) -> &'static str {
        match self {
            Answer::Unanswered => "UNANSWERED",
            Answer::Yes => "YES",
            Answer::No => "NO",
        }
    }
}

impl From<Choice> for Answer {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::Yes => Answer::Yes,
            Choice::No => Answer::No,
        }
    }
}

/// Whole-system state as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Collecting,
    Complete,
    ResultsDisplayed,
}

/// Opaque handle tying a `confirm_reset` to the `request_reset` it answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetToken(u64);

/// Result of a successful `view_results`.
#[derive(Debug, Clone, Copy)]
pub struct Recommendation {
    pub score: usize,
    pub tier: &'static Tier,
}

/// Per-run questionnaire state.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    answers: HashMap<String, Choice>,
    results_displayed: bool,
    pending_reset: Option<u64>,
    reset_seq: u64,
}

impl Session {
    /// New session over the standard instrument, all questions unanswered.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::standard())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            answers: HashMap::new(),
            results_displayed: false,
            pending_reset: None,
            reset_seq: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current answer mapping. Absent ids are unanswered.
    pub fn answers(&self) -> &HashMap<String, Choice> {
        &self.answers
    }

    /// Record or overwrite the answer for `id`. Answering an already-answered
    /// question is allowed and simply replaces the entry. Any successful call
    /// hides currently displayed results.
    pub fn answer(&mut self, id: &str, choice: Choice) -> Result<()> {
        if !self.catalog.contains(id) {
            return Err(MedecoError::UnknownQuestion(id.to_string()));
        }
        self.answers.insert(id.to_string(), choice);
        self.results_displayed = false;
        debug!(id, ?choice, answered = self.completion_count(), "answer recorded");
        Ok(())
    }

    /// Answer state for one question.
    pub fn answer_for(&self, id: &str) -> Answer {
        self.answers
            .get(id)
            .copied()
            .map(Answer::from)
            .unwrap_or(Answer::Unanswered)
    }

    /// Number of questions with a committed answer.
    pub fn completion_count(&self) -> usize {
        self.catalog
            .questions()
            .filter(|q| self.answers.contains_key(q.id))
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.completion_count() == self.catalog.total_questions()
    }

    /// Completion as a rounded percentage, for progress display.
    pub fn progress_percent(&self) -> u8 {
        let total = self.catalog.total_questions();
        if total == 0 {
            return 100;
        }
        ((self.completion_count() as f64 / total as f64) * 100.0).round() as u8
    }

    /// Count of YES answers, recomputed from the mapping on every read.
    pub fn score(&self) -> usize {
        scoring::score(&self.answers)
    }

    pub fn phase(&self) -> Phase {
        if self.results_displayed {
            Phase::ResultsDisplayed
        } else if self.is_complete() {
            Phase::Complete
        } else {
            Phase::Collecting
        }
    }

    /// Compute the recommendation and mark results as displayed. Rejected
    /// while any question is unanswered, so a partial recommendation can
    /// never be produced.
    pub fn view_results(&mut self, thresholds: &Thresholds) -> Result<Recommendation> {
        if !self.is_complete() {
            return Err(MedecoError::Incomplete {
                answered: self.completion_count(),
                total: self.catalog.total_questions(),
            });
        }
        let score = self.score();
        let tier = scoring::recommend(score, thresholds);
        self.results_displayed = true;
        debug!(score, tier = tier.title, "results displayed");
        Ok(Recommendation { score, tier })
    }

    /// First half of the reset protocol. Supersedes any earlier request.
    pub fn request_reset(&mut self) -> ResetToken {
        self.reset_seq += 1;
        self.pending_reset = Some(self.reset_seq);
        ResetToken(self.reset_seq)
    }

    /// Second half: clears every answer and hides results. The token must
    /// come from the most recent `request_reset`.
    pub fn confirm_reset(&mut self, token: ResetToken) -> Result<()> {
        match self.pending_reset {
            None => Err(MedecoError::NoPendingReset),
            Some(pending) if pending != token.0 => Err(MedecoError::StaleResetToken),
            Some(_) => {
                self.answers.clear();
                self.results_displayed = false;
                self.pending_reset = None;
                debug!("session reset confirmed");
                Ok(())
            }
        }
    }

    /// Decline a pending reset. The store is left untouched.
    pub fn cancel_reset(&mut self) {
        self.pending_reset = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TOTAL_QUESTIONS;

    fn answer_all(session: &mut Session, choice: Choice) {
        let ids: Vec<&str> = session.catalog().questions().map(|q| q.id).collect();
        for id in ids {
            session.answer(id, choice).unwrap();
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert_eq!(session.completion_count(), 0);
        assert_eq!(session.score(), 0);
        assert!(!session.is_complete());
        assert_eq!(session.phase(), Phase::Collecting);
        assert_eq!(session.answer_for("q1"), Answer::Unanswered);
    }

    #[test]
    fn test_answer_overwrites_and_is_idempotent() {
        let mut session = Session::new();
        session.answer("q1", Choice::Yes).unwrap();
        session.answer("q1", Choice::Yes).unwrap();
        assert_eq!(session.completion_count(), 1);
        assert_eq!(session.score(), 1);

        session.answer("q1", Choice::No).unwrap();
        assert_eq!(session.completion_count(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.answer_for("q1"), Answer::No);
    }

    #[test]
    fn test_unknown_question_rejected() {
        let mut session = Session::new();
        let err = session.answer("q99", Choice::Yes).unwrap_err();
        assert!(matches!(err, MedecoError::UnknownQuestion(_)));
        assert_eq!(session.completion_count(), 0);
    }

    #[test]
    fn test_completion_requires_all_fifteen() {
        let mut session = Session::new();
        for n in 1..=10 {
            session.answer(&format!("q{n}"), Choice::No).unwrap();
        }
        assert_eq!(session.completion_count(), 10);
        assert!(!session.is_complete());
        assert_eq!(session.progress_percent(), 67); // round(10/15 * 100)

        for n in 11..=15 {
            session.answer(&format!("q{n}"), Choice::No).unwrap();
        }
        assert!(session.is_complete());
        assert_eq!(session.progress_percent(), 100);
    }

    #[test]
    fn test_view_results_blocked_until_complete() {
        let mut session = Session::new();
        let thresholds = Thresholds::default();
        for n in 1..=10 {
            session.answer(&format!("q{n}"), Choice::Yes).unwrap();
        }
        let err = session.view_results(&thresholds).unwrap_err();
        assert!(matches!(
            err,
            MedecoError::Incomplete { answered: 10, total: TOTAL_QUESTIONS }
        ));
        assert_eq!(session.phase(), Phase::Collecting);
    }

    #[test]
    fn test_any_mutation_hides_results() {
        let mut session = Session::new();
        let thresholds = Thresholds::default();
        answer_all(&mut session, Choice::Yes);
        session.view_results(&thresholds).unwrap();
        assert_eq!(session.phase(), Phase::ResultsDisplayed);

        // Re-answering with the same value leaves the store unchanged but
        // still hides the displayed results.
        session.answer("q1", Choice::Yes).unwrap();
        assert_eq!(session.phase(), Phase::Complete);
        assert_eq!(session.score(), TOTAL_QUESTIONS);
    }

    #[test]
    fn test_reset_requires_matching_confirmation() {
        let mut session = Session::new();
        answer_all(&mut session, Choice::Yes);

        let err = session.confirm_reset(ResetToken(42)).unwrap_err();
        assert!(matches!(err, MedecoError::NoPendingReset));
        assert_eq!(session.completion_count(), TOTAL_QUESTIONS);

        let stale = session.request_reset();
        let fresh = session.request_reset();
        let err = session.confirm_reset(stale).unwrap_err();
        assert!(matches!(err, MedecoError::StaleResetToken));
        assert_eq!(session.completion_count(), TOTAL_QUESTIONS);

        session.confirm_reset(fresh).unwrap();
        assert_eq!(session.completion_count(), 0);
        assert_eq!(session.score(), 0);
        assert!(!session.is_complete());
        for n in 1..=15 {
            assert_eq!(session.answer_for(&format!("q{n}")), Answer::Unanswered);
        }
    }

    #[test]
    fn test_declined_reset_leaves_store_unchanged() {
        let mut session = Session::new();
        let thresholds = Thresholds::default();
        answer_all(&mut session, Choice::Yes);
        session.view_results(&thresholds).unwrap();

        let token = session.request_reset();
        session.cancel_reset();
        let err = session.confirm_reset(token).unwrap_err();
        assert!(matches!(err, MedecoError::NoPendingReset));
        assert_eq!(session.score(), TOTAL_QUESTIONS);
        assert_eq!(session.phase(), Phase::ResultsDisplayed);
    }

    #[test]
    fn test_reset_from_results_returns_to_collecting() {
        let mut session = Session::new();
        let thresholds = Thresholds::default();
        answer_all(&mut session, Choice::No);
        session.view_results(&thresholds).unwrap();

        let token = session.request_reset();
        session.confirm_reset(token).unwrap();
        assert_eq!(session.phase(), Phase::Collecting);
    }
}
