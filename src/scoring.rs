//! Scoring engine
//!
//! Maps a set of answers to a score (count of YES) and the score to one of
//! three recommendation tiers. Thresholds are business rules fixed by domain
//! expertise; they live in [`Thresholds`] so they can be revised through
//! configuration without touching the control flow here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::TOTAL_QUESTIONS;
use crate::session::Choice;

/// How strongly a medico-economic component is indicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// A fixed recommendation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tier {
    pub title: &'static str,
    pub action: &'static str,
    pub steps: &'static [&'static str],
    pub severity: Severity,
}

/// Score >= `strong_min`: full component with dedicated methodology.
pub const STRONGLY_RECOMMENDED: Tier = Tier {
    title: "Medico-economic component strongly recommended",
    action: "Include a full medico-economic component with a primary or co-primary \
             objective. Plan for a methodologist and a dedicated budget.",
    steps: &[
        "Contact a medico-economic methodologist",
        "Define the analysis perspective (hospital, society, health insurance)",
        "Plan the collection of cost data",
        "Budget the necessary resources",
        "Integrate it into the protocol and the funding application",
    ],
    severity: Severity::High,
};

/// Score in `exploratory_min..strong_min`: secondary objective only.
pub const EXPLORATORY_SUFFICIENT: Tier = Tier {
    title: "Secondary/exploratory component sufficient",
    action: "Include an exploratory (secondary) medico-economic objective. Collect \
             cost data without powering the study for it.",
    steps: &[
        "Plan basic collection of cost data",
        "State it as a secondary objective",
        "Consider a cost-consequence analysis",
        "Consult a methodologist for validation",
    ],
    severity: Severity::Medium,
};

/// Score below `exploratory_min`: keep the protocol clinical.
pub const NOT_NECESSARY: Tier = Tier {
    title: "Medico-economic component not necessary",
    action: "Focus resources on the clinical objectives. Do not overload the protocol.",
    steps: &[
        "Prioritize the quality of the clinical protocol",
        "Avoid unnecessary methodological complexity",
        "Keep resources for clinical follow-up",
        "Simply document standard costs if needed",
    ],
    severity: Severity::Low,
};

/// Score thresholds separating the three tiers.
///
/// `strong_min` and `exploratory_min` are inclusive lower bounds; the
/// defaults (6 and 3) partition 0..=15 into <=2 / 3..=5 / >=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_strong_min")]
    pub strong_min: usize,

    #[serde(default = "default_exploratory_min")]
    pub exploratory_min: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            strong_min: default_strong_min(),
            exploratory_min: default_exploratory_min(),
        }
    }
}

fn default_strong_min() -> usize {
    6
}

fn default_exploratory_min() -> usize {
    3
}

/// Count of YES answers. Always recomputed from the mapping, never
/// incrementally maintained, so the score cannot drift from the store.
pub fn score(answers: &HashMap<String, Choice>) -> usize {
    answers.values().filter(|c| **c == Choice::Yes).count()
}

/// Map a score to its tier. Total over 0..=15; larger inputs cannot occur
/// with the fixed question count but are clamped rather than misclassified.
pub fn recommend(score: usize, thresholds: &Thresholds) -> &'static Tier {
    let score = score.min(TOTAL_QUESTIONS);
    if score >= thresholds.strong_min {
        &STRONGLY_RECOMMENDED
    } else if score >= thresholds.exploratory_min {
        &EXPLORATORY_SUFFICIENT
    } else {
        &NOT_NECESSARY
    }
}
