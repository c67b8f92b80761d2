//! Questionnaire catalog
//!
//! The fixed instrument: 5 thematic sections holding 15 yes/no questions.
//! Ids are stable across sessions and drive both the answer store keys and
//! the report ordering. The content never changes at runtime.

use serde::Serialize;

/// Number of questions in the standard instrument.
pub const TOTAL_QUESTIONS: usize = 15;

/// A single yes/no question.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    /// Stable id, `q1`..`q15`.
    pub id: &'static str,

    /// Index of the owning section, 0-based.
    pub section_index: usize,

    /// Prompt text.
    pub text: &'static str,

    /// Optional clarifying detail shown under the prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'static str>,
}

/// An ordered group of questions under one heading.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub questions: Vec<Question>,
}

/// The full ordered instrument.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    /// The standard 5-section, 15-question screening instrument.
    pub fn standard() -> Self {
        let sections = vec![
            Section {
                title: "1. Intervention",
                questions: vec![
                    Question {
                        id: "q1",
                        section_index: 0,
                        text: "Does the intervention change the costs of care?",
                        detail: Some("(hospitalizations, procedures, costly drugs)"),
                    },
                    Question {
                        id: "q2",
                        section_index: 0,
                        text: "Does the intervention change how care is organized?",
                        detail: Some("(nursing time, consultations, new technologies)"),
                    },
                    Question {
                        id: "q3",
                        section_index: 0,
                        text: "Is the intervention more expensive than the current standard?",
                        detail: None,
                    },
                    Question {
                        id: "q4",
                        section_index: 0,
                        text: "Does the intervention require a scarce or limited resource?",
                        detail: Some("(physician time, MRI, biotherapies, mobile teams)"),
                    },
                ],
            },
            Section {
                title: "2. Pathology and population",
                questions: vec![
                    Question {
                        id: "q5",
                        section_index: 1,
                        text: "Does the disease carry a significant economic burden?",
                        detail: Some("(frequent hospitalizations, chronic care)"),
                    },
                    Question {
                        id: "q6",
                        section_index: 1,
                        text: "Is the current burden identified as a hospital or national problem?",
                        detail: None,
                    },
                    Question {
                        id: "q7",
                        section_index: 1,
                        text: "Does the population generate high cost variability?",
                        detail: None,
                    },
                ],
            },
            Section {
                title: "3. Study design",
                questions: vec![
                    Question {
                        id: "q8",
                        section_index: 2,
                        text: "Does the study compare two management strategies?",
                        detail: None,
                    },
                    Question {
                        id: "q9",
                        section_index: 2,
                        text: "Does the study include a non-drug intervention funded by a service?",
                        detail: Some("(remote monitoring, therapeutic education, mobile team)"),
                    },
                    Question {
                        id: "q10",
                        section_index: 2,
                        text: "Is a sample size calculation for the economic objective realistic?",
                        detail: None,
                    },
                ],
            },
            Section {
                title: "4. Sponsor and funder",
                questions: vec![
                    Question {
                        id: "q11",
                        section_index: 3,
                        text: "Does the funder require a health-economic analysis?",
                        detail: Some("(PHRC, INCa, DGOS, innovation calls)"),
                    },
                    Question {
                        id: "q12",
                        section_index: 3,
                        text: "Does the sponsor want a local budget impact estimate?",
                        detail: None,
                    },
                    Question {
                        id: "q13",
                        section_index: 3,
                        text: "Does the project aim at a large-scale change in practice?",
                        detail: None,
                    },
                ],
            },
            Section {
                title: "5. Decisional impact",
                questions: vec![
                    Question {
                        id: "q14",
                        section_index: 4,
                        text: "Could the economic results drive a change in protocol, organization, \
                               equipment purchasing, or national rollout?",
                        detail: None,
                    },
                    Question {
                        id: "q15",
                        section_index: 4,
                        text: "Without a medico-economic component, is an essential dimension \
                               missing to make the case?",
                        detail: None,
                    },
                ],
            },
        ];

        Self { sections }
    }

    /// Sections in display/report order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All questions in catalog order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|s| s.questions.iter())
    }

    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions().find(|q| q.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.question(id).is_some()
    }

    pub fn total_questions(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
