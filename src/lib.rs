#![forbid(unsafe_code)]

//! # Medeco
//!
//! Decision-support screening for clinical research teams: answer 15 yes/no
//! questions across 5 themes and get a recommendation on whether the study
//! protocol needs a medico-economic component.
//!
//! The library holds the engine (catalog, answer store, scoring, report
//! generation); the `medeco` binary wraps it in an interactive CLI.
//!
//! ## Example
//!
//! ```rust
//! use medeco::{Choice, Session, Thresholds};
//!
//! fn main() -> medeco::Result<()> {
//!     let mut session = Session::new();
//!     let ids: Vec<&str> = session.catalog().questions().map(|q| q.id).collect();
//!     for id in ids {
//!         session.answer(id, Choice::Yes)?;
//!     }
//!
//!     let recommendation = session.view_results(&Thresholds::default())?;
//!     assert_eq!(recommendation.score, 15);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod report;
pub mod scoring;
pub mod session;

// Re-exports
pub use catalog::{Catalog, Question, Section, TOTAL_QUESTIONS};
pub use config::Config;
pub use error::{MedecoError, Result};
pub use report::generate_report;
pub use scoring::{recommend, score, Severity, Thresholds, Tier};
pub use session::{Answer, Choice, Phase, Recommendation, ResetToken, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
