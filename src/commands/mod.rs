//! CLI command implementations.
//!
//! Each command is in its own submodule. The library engine stays free of
//! terminal concerns; everything interactive lives here.

pub mod questions;
pub mod report;
pub mod run;

pub use questions::{execute_questions, QuestionsOptions};
pub use report::{execute_report, ReportOptions};
pub use run::{execute_run, RunOptions};
