//! Assistant logic core.
//!
//! Control flow: user input -> `classify` -> `answers::lookup` -> message
//! appended to the conversation log. `analysis` is an alternate entry point
//! that produces the same answer-record shape from a screen capture, and
//! `demo` is a best-effort sub-path that asks an automation backend for a
//! live screenshot before falling back to the standard path.

pub mod analysis;
pub mod answers;
pub mod classify;
pub mod demo;

pub use analysis::{MockAnalyzer, ScreenAnalyzer, compose_screen_analysis_answer};
pub use answers::lookup;
pub use classify::classify;
pub use demo::{DemoClient, DemoError, wants_demonstration};

use crate::types::AnswerRecord;

/// The standard path: classify the question and fetch its canned answer.
pub fn answer_question(question: &str) -> &'static AnswerRecord {
    lookup(classify(question))
}
