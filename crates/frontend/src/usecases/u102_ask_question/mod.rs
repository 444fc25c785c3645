//! Ask Questions (MVVM Standard)
//!
//! Structure:
//! - api.rs: GET with the question as query parameter
//! - controller.rs: submit_question flow and the Enter shortcut rule
//! - view.rs: AskQuestionPanel component

pub mod api;
mod controller;
mod view;

pub use controller::{handle_question_key, is_submit_key, submit_question, AskOutcome};
pub use view::AskQuestionPanel;
