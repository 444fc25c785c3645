//! Client session state
//!
//! Structure:
//! - session.rs: SessionState with pure update functions per user action
//! - store.rs: SessionStore seam between the controllers and a reactive signal

mod session;
mod store;

pub use session::{
    AnswerResult, AskApplied, AskPolicy, AskTicket, FileRow, SelectedFile, SessionState, UploadTicket,
};
pub use store::SessionStore;
