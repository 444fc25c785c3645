//! Upload Documents (MVVM Standard)
//!
//! Structure:
//! - api.rs: multipart POST to the backend
//! - controller.rs: submit_upload flow over SessionStore + QaBackend
//! - view.rs: UploadDocumentsPanel component

pub mod api;
mod controller;
mod view;

pub use controller::{submit_upload, UploadOutcome};
pub use view::UploadDocumentsPanel;
