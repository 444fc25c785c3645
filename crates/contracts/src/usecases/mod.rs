pub mod common;
pub mod u101_upload_documents;
pub mod u102_ask_question;
