pub mod response;

pub use response::UploadResponse;

use crate::usecases::common::UseCaseMetadata;

/// Name of the repeated multipart field that carries each file.
pub const FILES_FIELD: &str = "files";

pub struct UploadDocuments;

impl UseCaseMetadata for UploadDocuments {
    fn display_name() -> &'static str {
        "Upload Documents"
    }

    fn endpoint() -> &'static str {
        "/upload/"
    }
}
