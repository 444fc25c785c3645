pub mod request;
pub mod response;

pub use request::AskQuery;
pub use response::AskResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct AskQuestion;

impl UseCaseMetadata for AskQuestion {
    fn display_name() -> &'static str {
        "Ask Questions"
    }

    fn endpoint() -> &'static str {
        "/ask/"
    }
}
