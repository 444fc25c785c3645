use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u102_ask_question::{AskQuery, AskQuestion, AskResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url_with_query;
use crate::shared::error::RequestError;

/// Ask the backend a question
pub async fn ask(question: &str) -> Result<AskResponse, RequestError> {
    let query = AskQuery::new(question);
    let url = api_url_with_query(AskQuestion::endpoint(), &[("q", query.q.as_str())]);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(RequestError::Status(response.status()));
    }

    response
        .json::<AskResponse>()
        .await
        .map_err(|e| RequestError::Decode(e.to_string()))
}
