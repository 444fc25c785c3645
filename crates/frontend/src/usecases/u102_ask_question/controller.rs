use std::future::Future;

use crate::shared::backend::QaBackend;
use crate::shared::error::{RequestError, ValidationError};
use crate::shared::notification::Severity;
use crate::state::{AnswerResult, AskApplied, SessionStore};

#[derive(Debug, Clone, PartialEq)]
pub enum AskOutcome {
    Rejected(ValidationError),
    Answered(AnswerResult),
    Failed(RequestError),
    /// A newer question was issued first; this response was dropped
    Superseded,
    Detached,
}

/// `Enter` without shift submits the question
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Keydown in the question input.
///
/// `Some` means the key submits: the caller must suppress the browser's
/// default action (the implicit form submit) and drive the returned future.
pub fn handle_question_key<S, B>(
    store: S,
    backend: B,
    key: &str,
    shift: bool,
) -> Option<impl Future<Output = AskOutcome>>
where
    B: QaBackend,
    S: SessionStore<B::File>,
{
    if !is_submit_key(key, shift) {
        return None;
    }
    Some(async move { submit_question(&store, &backend).await })
}

/// Ask the current question and put the answer on screen
pub async fn submit_question<S, B>(store: &S, backend: &B) -> AskOutcome
where
    B: QaBackend,
    S: SessionStore<B::File>,
{
    let ticket = match store.apply(|s| s.begin_ask()) {
        Some(Ok(ticket)) => ticket,
        Some(Err(e)) => {
            store.notify(e.to_string(), Severity::Warning);
            return AskOutcome::Rejected(e);
        }
        None => return AskOutcome::Detached,
    };

    log::debug!("Asking question #{}", ticket.seq);
    let result = backend.ask(&ticket.question).await;
    let applied = match store.apply(|s| s.finish_ask(&ticket, &result)) {
        Some(applied) => applied,
        None => return AskOutcome::Detached,
    };

    match (applied, result) {
        (AskApplied::Superseded, _) => {
            log::debug!("Dropped response to superseded question #{}", ticket.seq);
            AskOutcome::Superseded
        }
        (_, Ok(resp)) => AskOutcome::Answered(AnswerResult::from(resp)),
        (_, Err(e)) => {
            log::error!("Error fetching answer: {}", e);
            store.notify("Error fetching answer.", Severity::Danger);
            AskOutcome::Failed(e)
        }
    }
}
