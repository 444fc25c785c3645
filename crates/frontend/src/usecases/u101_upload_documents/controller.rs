use crate::shared::backend::QaBackend;
use crate::shared::error::{RequestError, ValidationError};
use crate::shared::notification::Severity;
use crate::state::SessionStore;

#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Rejected(ValidationError),
    Uploaded(Vec<String>),
    Failed(RequestError),
    /// The store went away before the flow could start
    Detached,
}

/// Upload the selected batch and report the result in the banner
pub async fn submit_upload<S, B>(store: &S, backend: &B) -> UploadOutcome
where
    B: QaBackend,
    B::File: Clone,
    S: SessionStore<B::File>,
{
    let ticket = match store.apply(|s| s.begin_upload()) {
        Some(Ok(ticket)) => ticket,
        Some(Err(ValidationError::UploadInProgress)) => {
            return UploadOutcome::Rejected(ValidationError::UploadInProgress);
        }
        Some(Err(e)) => {
            store.notify(e.to_string(), Severity::Warning);
            return UploadOutcome::Rejected(e);
        }
        None => return UploadOutcome::Detached,
    };

    log::debug!("Uploading {} file(s)", ticket.files.len());
    let result = backend.upload(&ticket.files).await;
    store.apply(|s| s.finish_upload(&result));

    match result {
        Ok(resp) => {
            store.notify(
                format!("Files uploaded successfully: {}", resp.processed_list()),
                Severity::Success,
            );
            UploadOutcome::Uploaded(resp.files_processed)
        }
        Err(e) => {
            log::error!("Upload failed: {}", e);
            store.notify("Upload failed!", Severity::Danger);
            UploadOutcome::Failed(e)
        }
    }
}
