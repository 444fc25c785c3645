//! Backend seam used by the upload and ask controllers.

use async_trait::async_trait;
use contracts::usecases::u101_upload_documents::UploadResponse;
use contracts::usecases::u102_ask_question::AskResponse;

use crate::shared::error::RequestError;
use crate::state::SelectedFile;
use crate::usecases::{u101_upload_documents, u102_ask_question};

/// The document Q&A service.
///
/// `?Send`: the browser runs every future on the single UI thread.
#[async_trait(?Send)]
pub trait QaBackend {
    /// Binary handle of a selected file
    type File;

    async fn upload(
        &self,
        files: &[SelectedFile<Self::File>],
    ) -> Result<UploadResponse, RequestError>;

    async fn ask(&self, question: &str) -> Result<AskResponse, RequestError>;
}

#[async_trait(?Send)]
impl<T: QaBackend + ?Sized> QaBackend for &T {
    type File = T::File;

    async fn upload(
        &self,
        files: &[SelectedFile<Self::File>],
    ) -> Result<UploadResponse, RequestError> {
        (**self).upload(files).await
    }

    async fn ask(&self, question: &str) -> Result<AskResponse, RequestError> {
        (**self).ask(question).await
    }
}

/// The real backend reached over `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpBackend;

#[async_trait(?Send)]
impl QaBackend for HttpBackend {
    type File = web_sys::File;

    async fn upload(
        &self,
        files: &[SelectedFile<web_sys::File>],
    ) -> Result<UploadResponse, RequestError> {
        u101_upload_documents::api::upload_files(files).await
    }

    async fn ask(&self, question: &str) -> Result<AskResponse, RequestError> {
        u102_ask_question::api::ask(question).await
    }
}
