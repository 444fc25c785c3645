use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_upload_documents::{UploadDocuments, UploadResponse, FILES_FIELD};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::api_utils::api_url;
use crate::shared::error::RequestError;
use crate::state::SelectedFile;

/// Send every selected file as a `files` part of one multipart request
pub async fn upload_files(
    files: &[SelectedFile<web_sys::File>],
) -> Result<UploadResponse, RequestError> {
    let form_data = FormData::new().map_err(|e| RequestError::Build(format!("{e:?}")))?;
    for file in files {
        form_data
            .append_with_blob_and_filename(FILES_FIELD, &file.handle, &file.name)
            .map_err(|e| RequestError::Build(format!("{e:?}")))?;
    }

    // The browser sets the multipart boundary itself; no Content-Type header here.
    let response = Request::post(&api_url(UploadDocuments::endpoint()))
        .body(form_data)
        .map_err(|e| RequestError::Build(e.to_string()))?
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(RequestError::Status(response.status()));
    }

    response
        .json::<UploadResponse>()
        .await
        .map_err(|e| RequestError::Decode(e.to_string()))
}
