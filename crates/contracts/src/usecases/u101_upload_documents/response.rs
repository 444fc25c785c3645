use serde::{Deserialize, Serialize};

/// Response of `POST /upload/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Names of the files the backend accepted, in upload order
    pub files_processed: Vec<String>,
}

impl UploadResponse {
    /// Human readable list of processed files, e.g. "a.pdf, b.pdf"
    pub fn processed_list(&self) -> String {
        self.files_processed.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upload_response() {
        let json = r#"{"files_processed": ["a.pdf", "b.pdf"]}"#;
        let resp: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.files_processed, vec!["a.pdf", "b.pdf"]);
        assert_eq!(resp.processed_list(), "a.pdf, b.pdf");
    }

    #[test]
    fn test_missing_files_processed_is_an_error() {
        let resp: Result<UploadResponse, _> = serde_json::from_str(r#"{"status": "ok"}"#);
        assert!(resp.is_err());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"{"files_processed": [], "chunks": 12}"#;
        let resp: UploadResponse = serde_json::from_str(json).unwrap();
        assert!(resp.files_processed.is_empty());
        assert_eq!(resp.processed_list(), "");
    }
}
