use contracts::usecases::u101_upload_documents::UploadResponse;
use contracts::usecases::u102_ask_question::AskResponse;
use serde::Deserialize;
use uuid::Uuid;

use crate::shared::error::{RequestError, ValidationError};
use crate::shared::notification::Banner;

/// A file chosen for the next upload batch
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<H> {
    /// Render key only
    pub id: Uuid,
    pub name: String,
    pub size: u64,
    pub handle: H,
}

impl<H> SelectedFile<H> {
    pub fn new(name: impl Into<String>, size: u64, handle: H) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            size,
            handle,
        }
    }

    /// Size in whole kilobytes, as shown in the file list badge
    pub fn size_kb(&self) -> u64 {
        (self.size as f64 / 1024.0).round() as u64
    }
}

/// Render row of the selected-file list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub id: Uuid,
    pub name: String,
    pub size_kb: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerResult {
    pub answer: String,
    pub context: Option<String>,
}

impl AnswerResult {
    pub fn has_answer(&self) -> bool {
        !self.answer.is_empty()
    }

    /// Context to display, `None` when absent or empty
    pub fn visible_context(&self) -> Option<&str> {
        self.context.as_deref().filter(|c| !c.is_empty())
    }
}

impl From<AskResponse> for AnswerResult {
    fn from(resp: AskResponse) -> Self {
        Self {
            answer: resp.answer,
            context: resp.context,
        }
    }
}

/// How overlapping ask requests resolve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AskPolicy {
    /// Every response is applied; the one resolving last stays on screen.
    #[default]
    LastResolvedWins,
    /// Responses to superseded questions are dropped.
    LastIssuedWins,
}

/// Snapshot of the batch handed to the backend
#[derive(Debug, Clone)]
pub struct UploadTicket<H> {
    pub files: Vec<SelectedFile<H>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskTicket {
    pub seq: u64,
    pub question: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskApplied {
    Answered,
    Failed,
    /// A newer question was issued and the policy drops this response
    Superseded,
}

/// All transient UI state of the page
#[derive(Debug, Clone)]
pub struct SessionState<H> {
    pub files: Vec<SelectedFile<H>>,
    pub uploading: bool,
    pub question: String,
    pub answer: Option<AnswerResult>,
    pub banner: Banner,
    pub ask_policy: AskPolicy,
    ask_seq: u64,
}

impl<H> Default for SessionState<H> {
    fn default() -> Self {
        Self::new(AskPolicy::default())
    }
}

impl<H> SessionState<H> {
    pub fn new(ask_policy: AskPolicy) -> Self {
        Self {
            files: Vec::new(),
            uploading: false,
            question: String::new(),
            answer: None,
            banner: Banner::new(),
            ask_policy,
            ask_seq: 0,
        }
    }

    pub fn select_files(&mut self, files: Vec<SelectedFile<H>>) {
        self.files = files;
    }

    /// A drop carrying no files (text, links) keeps the current selection.
    pub fn drop_files(&mut self, files: Vec<SelectedFile<H>>) -> bool {
        if files.is_empty() {
            return false;
        }
        self.select_files(files);
        true
    }

    pub fn file_rows(&self) -> Vec<FileRow> {
        self.files
            .iter()
            .map(|f| FileRow {
                id: f.id,
                name: f.name.clone(),
                size_kb: f.size_kb(),
            })
            .collect()
    }

    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    /// The upload control is inert while uploading or with nothing selected.
    pub fn can_upload(&self) -> bool {
        !self.uploading && !self.files.is_empty()
    }

    pub fn finish_upload(&mut self, result: &Result<UploadResponse, RequestError>) {
        self.uploading = false;
        if result.is_ok() {
            self.files.clear();
        }
    }

    /// Validate the question, clear the previous answer and issue a ticket.
    pub fn begin_ask(&mut self) -> Result<AskTicket, ValidationError> {
        if self.question.trim().is_empty() {
            return Err(ValidationError::EmptyQuestion);
        }
        self.answer = None;
        self.ask_seq += 1;
        Ok(AskTicket {
            seq: self.ask_seq,
            question: self.question.clone(),
        })
    }

    pub fn finish_ask(
        &mut self,
        ticket: &AskTicket,
        result: &Result<AskResponse, RequestError>,
    ) -> AskApplied {
        if self.ask_policy == AskPolicy::LastIssuedWins && ticket.seq < self.ask_seq {
            return AskApplied::Superseded;
        }
        match result {
            Ok(resp) => {
                self.answer = Some(AnswerResult::from(resp.clone()));
                AskApplied::Answered
            }
            Err(_) => AskApplied::Failed,
        }
    }

    /// Answer to render; `None` shows the placeholder
    pub fn displayed_answer(&self) -> Option<&AnswerResult> {
        self.answer.as_ref().filter(|a| a.has_answer())
    }
}

impl<H: Clone> SessionState<H> {
    /// Validate the batch, raise the uploading flag and snapshot the files.
    pub fn begin_upload(&mut self) -> Result<UploadTicket<H>, ValidationError> {
        if self.files.is_empty() {
            return Err(ValidationError::NoFilesSelected);
        }
        if self.uploading {
            return Err(ValidationError::UploadInProgress);
        }
        self.uploading = true;
        Ok(UploadTicket {
            files: self.files.clone(),
        })
    }
}
