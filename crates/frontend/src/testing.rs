//! In-memory doubles for controller tests.

use async_trait::async_trait;
use contracts::usecases::u101_upload_documents::UploadResponse;
use contracts::usecases::u102_ask_question::AskResponse;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use tokio::sync::oneshot;

use crate::shared::backend::QaBackend;
use crate::shared::error::RequestError;
use crate::shared::notification::NotificationId;
use crate::state::{SelectedFile, SessionState, SessionStore};

/// Session state plus the auto-hide requests made against it
#[derive(Default)]
pub struct TestStore {
    pub state: RefCell<SessionState<String>>,
    pub scheduled: RefCell<Vec<NotificationId>>,
}

impl TestStore {
    pub fn with_state(state: SessionState<String>) -> Self {
        Self {
            state: RefCell::new(state),
            scheduled: RefCell::new(Vec::new()),
        }
    }
}

impl SessionStore<String> for TestStore {
    fn apply<R>(&self, f: impl FnOnce(&mut SessionState<String>) -> R) -> Option<R> {
        Some(f(&mut self.state.borrow_mut()))
    }

    fn schedule_auto_hide(&self, id: NotificationId) {
        self.scheduled.borrow_mut().push(id);
    }
}

pub fn file(name: &str) -> SelectedFile<String> {
    SelectedFile::new(name, 1024, format!("<bytes of {name}>"))
}

/// Backend answering with canned results and counting calls
pub struct FakeBackend {
    pub upload_result: Result<UploadResponse, RequestError>,
    pub ask_result: Result<AskResponse, RequestError>,
    pub upload_calls: Cell<usize>,
    pub ask_calls: Cell<usize>,
    pub uploaded: RefCell<Vec<String>>,
    pub asked: RefCell<Vec<String>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            upload_result: Err(RequestError::Network("unset".into())),
            ask_result: Err(RequestError::Network("unset".into())),
            upload_calls: Cell::new(0),
            ask_calls: Cell::new(0),
            uploaded: RefCell::new(Vec::new()),
            asked: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl QaBackend for FakeBackend {
    type File = String;

    async fn upload(
        &self,
        files: &[SelectedFile<String>],
    ) -> Result<UploadResponse, RequestError> {
        self.upload_calls.set(self.upload_calls.get() + 1);
        self.uploaded
            .borrow_mut()
            .extend(files.iter().map(|f| f.name.clone()));
        self.upload_result.clone()
    }

    async fn ask(&self, question: &str) -> Result<AskResponse, RequestError> {
        self.ask_calls.set(self.ask_calls.get() + 1);
        self.asked.borrow_mut().push(question.to_string());
        self.ask_result.clone()
    }
}

/// Backend whose ask responses are released by the test, in any order
#[derive(Default)]
pub struct GatedBackend {
    gates: RefCell<VecDeque<oneshot::Receiver<Result<AskResponse, RequestError>>>>,
    pub asked: RefCell<Vec<String>>,
}

impl GatedBackend {
    /// Register the gate for the next ask call
    pub fn gate(&self) -> oneshot::Sender<Result<AskResponse, RequestError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }
}

#[async_trait(?Send)]
impl QaBackend for GatedBackend {
    type File = String;

    async fn upload(
        &self,
        _files: &[SelectedFile<String>],
    ) -> Result<UploadResponse, RequestError> {
        Err(RequestError::Network("not used".into()))
    }

    async fn ask(&self, question: &str) -> Result<AskResponse, RequestError> {
        self.asked.borrow_mut().push(question.to_string());
        let gate = self.gates.borrow_mut().pop_front();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(RequestError::Network("gate dropped".into()))),
            None => Err(RequestError::Network("no gate".into())),
        }
    }
}
