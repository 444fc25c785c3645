use serde::{Deserialize, Serialize};

/// Query string of `GET /ask/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskQuery {
    /// The question exactly as typed
    pub q: String,
}

impl AskQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self { q: q.into() }
    }
}
