use leptos::prelude::*;

use crate::shared::config::config;
use crate::state::SessionState;

/// App-wide store provided at the root and read by every panel.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Local storage: `web_sys::File` handles are not `Send`.
    pub session: RwSignal<SessionState<web_sys::File>, LocalStorage>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new_local(SessionState::new(config().ask.policy)),
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
