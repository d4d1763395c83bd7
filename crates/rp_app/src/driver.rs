use crate::actions::{dispatch, AppAction};
use crate::error::AppError;
use crate::prefs::AppPrefs;
use crate::state::AppState;

/// Runs actions against an [`AppState`] without a window.
pub struct AppDriver {
    state: AppState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppSnapshot {
    pub paragraphs: usize,
    pub messages: usize,
    pub translated: usize,
    pub selected_paragraph: Option<usize>,
    pub selected_message: Option<usize>,
    pub file_status: String,
    pub error: Option<String>,
    pub dirty: bool,
    pub quit_requested: bool,
}

impl Default for AppDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDriver {
    pub fn new() -> Self {
        Self::with_prefs(AppPrefs::default())
    }

    pub fn with_prefs(prefs: AppPrefs) -> Self {
        Self {
            state: AppState::with_prefs(prefs),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: AppAction) -> Result<(), AppError> {
        dispatch(&mut self.state, action)
    }

    pub fn snapshot(&self) -> AppSnapshot {
        let counts = self.state.counts();
        AppSnapshot {
            paragraphs: counts.paragraphs,
            messages: counts.messages,
            translated: counts.translated,
            selected_paragraph: self.state.session.selected_paragraph(),
            selected_message: self.state.session.selected_message(),
            file_status: self.state.file_status.clone(),
            error: self.state.error.clone(),
            dirty: self.state.dirty,
            quit_requested: self.state.quit_requested,
        }
    }
}
