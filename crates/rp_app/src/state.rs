use std::path::PathBuf;

use log::{debug, info, warn};
use rp_core::formats::po::Catalog;
use rp_core::formats::rst::ExtractOptions;
use rp_core::session::{PairCounts, PairOutcome, PairingSession};
use rp_core::workspace::Workspace;

use crate::error::AppError;
use crate::history::{EditHistory, DEFAULT_HISTORY_LIMIT};
use crate::prefs::AppPrefs;

pub struct AppState {
    pub history: EditHistory,
    pub session: PairingSession,
    pub workspace: Option<Workspace>,
    pub prefs: AppPrefs,

    pub file_status: String,
    pub error: Option<String>,
    pub last_saved: Option<PathBuf>,
    pub dirty: bool,
    pub quit_requested: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_prefs(AppPrefs::default())
    }

    pub fn with_prefs(prefs: AppPrefs) -> Self {
        Self {
            history: EditHistory::with_limit(DEFAULT_HISTORY_LIMIT),
            session: PairingSession::new(Vec::new(), Catalog::default()),
            workspace: None,
            prefs,
            file_status: String::new(),
            error: None,
            last_saved: None,
            dirty: false,
            quit_requested: false,
        }
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            footnote_rubric: self.prefs.footnote_rubric.clone(),
        }
    }

    pub fn open(&mut self, workspace: Workspace) -> Result<(), AppError> {
        workspace.ensure_exists()?;
        self.session = workspace.load(&self.extract_options())?;
        self.history.clear();
        self.dirty = false;
        self.last_saved = None;
        let counts = self.session.counts();
        self.file_status = format!(
            "{} paragraphs, {} messages",
            counts.paragraphs, counts.messages
        );
        self.workspace = Some(workspace);
        Ok(())
    }

    pub fn record(&mut self, outcome: PairOutcome) {
        if self.history.record(outcome.into()) {
            self.dirty = true;
        }
    }

    pub fn undo(&mut self) -> bool {
        let Some(index) = self.history.undo(&mut self.session) else {
            return false;
        };
        debug!("undo restored message {index}");
        self.after_history_step(index);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(index) = self.history.redo(&mut self.session) else {
            return false;
        };
        debug!("redo restored message {index}");
        self.after_history_step(index);
        true
    }

    pub fn mark_saved(&mut self, path: PathBuf) {
        info!("wrote {}", path.display());
        self.file_status = format!("saved: {}", path.display());
        self.last_saved = Some(path);
        self.dirty = false;
    }

    /// Stores the error and its causes as one status line.
    pub fn report_error(&mut self, err: &AppError) {
        let mut text = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        self.error = Some(text);
    }

    pub fn counts(&self) -> PairCounts {
        self.session.counts()
    }

    pub fn translation_ratio(&self) -> f32 {
        let counts = self.counts();
        if counts.messages == 0 {
            0.0
        } else {
            counts.translated as f32 / counts.messages as f32
        }
    }

    fn after_history_step(&mut self, index: usize) {
        self.dirty = true;
        if let Err(err) = self.session.select_message(index) {
            warn!("{err}");
        }
    }
}

/// Message row labels: reference, msgid, msgstr.
pub fn message_row_labels(session: &PairingSession, index: usize) -> Option<[String; 3]> {
    let message = session.catalog().messages.get(index)?;
    Some([
        message.reference(),
        message.msgid.trim_end().to_string(),
        message.msgstr.trim_end().to_string(),
    ])
}
