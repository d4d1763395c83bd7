use std::path::PathBuf;

use log::{info, warn};
use rp_core::workspace::{save_catalog, Workspace};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppAction {
    Open(Workspace),
    SelectParagraph(usize),
    SelectMessage(usize),
    /// Paragraph row button: pair that paragraph with the selected message.
    PairParagraph(usize),
    PairSelected,
    /// Message row button: reset that message's msgstr.
    ClearMessage(usize),
    Undo,
    Redo,
    Save,
    SaveAsPath(PathBuf),
    Quit,
}

pub fn dispatch(state: &mut AppState, action: AppAction) -> Result<(), AppError> {
    let result = apply(state, action);
    match &result {
        Ok(()) => state.error = None,
        Err(err) => {
            warn!("{err}");
            state.report_error(err);
        }
    }
    result
}

fn apply(state: &mut AppState, action: AppAction) -> Result<(), AppError> {
    match action {
        AppAction::Open(workspace) => {
            state.open(workspace)?;
        }
        AppAction::SelectParagraph(index) => {
            state.session.select_paragraph(index)?;
        }
        AppAction::SelectMessage(index) => {
            state.session.select_message(index)?;
        }
        AppAction::PairParagraph(index) => {
            let outcome = state.session.pair_paragraph(index)?;
            info!("paragraph {index} -> message {}", outcome.message);
            state.file_status = format!("paragraph {index} -> message {}", outcome.message);
            state.record(outcome);
        }
        AppAction::PairSelected => {
            let outcome = state.session.pair_selected()?;
            info!("selected paragraph -> message {}", outcome.message);
            state.file_status = format!("paired message {}", outcome.message);
            state.record(outcome);
        }
        AppAction::ClearMessage(index) => {
            let outcome = state.session.clear_message(index)?;
            info!("cleared message {index}");
            state.file_status = format!("cleared message {index}");
            state.record(outcome);
        }
        AppAction::Undo => {
            if state.undo() {
                state.file_status = "undo".to_string();
            }
        }
        AppAction::Redo => {
            if state.redo() {
                state.file_status = "redo".to_string();
            }
        }
        AppAction::Save => {
            let workspace = state.workspace.as_ref().ok_or(AppError::NothingLoaded)?;
            let path = workspace.save_merged(state.session.catalog(), &state.prefs.merged_dir)?;
            state.mark_saved(path);
        }
        AppAction::SaveAsPath(path) => {
            if state.workspace.is_none() {
                return Err(AppError::NothingLoaded);
            }
            save_catalog(state.session.catalog(), &path)?;
            state.mark_saved(path);
        }
        AppAction::Quit => {
            if state.dirty {
                warn!("quitting with unsaved pairings");
            }
            state.quit_requested = true;
        }
    }
    Ok(())
}
