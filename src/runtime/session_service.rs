use std::path::Path;

use crate::model::{CoreError, Frame, LabelId};
use crate::panel::SelectedFramesPanel;
use crate::session::{load_session, save_session};
use crate::store::{MemoryStore, SessionState};

use super::Result;

/// Batch of panel events, replayed as trace label, clear, adds, removals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelActions {
    pub trace_label: Option<LabelId>,
    pub clear: bool,
    pub add: Vec<String>,
    pub remove: Vec<Frame>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SessionService;

impl SessionService {
    pub fn load(&self, path: impl AsRef<Path>) -> Result<SessionState> {
        Ok(load_session(path)?)
    }

    pub fn save(&self, path: impl AsRef<Path>, session: &SessionState) -> Result<()> {
        save_session(path, session)?;
        Ok(())
    }

    /// Fails without applying anything when the trace label is not in the catalogue.
    pub fn apply(&self, session: SessionState, actions: &PanelActions) -> Result<SessionState> {
        let mut panel = SelectedFramesPanel::new(MemoryStore::new(session));
        if let Some(label_id) = actions.trace_label {
            if !panel.choose_trace_label(label_id) {
                return Err(CoreError::UnknownLabel(label_id).into());
            }
        }
        if actions.clear {
            panel.clear();
        }
        for text in &actions.add {
            panel.set_input(text.as_str());
            let dropped = panel.submit().map_or(0, |parsed| parsed.dropped);
            if dropped > 0 {
                log::warn!("ignored {dropped} invalid frame token(s) in {text:?}");
            }
        }
        for frame in &actions.remove {
            panel.remove_frame(*frame);
        }
        Ok(panel.into_store().into_state())
    }
}
