use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{
    CoreError, DrawingConfiguration, FrameRange, Label, Result, SelectedFrameSet,
};

use super::Intent;

/// Snapshot of the session state this crate reads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// Frame range of the opened job, if any.
    #[serde(default)]
    pub job: Option<FrameRange>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub drawing: DrawingConfiguration,
    #[serde(default)]
    pub selected_frames: SelectedFrameSet,
}

impl SessionState {
    /// Falls back to `[0, 0]` when no job is open.
    pub fn frame_range(&self) -> FrameRange {
        self.job.unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        let range = self.frame_range();
        range.validate()?;
        let mut seen = HashSet::with_capacity(self.labels.len());
        for label in &self.labels {
            if !seen.insert(label.id) {
                return Err(CoreError::DuplicateLabel(label.id));
            }
        }
        self.selected_frames.validate_within(&range)
    }

    pub fn apply(&mut self, intent: &Intent) {
        match intent {
            Intent::AddSelectedFrames { frames } => {
                self.selected_frames.extend_unique(frames);
            }
            Intent::ClearSelectedFrames => self.selected_frames.clear(),
            Intent::RemoveSelectedFrame { frame } => {
                self.selected_frames.remove(*frame);
            }
            Intent::UpdateDrawingConfiguration { config, .. } => self.drawing = *config,
        }
    }
}
