use serde::Serialize;

use crate::dispatch::{LabelOption, resolve_drawing, trace_label_id, trace_label_options};
use crate::model::{CoreError, DrawingConfiguration, LabelId, find_label};
use crate::store::SessionState;

use super::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceSelection {
    pub trace_label: Option<LabelId>,
    pub options: Vec<LabelOption>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LabelService;

impl LabelService {
    pub fn resolve(&self, session: &SessionState, label_id: LabelId) -> Result<DrawingConfiguration> {
        let label =
            find_label(&session.labels, label_id).ok_or(CoreError::UnknownLabel(label_id))?;
        Ok(resolve_drawing(label, &session.drawing))
    }

    pub fn trace(&self, session: &SessionState) -> TraceSelection {
        TraceSelection {
            trace_label: trace_label_id(&session.labels, session.drawing.active_label_id),
            options: trace_label_options(&session.labels),
        }
    }
}
