use serde::Serialize;

use crate::dispatch::LabelOption;
use crate::model::LabelId;

/// Render model of the selected-frames panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub trace_label: Option<LabelId>,
    pub options: Vec<LabelOption>,
    pub input: String,
    pub tags: Vec<String>,
    pub show_clear: bool,
}
