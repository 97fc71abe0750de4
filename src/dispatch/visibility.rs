use serde::Serialize;

use crate::model::{Label, LabelId};

/// Entry of the trace-label picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelOption {
    pub value: LabelId,
    pub label: String,
}

/// Selection shown in the trace-label picker: the active label unless it is
/// missing from the catalogue or is a tag label.
pub fn trace_label_id(labels: &[Label], active_label_id: Option<LabelId>) -> Option<LabelId> {
    let active = active_label_id?;
    labels
        .iter()
        .any(|label| label.id == active && !label.kind.is_tag())
        .then_some(active)
}

pub fn trace_label_options(labels: &[Label]) -> Vec<LabelOption> {
    labels
        .iter()
        .filter(|label| !label.kind.is_tag())
        .map(|label| LabelOption {
            value: label.id,
            label: label.name.clone(),
        })
        .collect()
}
