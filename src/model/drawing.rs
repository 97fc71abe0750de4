use serde::{Deserialize, Serialize};

use super::{LabelId, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Tag,
    #[default]
    Shape,
}

/// What the next drawing action creates.
///
/// `active_shape_type` is inert while `active_object_type` is [`ObjectKind::Tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingConfiguration {
    #[serde(rename = "activeLabelID", default)]
    pub active_label_id: Option<LabelId>,
    #[serde(default)]
    pub active_object_type: ObjectKind,
    #[serde(default)]
    pub active_shape_type: Option<ShapeKind>,
}

impl DrawingConfiguration {
    pub fn new(
        active_label_id: Option<LabelId>,
        active_object_type: ObjectKind,
        active_shape_type: Option<ShapeKind>,
    ) -> Self {
        Self {
            active_label_id,
            active_object_type,
            active_shape_type,
        }
    }

    /// Shape the next object will have, `None` when drawing tags.
    pub fn effective_shape(&self) -> Option<ShapeKind> {
        match self.active_object_type {
            ObjectKind::Tag => None,
            ObjectKind::Shape => self.active_shape_type,
        }
    }
}
