use serde::{Deserialize, Serialize};

use crate::model::{DrawingConfiguration, Frame};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    AddSelectedFrames {
        frames: Vec<Frame>,
    },
    ClearSelectedFrames,
    RemoveSelectedFrame {
        frame: Frame,
    },
    UpdateDrawingConfiguration {
        config: DrawingConfiguration,
        remember: bool,
    },
}
