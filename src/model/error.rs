use thiserror::Error;

use super::{Frame, LabelId};

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid frame range: start frame {start} is after stop frame {stop}")]
    InvalidFrameRange { start: Frame, stop: Frame },

    #[error("frame {frame} is outside the job range [{start}, {stop}]")]
    FrameOutOfRange {
        frame: Frame,
        start: Frame,
        stop: Frame,
    },

    #[error("label id {0} appears more than once in the label catalogue")]
    DuplicateLabel(LabelId),

    #[error("unknown label id: {0}")]
    UnknownLabel(LabelId),
}
