mod drawing;
mod error;
mod frame;
mod label;

#[cfg(test)]
mod tests;

pub use drawing::{DrawingConfiguration, ObjectKind};
pub use error::{CoreError, Result};
pub use frame::{Frame, FrameRange, SelectedFrameSet};
pub use label::{Label, LabelId, LabelKind, ShapeKind, find_label};
