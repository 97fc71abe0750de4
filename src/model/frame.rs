use serde::{Deserialize, Serialize};

use super::{CoreError, Result};

pub type Frame = u32;

/// Inclusive `[start, stop]` frame range of the active job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameRange {
    pub start: Frame,
    pub stop: Frame,
}

impl FrameRange {
    pub fn new(start: Frame, stop: Frame) -> Result<Self> {
        let range = Self { start, stop };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if self.start > self.stop {
            return Err(CoreError::InvalidFrameRange {
                start: self.start,
                stop: self.stop,
            });
        }
        Ok(())
    }

    pub fn contains(&self, frame: Frame) -> bool {
        self.start <= frame && frame <= self.stop
    }

    /// Clamps without requiring `start <= stop`: the lower bound is applied
    /// first, so an inverted range yields `stop`.
    pub fn clamp(&self, value: i64) -> Frame {
        let clamped = value.max(i64::from(self.start)).min(i64::from(self.stop));
        clamped as Frame
    }

    pub fn len(&self) -> usize {
        if self.start > self.stop {
            0
        } else {
            (self.stop - self.start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered frame selection; membership is set-like, order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Frame>", into = "Vec<Frame>")]
pub struct SelectedFrameSet {
    frames: Vec<Frame>,
}

impl SelectedFrameSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn contains(&self, frame: Frame) -> bool {
        self.frames.contains(&frame)
    }

    /// Appends frames that are not selected yet and returns how many were added.
    pub fn extend_unique(&mut self, frames: &[Frame]) -> usize {
        let before = self.frames.len();
        for frame in frames {
            if !self.frames.contains(frame) {
                self.frames.push(*frame);
            }
        }
        self.frames.len() - before
    }

    pub fn remove(&mut self, frame: Frame) -> bool {
        match self.frames.iter().position(|selected| *selected == frame) {
            Some(index) => {
                self.frames.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn validate_within(&self, range: &FrameRange) -> Result<()> {
        match self.frames.iter().find(|frame| !range.contains(**frame)) {
            Some(frame) => Err(CoreError::FrameOutOfRange {
                frame: *frame,
                start: range.start,
                stop: range.stop,
            }),
            None => Ok(()),
        }
    }
}

impl From<Vec<Frame>> for SelectedFrameSet {
    fn from(frames: Vec<Frame>) -> Self {
        let mut set = Self::new();
        set.extend_unique(&frames);
        set
    }
}

impl From<SelectedFrameSet> for Vec<Frame> {
    fn from(set: SelectedFrameSet) -> Self {
        set.frames
    }
}
