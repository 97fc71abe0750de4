use crate::model::{Frame, FrameRange};
use crate::selection::{ParsedFrames, parse_frames_with_report};

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct FrameService;

impl FrameService {
    pub fn parse(&self, raw: &str, start: Frame, stop: Frame) -> Result<ParsedFrames> {
        let range = FrameRange::new(start, stop)?;
        Ok(parse_frames_with_report(raw, range))
    }
}
