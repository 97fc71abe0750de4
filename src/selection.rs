mod parser;


pub use parser::{ParsedFrames, parse_frames, parse_frames_with_report};
