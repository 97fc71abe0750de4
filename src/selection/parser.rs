use serde::Serialize;

use crate::model::{Frame, FrameRange};

/// Frames parsed from user text plus the number of tokens that were dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ParsedFrames {
    pub frames: Vec<Frame>,
    pub dropped: usize,
}

/// Parses comma/whitespace separated frame numbers, clamped into `range`.
///
/// Tokens without a leading integer are skipped; order and duplicates are kept.
pub fn parse_frames(raw: &str, range: FrameRange) -> Vec<Frame> {
    parse_frames_with_report(raw, range).frames
}

pub fn parse_frames_with_report(raw: &str, range: FrameRange) -> ParsedFrames {
    let mut parsed = ParsedFrames::default();
    for token in raw
        .split(is_separator)
        .filter(|token| !token.is_empty())
    {
        match leading_integer(token) {
            Some(value) => parsed.frames.push(range.clamp(value)),
            None => parsed.dropped += 1,
        }
    }
    if parsed.dropped > 0 {
        log::debug!("dropped {} unparsable frame token(s)", parsed.dropped);
    }
    parsed
}

// Unicode whitespace plus the byte-order mark, minus NEL.
fn is_separator(ch: char) -> bool {
    ch == ',' || ch == '\u{FEFF}' || (ch.is_whitespace() && ch != '\u{85}')
}

/// Base-10 integer prefix of `token`: optional sign, then a run of digits.
/// Anything after the digits is ignored; overlong runs saturate.
fn leading_integer(token: &str) -> Option<i64> {
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let run = digits.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen = false;
    for digit in run {
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }
    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}
