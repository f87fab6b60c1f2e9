use std::ops::Range;
use std::str::FromStr;

use thiserror::Error;

use crate::engine::{Edge, index_from_f64};

/// A navigation request from the renderer (arrow click, dot click, swipe).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// Jump to an anchor; `None` is an undefined target and resolves to a no-op.
    GoTo(Option<isize>),
    Next,
    Prev,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognised navigation request: {0:?} (expected next, prev or goto:N)")]
pub struct ParseNavRequestError(pub String);

impl FromStr for NavRequest {
    type Err = ParseNavRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let (kind, arg) = match raw.split_once(':') {
            Some((kind, arg)) => (kind, Some(arg)),
            None => (raw, None),
        };
        match (kind.to_ascii_lowercase().as_str(), arg) {
            ("next", None) => Ok(Self::Next),
            ("prev", None) => Ok(Self::Prev),
            ("goto" | "go-to", arg) => Ok(Self::GoTo(arg.and_then(parse_index))),
            _ => Err(ParseNavRequestError(raw.to_string())),
        }
    }
}

/// Lenient index parsing for values lifted out of markup: integers parse
/// directly, decimals truncate, anything else is undefined.
pub fn parse_index(raw: &str) -> Option<isize> {
    let raw = raw.trim();
    raw.parse::<isize>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().and_then(index_from_f64))
}

/// What the renderer should do in response to a navigation outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Apply `translateX(offset)` and mark `active` slides.
    Translate {
        offset: f64,
        delta: f64,
        active: Range<usize>,
    },
    /// Start the boundary bump on the given edge.
    Bump(Edge),
    /// Bump duration elapsed; remove the bump styling.
    ClearBump(Edge),
}
