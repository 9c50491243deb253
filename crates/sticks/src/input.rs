//! Whitespace-separated stick records: `N` then `N` lines of `x1 y1 x2 y2`.
//!
//! Line breaks carry no meaning; tokens past the N-th record are ignored.

use thiserror::Error;

use crate::geom2::Stick;
use crate::tally::StickSet;

/// Malformed stick input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is empty, expected a stick count")]
    MissingCount,

    /// `position` is the 1-based token index (the count is token 1).
    #[error("token {position} ({token:?}) is not a valid {expected}")]
    InvalidToken {
        position: usize,
        token: String,
        expected: &'static str,
    },

    #[error("expected {expected} sticks, input ended after {read}")]
    Truncated { expected: usize, read: usize },
}

/// Parse the stick count and records from `text`.
pub fn parse_sticks(text: &str) -> Result<StickSet, ParseError> {
    let mut tokens = text.split_ascii_whitespace().enumerate();
    let (_, first) = tokens.next().ok_or(ParseError::MissingCount)?;
    let n: usize = first.parse().map_err(|_| ParseError::InvalidToken {
        position: 1,
        token: first.to_string(),
        expected: "stick count",
    })?;
    // The count is untrusted; cap the up-front allocation.
    let mut set = StickSet::with_capacity(n.min(1 << 16));
    for read in 0..n {
        let mut coords = [0i64; 4];
        for slot in coords.iter_mut() {
            let (i, tok) = tokens
                .next()
                .ok_or(ParseError::Truncated { expected: n, read })?;
            *slot = tok.parse().map_err(|_| ParseError::InvalidToken {
                position: i + 1,
                token: tok.to_string(),
                expected: "integer coordinate",
            })?;
        }
        let [x1, y1, x2, y2] = coords;
        set.push(Stick::from_coords(x1, y1, x2, y2));
    }
    tracing::debug!(sticks = set.len(), distinct = set.tally().distinct(), "parsed sticks");
    Ok(set)
}
