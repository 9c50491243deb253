//! Program result and its two renderings (text lines and JSON record).
//!
//! Text: `No` when not closed, otherwise `Yes`, the leftover-shape answer, and
//! the area with two decimals. The leftover-shape answer is a fixed `No`; it is
//! never derived from stick lengths.

use serde::Serialize;
use std::fmt;

/// Whether the leftover sticks can form the same shape again. Not computed.
pub const LEFTOVER_SAME_SHAPE: bool = false;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(into = "VerdictRecord")]
pub enum Verdict {
    NotClosed,
    Closed { area: f64 },
}

impl Verdict {
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, Verdict::Closed { .. })
    }
    #[inline]
    pub fn area(&self) -> Option<f64> {
        match *self {
            Verdict::Closed { area } => Some(area),
            Verdict::NotClosed => None,
        }
    }
}

#[inline]
fn yes_no(b: bool) -> &'static str {
    if b {
        "Yes"
    } else {
        "No"
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Verdict::NotClosed => f.write_str(yes_no(false)),
            Verdict::Closed { area } => write!(
                f,
                "{}\n{}\n{:.2}",
                yes_no(true),
                yes_no(LEFTOVER_SAME_SHAPE),
                area
            ),
        }
    }
}

/// JSON shape of a [`Verdict`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VerdictRecord {
    pub closed: bool,
    pub leftover_same_shape: Option<bool>,
    pub area: Option<f64>,
}

impl From<Verdict> for VerdictRecord {
    fn from(v: Verdict) -> Self {
        match v {
            Verdict::NotClosed => Self {
                closed: false,
                leftover_same_shape: None,
                area: None,
            },
            Verdict::Closed { area } => Self {
                closed: true,
                leftover_same_shape: Some(LEFTOVER_SAME_SHAPE),
                area: Some(area),
            },
        }
    }
}
