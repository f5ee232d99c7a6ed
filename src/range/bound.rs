use std::fmt::{Display, Formatter};
use Bound::{Finite, NegInf, PosInf};

/// The largest integer accepted by the textual notation.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// The smallest integer accepted by the textual notation.
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// One endpoint of a segment.
// Variant order matters: the derived ordering must give
// NegInf < Finite(_) < PosInf.
#[derive(Ord, PartialOrd, Eq, PartialEq, Clone, Copy, Hash, Debug)]
pub enum Bound {
    NegInf,
    Finite(i64),
    PosInf,
}

impl Bound {
    /// `true` if this endpoint is an ordinary integer.
    pub fn is_finite(&self) -> bool {
        matches!(self, Finite(_))
    }

    /// The integer value of this endpoint, if it has one.
    pub fn finite(&self) -> Option<i64> {
        match self {
            Finite(v) => Some(*v),
            _ => None,
        }
    }

    /// The endpoint one above this one. Sentinels absorb the step, and finite
    /// values saturate at the i64 limits.
    pub fn succ(&self) -> Bound {
        match self {
            Finite(v) => Finite(v.saturating_add(1)),
            other => *other,
        }
    }

    /// The endpoint one below this one. Sentinels absorb the step, and finite
    /// values saturate at the i64 limits.
    pub fn pred(&self) -> Bound {
        match self {
            Finite(v) => Finite(v.saturating_sub(1)),
            other => *other,
        }
    }
}

impl From<i64> for Bound {
    fn from(value: i64) -> Self {
        Finite(value)
    }
}

impl Display for Bound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NegInf => f.write_str("-inf"),
            Finite(v) => write!(f, "{}", v),
            PosInf => f.write_str("inf"),
        }
    }
}
