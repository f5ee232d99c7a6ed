use crate::range::bound::Bound;
use crate::range::types::Cardinality;
use ibig::{IBig, UBig};
use std::cmp::{max, min};
use std::fmt::{Display, Formatter};
use Bound::Finite;

/// A single closed span of integers.
// low <= high at all times; the constructor swaps reversed endpoints.
#[derive(Ord, PartialOrd, Eq, PartialEq, Clone, Copy, Hash, Debug)]
pub struct Segment {
    low: Bound,
    high: Bound,
}

impl Segment {
    /// Makes a segment from two endpoints, swapping them if reversed.
    pub fn new<A: Into<Bound>, B: Into<Bound>>(low: A, high: B) -> Self {
        let (low, high) = (low.into(), high.into());

        if low <= high {
            Self { low, high }
        } else {
            Self {
                low: high,
                high: low,
            }
        }
    }

    /// Makes a segment of a single integer.
    pub fn point(value: i64) -> Self {
        Self {
            low: Finite(value),
            high: Finite(value),
        }
    }

    pub fn low(&self) -> Bound {
        self.low
    }

    pub fn high(&self) -> Bound {
        self.high
    }

    /// `true` if the given integer is in the segment.
    pub fn contains_value(&self, value: i64) -> bool {
        self.low <= Finite(value) && Finite(value) <= self.high
    }

    /// `true` if *all* of the integers in `other` are in `self`.
    pub fn contains(&self, other: &Segment) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    /// `true` if either endpoint is a sentinel.
    pub fn is_unbounded(&self) -> bool {
        !self.low.is_finite() || !self.high.is_finite()
    }

    /// The union of two segments that overlap or touch, or `None` when a gap
    /// of at least one integer separates them.
    pub fn merge(&self, other: &Segment) -> Option<Segment> {
        if self.high.succ() < other.low || self.low.pred() > other.high {
            return None;
        }

        Some(Segment {
            low: min(self.low, other.low),
            high: max(self.high, other.high),
        })
    }

    /// The segment of integers present in both inputs, or `None` when they
    /// are disjoint.
    pub fn intersection(&self, other: &Segment) -> Option<Segment> {
        if self.low > other.high || self.high < other.low {
            return None;
        }

        Some(Segment {
            low: max(self.low, other.low),
            high: min(self.high, other.high),
        })
    }

    /// How many integers the segment spans.
    pub fn len(&self) -> Cardinality {
        match (self.low, self.high) {
            (Finite(lo), Finite(hi)) => {
                Cardinality::Finite(UBig::try_from(IBig::from(hi) - IBig::from(lo) + 1).unwrap())
            }
            _ => Cardinality::Infinite,
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
