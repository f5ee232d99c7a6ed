use ibig::UBig;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for fallible interval-set operations.
pub type RangeResult<T> = Result<T, MultiRangeError>;

/// Every failure an interval set can produce. All are local, synchronous
/// validation errors; none are retryable.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub enum MultiRangeError {
    /// An initializer element had the wrong shape.
    InvalidInput(String),
    /// A token did not match the textual grammar.
    InvalidSyntax(String),
    /// A parsed literal fell outside the safe integer domain.
    OutOfRange(String),
    /// An open-ended token appeared while unbounded parsing was disabled.
    UnexpectedUnbounded(String),
    /// Both endpoints of a requested range were the same sentinel.
    InvalidRange(String),
    /// A finite-only operation was invoked on an unbounded set.
    UnboundedOperation(String),
}

impl Display for MultiRangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MultiRangeError::InvalidInput(s) => write!(f, "invalid initializer: {}", s),
            MultiRangeError::InvalidSyntax(s) => write!(f, "invalid range syntax: {}", s),
            MultiRangeError::OutOfRange(s) => write!(f, "integer out of range: {}", s),
            MultiRangeError::UnexpectedUnbounded(s) => {
                write!(f, "unexpected unbounded range: {}", s)
            }
            MultiRangeError::InvalidRange(s) => write!(f, "invalid range: {}", s),
            MultiRangeError::UnboundedOperation(s) => {
                write!(f, "operation not allowed on an unbounded set: {}", s)
            }
        }
    }
}

impl Error for MultiRangeError {}

/// How many integers a set or segment holds.
#[derive(PartialEq, Eq, Clone, Hash, Debug)]
pub enum Cardinality {
    Finite(UBig),
    Infinite,
}

impl Cardinality {
    /// `true` if the count is not a finite number.
    pub fn is_infinite(&self) -> bool {
        matches!(self, Cardinality::Infinite)
    }

    /// The finite count, if there is one.
    pub fn finite(&self) -> Option<&UBig> {
        match self {
            Cardinality::Finite(n) => Some(n),
            Cardinality::Infinite => None,
        }
    }
}

impl Display for Cardinality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Cardinality::Finite(n) => write!(f, "{}", n),
            Cardinality::Infinite => f.write_str("infinite"),
        }
    }
}

/// Flags controlling which notations the parser accepts and how negative
/// values are serialized. Both default to off.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug, Default)]
pub struct ParseOptions {
    /// Accept parenthesized negative literals such as `(-5)`.
    pub parse_negative: bool,
    /// Accept open-ended tokens such as `5-`, `-5`, and the bare `-`.
    pub parse_unbounded: bool,
}
