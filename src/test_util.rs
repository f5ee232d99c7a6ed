use crate::range::multi_range::MultiRange;
use crate::range::segment::Segment;
use crate::range::types::ParseOptions;
use ibig::UBig;

/// Parses the notation with default options, panicking on failure.
pub fn mr(text: &str) -> MultiRange {
    MultiRange::parse(text, ParseOptions::default()).unwrap()
}

/// Parses the notation with negative and unbounded input enabled.
pub fn mru(text: &str) -> MultiRange {
    MultiRange::parse(
        text,
        ParseOptions {
            parse_negative: true,
            parse_unbounded: true,
        },
    )
    .unwrap()
}

pub fn seg(low: i64, high: i64) -> Segment {
    Segment::new(low, high)
}

pub fn ub<A: Into<UBig>>(n: A) -> UBig {
    n.into()
}
