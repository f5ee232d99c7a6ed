use crate::range::bound::Bound;
use crate::range::parse;
use crate::range::segment::Segment;
use crate::range::types::{Cardinality, MultiRangeError, ParseOptions, RangeResult};
use ibig::UBig;
use std::fmt::{Display, Formatter};
use std::iter::once;
use std::ops::RangeInclusive;
use std::str::FromStr;
use Bound::{Finite, NegInf, PosInf};

/// A set of integers held as a minimal ordered list of disjoint closed
/// segments. This can represent any subset of [-inf, inf] whose complement
/// or content is a finite union of spans.
///
/// The textual notation (`"1-3,5,7-"`) round-trips through [`MultiRange::parse`]
/// and [`Display`].
// Invariants: segments are sorted by their low endpoint; neighbors are
// separated by a gap of at least one integer; only the first segment may be
// open below and only the last may be open above.
#[derive(Clone, Debug, Default)]
pub struct MultiRange {
    segments: Vec<Segment>,
    options: ParseOptions,
}

/// Where an incoming segment lands in the existing list.
// `lo..lo + count` is the run of existing segments that overlap or touch the
// target; `union` is the single segment covering the run and the target.
struct Overlap {
    lo: usize,
    count: usize,
    union: Segment,
}

impl MultiRange {
    /// An empty set with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// An empty set carrying the given parsing/serialization options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            segments: Vec::new(),
            options,
        }
    }

    /// A set holding a single integer.
    pub fn from_value(value: i64) -> Self {
        let mut result = Self::new();
        result.append_value(value);
        result
    }

    /// Parses the textual notation under the given options.
    pub fn parse(text: &str, options: ParseOptions) -> RangeResult<Self> {
        parse::parse_string(text, options)
    }

    /// Builds a set from a mixed list of singletons (`[v]`) and pairs
    /// (`[min, max]`). Any other element shape is rejected before anything
    /// is committed.
    pub fn from_items(items: &[&[i64]]) -> RangeResult<Self> {
        for item in items {
            if item.len() != 1 && item.len() != 2 {
                return Err(MultiRangeError::InvalidInput(format!(
                    "initializer elements must have 1 or 2 integers, got {}",
                    item.len()
                )));
            }
        }

        let mut result = Self::new();
        for item in items {
            match **item {
                [value] => result.append_value(value),
                [min, max] => result.append_segment(Segment::new(min, max)),
                _ => unreachable!("shapes were checked above"),
            }
        }
        Ok(result)
    }

    /// The options this instance parses and serializes with.
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// The stored segment list.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Appends a range of integers to the set, merging it with every
    /// existing segment it overlaps or touches.
    ///
    /// Reversed endpoints are swapped. A range whose endpoints are the same
    /// sentinel is rejected; `[NegInf, PosInf]` is the universal set and is
    /// accepted.
    pub fn append_range<A: Into<Bound>, B: Into<Bound>>(
        &mut self,
        min: A,
        max: B,
    ) -> RangeResult<()> {
        let target = Segment::new(min, max);

        if matches!(
            (target.low(), target.high()),
            (NegInf, NegInf) | (PosInf, PosInf)
        ) {
            return Err(MultiRangeError::InvalidRange(
                "a sentinel can only bound one end of a segment".into(),
            ));
        }

        self.append_segment(target);
        Ok(())
    }

    /// Appends a single integer.
    pub fn append_value(&mut self, value: i64) {
        self.append_segment(Segment::point(value));
    }

    /// Appends every segment of another set.
    pub fn append(&mut self, other: &MultiRange) {
        for segment in &other.segments {
            self.append_segment(*segment);
        }
    }

    // Stored segments are already valid, so this skips endpoint validation.
    fn append_segment(&mut self, target: Segment) {
        let overlap = self.find_overlap(target);
        self.segments
            .splice(overlap.lo..overlap.lo + overlap.count, once(overlap.union));
    }

    /// Removes the integers in `[min, max]` from the set. Reversed endpoints
    /// are swapped; removing a range nothing overlaps is a no-op.
    pub fn subtract_range<A: Into<Bound>, B: Into<Bound>>(&mut self, min: A, max: B) {
        let target = Segment::new(min, max);
        let overlap = self.find_overlap(target);

        if overlap.count == 0 {
            return;
        }

        let first = self.segments[overlap.lo];
        let last = self.segments[overlap.lo + overlap.count - 1];
        let mut remain = Vec::with_capacity(2);

        if first.low() < target.low() {
            remain.push(Segment::new(first.low(), target.low().pred()));
        }
        if target.high() < last.high() {
            remain.push(Segment::new(target.high().succ(), last.high()));
        }

        self.segments
            .splice(overlap.lo..overlap.lo + overlap.count, remain);
    }

    /// Removes a single integer.
    pub fn subtract_value(&mut self, value: i64) {
        self.subtract_range(value, value);
    }

    /// Removes every segment of another set.
    pub fn subtract(&mut self, other: &MultiRange) {
        for segment in &other.segments {
            self.subtract_range(segment.low(), segment.high());
        }
    }

    /// Keeps only the integers also present in `other`.
    ///
    /// Runs in time linear in the combined segment count: both lists are
    /// walked once, advancing whichever segment ends first.
    pub fn intersect(&mut self, other: &MultiRange) {
        let mut result = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < self.segments.len() && j < other.segments.len() {
            let (a, b) = (self.segments[i], other.segments[j]);

            if let Some(common) = a.intersection(&b) {
                result.push(common);
            }

            if a.high() <= b.high() {
                i += 1;
            } else {
                j += 1;
            }
        }

        self.segments = result;
    }

    /// Determines how the target overlaps or touches the existing segments,
    /// scanning backward from the last segment.
    fn find_overlap(&self, target: Segment) -> Overlap {
        for hi in (0..self.segments.len()).rev() {
            let existing = self.segments[hi];

            if let Some(mut union) = existing.merge(&target) {
                let mut count = 1;
                while count <= hi {
                    match union.merge(&self.segments[hi - count]) {
                        Some(wider) => {
                            union = wider;
                            count += 1;
                        }
                        None => break,
                    }
                }
                // The target touches or overlaps `count` segments ending at `hi`.
                return Overlap {
                    lo: hi + 1 - count,
                    count,
                    union,
                };
            }

            if existing.high() < target.low() {
                // The target fits in the gap above `hi`.
                return Overlap {
                    lo: hi + 1,
                    count: 0,
                    union: target,
                };
            }
        }

        // The target sits below every existing segment.
        Overlap {
            lo: 0,
            count: 0,
            union: target,
        }
    }

    /// `true` if the set holds the given integer.
    pub fn contains(&self, value: i64) -> bool {
        self.contains_range(value, value)
    }

    /// `true` if a *single* stored segment covers all of `[min, max]`.
    /// A span that straddles two stored segments is not contained.
    pub fn contains_range<A: Into<Bound>, B: Into<Bound>>(&self, min: A, max: B) -> bool {
        self.covers(Segment::new(min, max))
    }

    /// `true` if every segment of `other` lies inside a single stored
    /// segment of `self`.
    pub fn contains_set(&self, other: &MultiRange) -> bool {
        other.segments.iter().all(|segment| self.covers(*segment))
    }

    fn covers(&self, target: Segment) -> bool {
        // Only the first stored segment ending at or after the target's low
        // can contain the target.
        let idx = self
            .segments
            .partition_point(|segment| segment.high() < target.low());

        match self.segments.get(idx) {
            Some(segment) => segment.contains(&target),
            None => false,
        }
    }

    /// The smallest endpoint, or `None` for an empty set. May be `NegInf`.
    pub fn min(&self) -> Option<Bound> {
        self.segments.first().map(|segment| segment.low())
    }

    /// The largest endpoint, or `None` for an empty set. May be `PosInf`.
    pub fn max(&self) -> Option<Bound> {
        self.segments.last().map(|segment| segment.high())
    }

    /// How many integers the set holds.
    pub fn len(&self) -> Cardinality {
        let mut total = UBig::from(0usize);

        for segment in &self.segments {
            match segment.len() {
                Cardinality::Finite(n) => total += n,
                Cardinality::Infinite => return Cardinality::Infinite,
            }
        }

        Cardinality::Finite(total)
    }

    /// `true` if the set holds no integers.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The number of disjoint stored segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// `true` if the set extends forever in either direction.
    pub fn is_unbounded(&self) -> bool {
        matches!(self.min(), Some(NegInf)) || matches!(self.max(), Some(PosInf))
    }

    /// Removes and returns the smallest integer, or `Ok(None)` for an empty
    /// set. Fails if the set is open below.
    pub fn shift(&mut self) -> RangeResult<Option<i64>> {
        match self.min() {
            None => Ok(None),
            Some(Finite(value)) => {
                self.subtract_range(value, value);
                Ok(Some(value))
            }
            Some(_) => Err(MultiRangeError::UnboundedOperation(
                "cannot shift from a set with an unbounded minimum".into(),
            )),
        }
    }

    /// Removes and returns the largest integer, or `Ok(None)` for an empty
    /// set. Fails if the set is open above.
    pub fn pop(&mut self) -> RangeResult<Option<i64>> {
        match self.max() {
            None => Ok(None),
            Some(Finite(value)) => {
                self.subtract_range(value, value);
                Ok(Some(value))
            }
            Some(_) => Err(MultiRangeError::UnboundedOperation(
                "cannot pop from a set with an unbounded maximum".into(),
            )),
        }
    }

    /// Materializes every integer in ascending order.
    ///
    /// This may be slow and memory-hungry for large sets; prefer [`iter`]
    /// where possible.
    ///
    /// [`iter`]: MultiRange::iter
    pub fn to_vec(&self) -> RangeResult<Vec<i64>> {
        if self.is_unbounded() {
            return Err(MultiRangeError::UnboundedOperation(
                "cannot build an array from an unbounded set".into(),
            ));
        }

        let mut result = Vec::new();
        for segment in &self.segments {
            match (segment.low(), segment.high()) {
                (Finite(lo), Finite(hi)) => result.extend(lo..=hi),
                _ => unreachable!("a bounded set has only finite segments"),
            }
        }
        Ok(result)
    }

    /// A lazy ascending iterator over every integer in the set. Each call
    /// starts a fresh traversal of the current segment list; an unbounded
    /// set fails here rather than iterating forever.
    pub fn iter(&self) -> RangeResult<ValueIter<'_>> {
        if self.is_unbounded() {
            return Err(MultiRangeError::UnboundedOperation(
                "cannot iterate over an unbounded set".into(),
            ));
        }

        Ok(ValueIter {
            segments: self.segments.iter(),
            current: None,
        })
    }
}

/// Iterator returned by [`MultiRange::iter`], yielding integers from lowest
/// to highest.
#[derive(Clone, Debug)]
pub struct ValueIter<'a> {
    segments: std::slice::Iter<'a, Segment>,
    current: Option<RangeInclusive<i64>>,
}

impl<'a> Iterator for ValueIter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            if let Some(values) = &mut self.current {
                if let Some(value) = values.next() {
                    return Some(value);
                }
            }

            let segment = self.segments.next()?;
            match (segment.low(), segment.high()) {
                (Finite(lo), Finite(hi)) => self.current = Some(lo..=hi),
                _ => unreachable!("a bounded set has only finite segments"),
            }
        }
    }
}

// Equality compares the segment lists only; two sets holding the same
// integers under different options are equal.
impl PartialEq for MultiRange {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for MultiRange {}

impl From<i64> for MultiRange {
    fn from(value: i64) -> Self {
        Self::from_value(value)
    }
}

impl From<(i64, i64)> for MultiRange {
    fn from((min, max): (i64, i64)) -> Self {
        let mut result = Self::new();
        result.append_segment(Segment::new(min, max));
        result
    }
}

impl FromIterator<i64> for MultiRange {
    fn from_iter<I: IntoIterator<Item = i64>>(values: I) -> Self {
        let mut result = Self::new();
        for value in values {
            result.append_value(value);
        }
        result
    }
}

impl FromIterator<(i64, i64)> for MultiRange {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(pairs: I) -> Self {
        let mut result = Self::new();
        for (min, max) in pairs {
            result.append_segment(Segment::new(min, max));
        }
        result
    }
}

impl FromStr for MultiRange {
    type Err = MultiRangeError;

    fn from_str(text: &str) -> RangeResult<Self> {
        Self::parse(text, ParseOptions::default())
    }
}

impl Display for MultiRange {
    /// Writes the canonical notation: segments joined by commas, each
    /// `A`, `A-B`, `A-`, `-B`, or `-`. Negative values are parenthesized
    /// only when negative parsing is enabled for this instance.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let wrap = self.options.parse_negative;

        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }

            match (segment.low(), segment.high()) {
                (NegInf, PosInf) => f.write_str("-")?,
                (NegInf, Finite(hi)) => {
                    f.write_str("-")?;
                    write_value(f, hi, wrap)?;
                }
                (Finite(lo), PosInf) => {
                    write_value(f, lo, wrap)?;
                    f.write_str("-")?;
                }
                (Finite(lo), Finite(hi)) if lo == hi => write_value(f, lo, wrap)?,
                (Finite(lo), Finite(hi)) => {
                    write_value(f, lo, wrap)?;
                    f.write_str("-")?;
                    write_value(f, hi, wrap)?;
                }
                _ => unreachable!("a segment is never bounded above by -inf or below by inf"),
            }
        }

        Ok(())
    }
}

fn write_value(f: &mut Formatter<'_>, value: i64, parenthesize: bool) -> std::fmt::Result {
    if parenthesize && value < 0 {
        write!(f, "({})", value)
    } else {
        write!(f, "{}", value)
    }
}
