use crate::range::bound::{Bound, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
use crate::range::multi_range::MultiRange;
use crate::range::types::{MultiRangeError, ParseOptions, RangeResult};
use ibig::IBig;

/// One side of a token, scanned but not yet converted to an integer.
#[derive(Clone, Copy, Debug)]
struct Literal<'a> {
    digits: &'a str,
    negative: bool,
}

/// Parses the textual notation into a fresh set carrying the given options.
///
/// All whitespace is stripped before tokenizing, so `"1 - 3"` is `"1-3"` and
/// `"1 2"` is `"12"`. An empty (or all-whitespace) input is the empty set.
pub(super) fn parse_string(text: &str, options: ParseOptions) -> RangeResult<MultiRange> {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut result = MultiRange::with_options(options);

    if stripped.is_empty() {
        return Ok(result);
    }

    for token in stripped.split(',') {
        append_token(&mut result, token, options)?;
    }

    Ok(result)
}

fn append_token(result: &mut MultiRange, token: &str, options: ParseOptions) -> RangeResult<()> {
    let bytes = token.as_bytes();
    let (pos, first) = scan_literal(token, 0, options.parse_negative);

    if pos == token.len() {
        return match first {
            Some(literal) => {
                result.append_value(convert(&literal, token)?);
                Ok(())
            }
            None => Err(invalid_syntax(token)),
        };
    }

    if bytes[pos] != b'-' {
        return Err(invalid_syntax(token));
    }

    let (end, second) = scan_literal(token, pos + 1, options.parse_negative);
    if end != token.len() {
        return Err(invalid_syntax(token));
    }

    // The open-notation check comes before literal conversion, so an
    // oversized literal in an open token reports the unbounded error.
    if !options.parse_unbounded && (first.is_none() || second.is_none()) {
        return Err(MultiRangeError::UnexpectedUnbounded(format!(
            "'{}' is open-ended, which the options do not allow",
            token
        )));
    }

    let low = match first {
        Some(literal) => Bound::Finite(convert(&literal, token)?),
        None => Bound::NegInf,
    };
    let high = match second {
        Some(literal) => Bound::Finite(convert(&literal, token)?),
        None => Bound::PosInf,
    };

    result.append_range(low, high)?;
    Ok(())
}

/// Scans one integer literal starting at `start`: a digit run, or, when
/// negative literals are enabled, a parenthesized optionally-signed digit run.
/// Returns the position after the literal, or `(start, None)` if none is
/// present there.
fn scan_literal(token: &str, start: usize, parse_negative: bool) -> (usize, Option<Literal<'_>>) {
    let bytes = token.as_bytes();

    let digit_run_end = |from: usize| {
        let mut end = from;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        end
    };

    if start < bytes.len() && bytes[start].is_ascii_digit() {
        let end = digit_run_end(start);
        return (
            end,
            Some(Literal {
                digits: &token[start..end],
                negative: false,
            }),
        );
    }

    if parse_negative && start < bytes.len() && bytes[start] == b'(' {
        let mut pos = start + 1;
        let negative = pos < bytes.len() && bytes[pos] == b'-';
        if negative {
            pos += 1;
        }

        let end = digit_run_end(pos);
        if end == pos || end >= bytes.len() || bytes[end] != b')' {
            return (start, None);
        }

        return (
            end + 1,
            Some(Literal {
                digits: &token[pos..end],
                negative,
            }),
        );
    }

    (start, None)
}

/// Converts a scanned literal, enforcing the safe integer domain. The digits
/// are read as a big integer first so an oversized literal cannot overflow on
/// the way to being rejected.
fn convert(literal: &Literal, token: &str) -> RangeResult<i64> {
    let magnitude: IBig = literal
        .digits
        .parse()
        .map_err(|_| invalid_syntax(token))?;
    let value = if literal.negative {
        -magnitude
    } else {
        magnitude
    };

    if value < IBig::from(MIN_SAFE_INTEGER) || IBig::from(MAX_SAFE_INTEGER) < value {
        return Err(MultiRangeError::OutOfRange(format!(
            "'{}' is too big or too small",
            token
        )));
    }

    Ok(i64::try_from(value).unwrap())
}

fn invalid_syntax(token: &str) -> MultiRangeError {
    MultiRangeError::InvalidSyntax(format!("'{}' is not an integer or a range", token))
}
