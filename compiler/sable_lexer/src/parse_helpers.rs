//! Numeric literal parsing.
//!
//! The raw scanner keeps malformed digit runs together as one token; the
//! helpers here do the strict work: separator placement, radix digit
//! checks, and overflow-checked accumulation.

/// Why an integer literal failed to parse.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum IntParseError {
    /// Value exceeds `u64::MAX`.
    Overflow,
    /// Byte offset (within the digit run) of a digit outside the radix,
    /// e.g. the `9` in `0o19`.
    InvalidDigit(usize),
}

/// Validate `_` placement in a digit run: every separator must sit
/// between two digits of the radix. Returns the offset of the first
/// misplaced separator.
///
/// The run excludes any radix prefix, so a leading `_` (as in `0x_1` or
/// `_1`) is always misplaced.
pub(crate) fn validate_separators(run: &[u8], radix: u32) -> Result<(), usize> {
    for (i, &b) in run.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let prev_ok = i > 0 && is_radix_digit(run[i - 1], radix);
        let next_ok = i + 1 < run.len() && is_radix_digit(run[i + 1], radix);
        if !prev_ok || !next_ok {
            return Err(i);
        }
    }
    Ok(())
}

fn is_radix_digit(b: u8, radix: u32) -> bool {
    char::from(b).to_digit(radix).is_some()
}

/// Parse a digit run (separators allowed, prefix excluded) into a `u64`
/// with overflow checking.
pub(crate) fn parse_int(run: &[u8], radix: u32) -> Result<u64, IntParseError> {
    let mut value: u64 = 0;
    for (i, &b) in run.iter().enumerate() {
        if b == b'_' {
            continue;
        }
        let digit = char::from(b)
            .to_digit(radix)
            .ok_or(IntParseError::InvalidDigit(i))?;
        value = value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(IntParseError::Overflow)?;
    }
    Ok(value)
}

/// Parse a decimal float lexeme, ignoring separators. Separator placement
/// is validated separately. Values beyond `f64` range return `None`;
/// `str::parse` rounds them to infinity, which would silently change the
/// value.
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    let parsed: Option<f64> = if text.contains('_') {
        let stripped: String = text.chars().filter(|&c| c != '_').collect();
        stripped.parse().ok()
    } else {
        text.parse().ok()
    };
    parsed.filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn separators_between_digits_are_valid() {
        assert_eq!(validate_separators(b"1_000_000", 10), Ok(()));
        assert_eq!(validate_separators(b"Dead_Beef", 16), Ok(()));
        assert_eq!(validate_separators(b"1010", 2), Ok(()));
    }

    #[test]
    fn misplaced_separators_report_offset() {
        assert_eq!(validate_separators(b"_1", 10), Err(0));
        assert_eq!(validate_separators(b"1_", 10), Err(1));
        assert_eq!(validate_separators(b"1__0", 10), Err(1));
        assert_eq!(validate_separators(b"1_.5", 10), Err(1));
        assert_eq!(validate_separators(b"_1", 16), Err(0));
    }

    #[test]
    fn parse_int_values() {
        assert_eq!(parse_int(b"0", 10), Ok(0));
        assert_eq!(parse_int(b"1_000", 10), Ok(1000));
        assert_eq!(parse_int(b"FF", 16), Ok(255));
        assert_eq!(parse_int(b"17", 8), Ok(15));
        assert_eq!(parse_int(b"1010", 2), Ok(10));
    }

    #[test]
    fn parse_int_max_and_overflow() {
        assert_eq!(parse_int(b"18446744073709551615", 10), Ok(u64::MAX));
        assert_eq!(
            parse_int(b"18446744073709551616", 10),
            Err(IntParseError::Overflow)
        );
        assert_eq!(
            parse_int(b"FFFFFFFFFFFFFFFFF", 16),
            Err(IntParseError::Overflow)
        );
    }

    #[test]
    fn parse_int_rejects_out_of_radix_digits() {
        assert_eq!(parse_int(b"19", 8), Err(IntParseError::InvalidDigit(1)));
        assert_eq!(parse_int(b"12", 2), Err(IntParseError::InvalidDigit(1)));
    }

    #[test]
    fn parse_float_values() {
        assert_eq!(parse_float("10.5"), Some(10.5));
        assert_eq!(parse_float("1_000.000_1"), Some(1000.0001));
        assert_eq!(parse_float("1e9"), Some(1e9));
        assert_eq!(parse_float("1.5e-3"), Some(1.5e-3));
    }

    #[test]
    fn parse_float_out_of_range_is_rejected() {
        assert_eq!(parse_float("1e999"), None);
        assert_eq!(parse_float("18e308"), None);
        // Underflow to zero is in range.
        assert_eq!(parse_float("1e-999"), Some(0.0));
    }
}
