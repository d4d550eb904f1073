//! Numeric input parsing.

use crate::EvalError;
use std::num::IntErrorKind;

/// Parse a decimal integer.
///
/// Surrounding whitespace is ignored and `_` may be used as a digit
/// separator (`2_000_000_000`). Values that do not fit in an `i64` are
/// reported as [`EvalError::Overflow`] rather than wrapped.
pub fn parse_number(text: &str) -> Result<i64, EvalError> {
    let trimmed = text.trim();
    let digits: String = trimmed.chars().filter(|c| *c != '_').collect();

    // Each separator sits between two digits.
    let bytes = trimmed.as_bytes();
    let misplaced = bytes.iter().enumerate().any(|(i, &b)| {
        b == b'_'
            && !(i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if misplaced {
        return Err(EvalError::InvalidNumber(text.to_string()));
    }

    digits.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            EvalError::Overflow(format!("{trimmed} does not fit in a 64-bit signed integer"))
        }
        _ => EvalError::InvalidNumber(text.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_number("15"), Ok(15));
        assert_eq!(parse_number("-4000123124"), Ok(-4_000_123_124));
        assert_eq!(parse_number("  +7 "), Ok(7));
    }

    #[test]
    fn test_parse_separators() {
        assert_eq!(parse_number("2_000_000_000"), Ok(2_000_000_000));
        assert!(matches!(parse_number("_12"), Err(EvalError::InvalidNumber(_))));
        assert!(matches!(parse_number("-_12"), Err(EvalError::InvalidNumber(_))));
        assert!(matches!(parse_number("12_"), Err(EvalError::InvalidNumber(_))));
        assert!(matches!(parse_number("1__000"), Err(EvalError::InvalidNumber(_))));
        assert_eq!(parse_number("-1_000"), Ok(-1000));
    }

    #[test]
    fn test_parse_limits() {
        assert_eq!(parse_number("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse_number("-9223372036854775808"), Ok(i64::MIN));
        assert!(matches!(parse_number("9223372036854775808"), Err(EvalError::Overflow(_))));
        assert!(matches!(parse_number("-9223372036854775809"), Err(EvalError::Overflow(_))));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(parse_number(""), Err(EvalError::InvalidNumber(_))));
        assert!(matches!(parse_number("fizz"), Err(EvalError::InvalidNumber(_))));
        assert!(matches!(parse_number("1.5"), Err(EvalError::InvalidNumber(_))));
    }
}
