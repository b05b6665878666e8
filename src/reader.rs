//! Judge-format instance reading.
//!
//! The on-the-wire format is whitespace-separated text: one count `n`, then
//! exactly `n` signed 64-bit integers. Tokens past the declared count are
//! ignored. There is no recovery; malformed input surfaces as
//! [`InputFormatError`] and the caller decides how to fail.

use std::io::Read;

use thiserror::Error;

/// Why an instance could not be read.
#[derive(Debug, Error)]
pub enum InputFormatError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("input is empty, expected a count")]
    MissingCount,
    #[error("count token '{token}' is not a non-negative integer")]
    InvalidCount { token: String },
    #[error("value {position} ('{token}') is not a 64-bit integer")]
    InvalidToken { position: usize, token: String },
    #[error("input ended after {found} of {expected} values")]
    UnexpectedEnd { expected: usize, found: usize },
}

/// Read one instance from `reader` and return the sequence.
///
/// Consumes the stream to its end before tokenizing, so it composes with
/// pipes and files alike.
pub fn read_instance<R: Read>(mut reader: R) -> Result<Vec<i64>, InputFormatError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_instance(&text)
}

/// Parse one instance from in-memory text.
pub fn parse_instance(text: &str) -> Result<Vec<i64>, InputFormatError> {
    let mut tokens = text.split_ascii_whitespace();
    let count_token = tokens.next().ok_or(InputFormatError::MissingCount)?;
    let count: usize = count_token
        .parse()
        .map_err(|_| InputFormatError::InvalidCount {
            token: count_token.to_string(),
        })?;

    // Trust the count for sizing only up to a sane bound; a lying header
    // then fails with UnexpectedEnd instead of a huge allocation.
    let mut values = Vec::with_capacity(count.min(1 << 20));
    for position in 0..count {
        let token = tokens.next().ok_or(InputFormatError::UnexpectedEnd {
            expected: count,
            found: position,
        })?;
        let value = token
            .parse::<i64>()
            .map_err(|_| InputFormatError::InvalidToken {
                position,
                token: token.to_string(),
            })?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_count_then_values() {
        let seq = parse_instance("5\n3 2 5 10 7\n").unwrap();
        assert_eq!(seq, vec![3, 2, 5, 10, 7]);
    }

    #[test]
    fn whitespace_layout_is_irrelevant() {
        let seq = parse_instance("  3\t-1\n\n  2 \t 3 ").unwrap();
        assert_eq!(seq, vec![-1, 2, 3]);
    }

    #[test]
    fn zero_count_reads_no_values() {
        assert_eq!(parse_instance("0").unwrap(), Vec::<i64>::new());
        // Trailing garbage after the declared values is ignored.
        assert_eq!(parse_instance("0 not-a-number").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn empty_input_is_missing_count() {
        assert!(matches!(
            parse_instance("   \n\t "),
            Err(InputFormatError::MissingCount)
        ));
    }

    #[test]
    fn negative_count_is_rejected() {
        assert!(matches!(
            parse_instance("-3 1 2 3"),
            Err(InputFormatError::InvalidCount { .. })
        ));
    }

    #[test]
    fn truncated_input_reports_progress() {
        match parse_instance("4 1 2") {
            Err(InputFormatError::UnexpectedEnd { expected, found }) => {
                assert_eq!(expected, 4);
                assert_eq!(found, 2);
            }
            other => panic!("expected UnexpectedEnd, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_value_reports_position_and_token() {
        match parse_instance("3 1 x 3") {
            Err(InputFormatError::InvalidToken { position, token }) => {
                assert_eq!(position, 1);
                assert_eq!(token, "x");
            }
            other => panic!("expected InvalidToken, got {other:?}"),
        }
    }

    #[test]
    fn read_instance_accepts_any_reader() {
        let input: &[u8] = b"2\n-9223372036854775808 9223372036854775807\n";
        let seq = read_instance(input).unwrap();
        assert_eq!(seq, vec![i64::MIN, i64::MAX]);
    }
}
