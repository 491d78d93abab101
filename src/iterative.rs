//! Eager strategies: build the whole censored suffix, then write it at once.
//!
//! Exactly two writes reach the sink: the prefix, then the censored suffix.
//! Nothing is written until the full copy has been built.

use crate::cancel::CancellationToken;
use crate::digits::{censor_step, DigitSequence, MASK, PREFIX, SENTINEL};
use crate::error::{CensorError, Result};
use futures::io::{AsyncWrite, AsyncWriteExt};
use log::debug;

/// Censors any digit smaller than the previous digit over raw bytes, returning
/// the count of censored digits.
pub async fn write_censored_digits_iterative<W>(
    digits: &[u8],
    mut output: W,
    cancel: &CancellationToken,
) -> Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let digits = DigitSequence::new(digits)?;

    let mut censored_count = 0;
    let mut previous = SENTINEL;

    let censored_suffix = digits
        .suffix()
        .iter()
        .map(|&c| {
            let (emitted, censored) = censor_step(c, &mut previous, MASK);
            censored_count += usize::from(censored);
            emitted
        })
        .collect::<Vec<u8>>();

    debug!(
        "Iterative: censored {} of {} digits",
        censored_count,
        censored_suffix.len()
    );

    cancel.check()?;
    output.write_all(digits.prefix()).await?;
    cancel.check()?;
    output.write_all(&censored_suffix).await?;

    Ok(censored_count)
}

/// Same as [`write_censored_digits_iterative`] but works on `char`s of a
/// string and encodes the result back to UTF-8.
///
/// For ASCII input the output is byte-identical to the byte strategies.
pub async fn write_censored_digits_iterative_str<W>(
    digits: &str,
    mut output: W,
    cancel: &CancellationToken,
) -> Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let Some(suffix) = digits.strip_prefix("3.") else {
        return Err(CensorError::invalid_input(digits.as_bytes()));
    };

    let mut censored_count = 0;
    let mut previous = char::from(SENTINEL);

    let censored_suffix = suffix
        .chars()
        .map(|c| {
            let (emitted, censored) = censor_step(c, &mut previous, char::from(MASK));
            censored_count += usize::from(censored);
            emitted
        })
        .collect::<String>();

    debug!(
        "Iterative (string): censored {} of {} characters",
        censored_count,
        suffix.chars().count()
    );

    cancel.check()?;
    output.write_all(PREFIX).await?;
    cancel.check()?;
    output.write_all(censored_suffix.as_bytes()).await?;

    Ok(censored_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    const INPUT: &str = "3.1415926535897932384626433";
    const EXPECTED: &str = "3.14*59*6**589*9**38*6*6**3";

    #[test]
    fn test_iterative_ok() {
        let mut output = Vec::new();
        let count = block_on(write_censored_digits_iterative(
            INPUT.as_bytes(),
            &mut output,
            &CancellationToken::new(),
        ))
        .unwrap();
        assert_eq!(count, 11);
        assert_eq!(String::from_utf8(output).unwrap(), EXPECTED);
    }

    #[test]
    fn test_iterative_str_ok() {
        let mut output = Vec::new();
        let count = block_on(write_censored_digits_iterative_str(
            INPUT,
            &mut output,
            &CancellationToken::new(),
        ))
        .unwrap();
        assert_eq!(count, 11);
        assert_eq!(String::from_utf8(output).unwrap(), EXPECTED);
    }

    #[test]
    fn test_prefix_only() {
        let mut output = Vec::new();
        let count = block_on(write_censored_digits_iterative_str(
            "3.",
            &mut output,
            &CancellationToken::new(),
        ))
        .unwrap();
        assert_eq!(count, 0);
        assert_eq!(output, b"3.");
    }

    #[test]
    fn test_str_rejects_bad_prefix() {
        let mut output = Vec::new();
        let err = block_on(write_censored_digits_iterative_str(
            "3,14",
            &mut output,
            &CancellationToken::new(),
        ))
        .unwrap_err();
        assert!(matches!(err, CensorError::InvalidInput { .. }));
        assert!(output.is_empty());
    }

    #[test]
    fn test_str_compares_chars_not_bytes() {
        // 'é' (U+00E9) sorts above every ASCII digit; '1' after it is censored
        let mut output = Vec::new();
        let count = block_on(write_censored_digits_iterative_str(
            "3.9é1",
            &mut output,
            &CancellationToken::new(),
        ))
        .unwrap();
        assert_eq!(count, 1);
        assert_eq!(String::from_utf8(output).unwrap(), "3.9é*");
    }

    #[test]
    fn test_cancelled_writes_nothing() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let mut output = Vec::new();
        let err = block_on(write_censored_digits_iterative(
            INPUT.as_bytes(),
            &mut output,
            &cancel,
        ))
        .unwrap_err();
        assert!(matches!(err, CensorError::Cancelled));
        assert!(output.is_empty());
    }
}
