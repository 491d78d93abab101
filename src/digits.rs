//! Digit sequence validation and the censoring rule shared by every strategy.
//!
//! Business logic for consecutive digits after the `3.` prefix:
//!
//! - if the digit gets bigger, it is allowed
//! - if the digit is equal, it is allowed
//! - if the digit gets smaller, it is censored
//! - the first digit is always allowed
//!
//! e.g. `3.14*59*6**589*9**38*6*6**3...`

use crate::error::{CensorError, Result};

/// The prefix every digit sequence must start with. Emitted unchanged.
pub const PREFIX: &[u8; 2] = b"3.";

/// Length of [`PREFIX`] in bytes.
pub const PREFIX_LEN: usize = PREFIX.len();

/// Byte written in place of a censored digit.
pub const MASK: u8 = b'*';

/// Initial value of the "previous digit" state.
///
/// No decimal digit sorts below `'0'`, so the first digit after the prefix is
/// always allowed without a special case.
pub const SENTINEL: u8 = b'0';

/// A validated, borrowed digit sequence: `3.` followed by the digits to censor.
///
/// # Invariants
///
/// - length is at least [`PREFIX_LEN`]
/// - the first two bytes are exactly `3` and `.`
///
/// Only the prefix is checked. The remainder is compared byte by byte
/// without being validated as ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitSequence<'a> {
    bytes: &'a [u8],
}

impl<'a> DigitSequence<'a> {
    /// Validates that `bytes` starts with `3.`.
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        if !bytes.starts_with(PREFIX) {
            return Err(CensorError::invalid_input(bytes));
        }
        Ok(DigitSequence { bytes })
    }

    /// The `3.` prefix.
    pub fn prefix(&self) -> &'a [u8] {
        &self.bytes[..PREFIX_LEN]
    }

    /// Everything after the prefix; the part that gets censored.
    pub fn suffix(&self) -> &'a [u8] {
        &self.bytes[PREFIX_LEN..]
    }

    /// The full sequence, prefix included.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Total length in bytes, prefix included.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` when there is nothing after the prefix.
    pub fn is_empty(&self) -> bool {
        self.suffix().is_empty()
    }
}

impl<'a> TryFrom<&'a [u8]> for DigitSequence<'a> {
    type Error = CensorError;

    fn try_from(bytes: &'a [u8]) -> Result<Self> {
        DigitSequence::new(bytes)
    }
}

impl<'a> TryFrom<&'a str> for DigitSequence<'a> {
    type Error = CensorError;

    fn try_from(text: &'a str) -> Result<Self> {
        DigitSequence::new(text.as_bytes())
    }
}

/// Applies the censoring rule to a single element.
///
/// Returns the value to emit and whether it was censored. `previous` is always
/// updated with the original value, so masking never affects later comparisons.
#[inline]
pub fn censor_step<T: PartialOrd + Copy>(value: T, previous: &mut T, mask: T) -> (T, bool) {
    let is_smaller_than_previous = value < *previous;
    *previous = value;

    if is_smaller_than_previous {
        (mask, true)
    } else {
        (value, false)
    }
}

/// Censors `chunk` in place, returning how many digits were masked.
///
/// `previous` carries the last original digit across calls so a sequence can be
/// processed in windows of any size with the same result as a single pass.
pub fn censor_chunk(chunk: &mut [u8], previous: &mut u8) -> usize {
    let mut censored_count = 0;

    for byte in chunk.iter_mut() {
        let (emitted, censored) = censor_step(*byte, previous, MASK);
        if censored {
            censored_count += 1;
            *byte = emitted;
        }
    }

    censored_count
}
