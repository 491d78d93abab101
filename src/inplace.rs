//! Chunked strategies: censor the suffix window by window in one scratch buffer.
//!
//! The prefix goes out as a single write. Each window of up to
//! `chunk_size` bytes is copied into a leased scratch buffer, censored in
//! place with the carried `previous` digit, and written out before the next
//! window is touched. Memory use is bounded by the chunk size, not the input.

use crate::cancel::CancellationToken;
use crate::config::CensorConfig;
use crate::digits::{censor_chunk, DigitSequence, SENTINEL};
use crate::error::Result;
use crate::pool::BufferPool;
use futures::io::{AsyncWrite, AsyncWriteExt};
use log::debug;
use std::io::Write;

/// Censors any digit smaller than the previous digit, writing chunk by chunk
/// to an async sink. Returns the count of censored digits.
///
/// Cancellation is checked before every write; once the token is set no
/// further bytes are written and [`CensorError::Cancelled`] is returned.
/// The scratch buffer goes back to `pool` on every exit path.
///
/// [`CensorError::Cancelled`]: crate::CensorError::Cancelled
pub async fn write_censored_digits_inplace<W>(
    digits: &[u8],
    mut output: W,
    config: &CensorConfig,
    pool: &BufferPool,
    cancel: &CancellationToken,
) -> Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let digits = DigitSequence::new(digits)?;
    config.validate()?;

    cancel.check()?;
    output.write_all(digits.prefix()).await?;

    let suffix = digits.suffix();
    let mut buffer = pool.acquire(config.chunk_size.min(suffix.len()));

    let mut censored_count = 0;
    let mut previous = SENTINEL;
    let mut windows = 0usize;

    for window in suffix.chunks(config.chunk_size) {
        let scratch = &mut buffer[..window.len()];
        scratch.copy_from_slice(window);

        censored_count += censor_chunk(scratch, &mut previous);

        cancel.check()?;
        output.write_all(scratch).await?;
        windows += 1;
    }

    debug!(
        "In-place: censored {} of {} digits in {} windows of up to {} bytes",
        censored_count,
        suffix.len(),
        windows,
        config.chunk_size
    );

    Ok(censored_count)
}

/// Blocking counterpart of [`write_censored_digits_inplace`] over a
/// [`std::io::Write`] sink.
///
/// A blocking write has no suspension point, so there is no cancellation.
pub fn write_censored_digits_inplace_sync<W: Write>(
    digits: &[u8],
    mut output: W,
    config: &CensorConfig,
    pool: &BufferPool,
) -> Result<usize> {
    let digits = DigitSequence::new(digits)?;
    config.validate()?;

    output.write_all(digits.prefix())?;

    let suffix = digits.suffix();
    let mut buffer = pool.acquire(config.chunk_size.min(suffix.len()));

    let mut censored_count = 0;
    let mut previous = SENTINEL;

    for window in suffix.chunks(config.chunk_size) {
        let scratch = &mut buffer[..window.len()];
        scratch.copy_from_slice(window);

        censored_count += censor_chunk(scratch, &mut previous);
        output.write_all(scratch)?;
    }

    debug!(
        "In-place (sync): censored {} of {} digits",
        censored_count,
        suffix.len()
    );

    Ok(censored_count)
}
