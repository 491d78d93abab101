//! Tunables for the chunked strategies.

use crate::error::{CensorError, Result};
use serde::Deserialize;

/// Bytes per write for the chunked strategies.
///
/// 4 KiB keeps each write inside the zero-allocation window of common HTTP
/// response writers.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Upper bound on the chunk size. Scratch buffers are never larger than this.
pub const MAX_CHUNK_SIZE: usize = 1024 * 1024;

/// Configuration for a [`Censor`](crate::Censor).
///
/// Can be embedded in a host application's config file; call
/// [`CensorConfig::validate`] after deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CensorConfig {
    /// Bytes emitted per sink write by the chunked strategies.
    pub chunk_size: usize,
}

impl CensorConfig {
    /// Creates a config with the given chunk size, rejecting out-of-range values.
    pub fn new(chunk_size: usize) -> Result<Self> {
        let config = CensorConfig { chunk_size };
        config.validate()?;
        Ok(config)
    }

    /// Checks that `chunk_size` is within `1..=MAX_CHUNK_SIZE`.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(CensorError::InvalidConfig {
                message: "chunk size must be at least 1 byte".to_string(),
            });
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(CensorError::InvalidConfig {
                message: format!(
                    "chunk size {} exceeds maximum of {} bytes",
                    self.chunk_size, MAX_CHUNK_SIZE
                ),
            });
        }
        Ok(())
    }
}

impl Default for CensorConfig {
    fn default() -> Self {
        CensorConfig {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
