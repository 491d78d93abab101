//! Strategy selection and the [`Censor`] engine.
//!
//! Every strategy satisfies the same contract: same bytes written, same
//! censored count, for any valid input. They differ only in how memory and
//! writes are used.

use crate::cancel::CancellationToken;
use crate::config::CensorConfig;
use crate::error::{CensorError, Result};
use crate::inplace::{write_censored_digits_inplace, write_censored_digits_inplace_sync};
use crate::iterative::{write_censored_digits_iterative, write_censored_digits_iterative_str};
use crate::pool::BufferPool;
use futures::executor::block_on;
use futures::io::{AllowStdIo, AsyncWrite};
use log::debug;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

/// The interchangeable censoring strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Async, chunked, pooled scratch buffer.
    InPlace,
    /// Blocking, chunked, pooled scratch buffer.
    InPlaceSync,
    /// Async, eager copy of the suffix bytes.
    Iterative,
    /// Async, eager copy of the suffix chars.
    IterativeString,
}

impl Strategy {
    /// All strategies, in report order.
    pub const ALL: [Strategy; 4] = [
        Strategy::InPlace,
        Strategy::InPlaceSync,
        Strategy::Iterative,
        Strategy::IterativeString,
    ];

    /// Stable name used on the command line and in reports.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::InPlace => "inplace",
            Strategy::InPlaceSync => "inplace-sync",
            Strategy::Iterative => "iterative",
            Strategy::IterativeString => "iterative-string",
        }
    }

    /// Returns `true` for the strategies that write through an async sink.
    pub fn is_async(self) -> bool {
        !matches!(self, Strategy::InPlaceSync)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = CensorError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == wanted)
            .ok_or_else(|| CensorError::InvalidConfig {
                message: format!(
                    "unknown strategy '{}', expected one of: inplace, inplace-sync, iterative, iterative-string",
                    s
                ),
            })
    }
}

/// Runs any [`Strategy`] with a shared configuration and buffer pool.
///
/// Holds no per-call state: every call creates its own censor state, and the
/// pool only lends out buffers for the duration of a call. A `Censor` can be
/// shared across threads and used by concurrent calls.
#[derive(Debug, Clone)]
pub struct Censor {
    config: CensorConfig,
    pool: Arc<BufferPool>,
}

impl Censor {
    /// Creates an engine with its own buffer pool.
    pub fn new(config: CensorConfig) -> Result<Self> {
        Self::with_pool(config, Arc::new(BufferPool::default()))
    }

    /// Creates an engine that leases scratch buffers from `pool`.
    pub fn with_pool(config: CensorConfig, pool: Arc<BufferPool>) -> Result<Self> {
        config.validate()?;
        Ok(Censor { config, pool })
    }

    /// The active configuration.
    pub fn config(&self) -> &CensorConfig {
        &self.config
    }

    /// The buffer pool used by the chunked strategies.
    pub fn pool(&self) -> &BufferPool {
        &self.pool
    }

    /// Censors `digits` into an async sink, returning the censored count.
    ///
    /// [`Strategy::InPlaceSync`] needs a blocking sink and is rejected here
    /// with [`CensorError::InvalidConfig`]; use [`Censor::censor_blocking`].
    pub async fn censor<W>(
        &self,
        strategy: Strategy,
        digits: &str,
        output: W,
        cancel: &CancellationToken,
    ) -> Result<usize>
    where
        W: AsyncWrite + Unpin,
    {
        debug!("Censoring {} bytes with {}", digits.len(), strategy);

        match strategy {
            Strategy::InPlace => {
                write_censored_digits_inplace(
                    digits.as_bytes(),
                    output,
                    &self.config,
                    &self.pool,
                    cancel,
                )
                .await
            }
            Strategy::Iterative => {
                write_censored_digits_iterative(digits.as_bytes(), output, cancel).await
            }
            Strategy::IterativeString => {
                write_censored_digits_iterative_str(digits, output, cancel).await
            }
            Strategy::InPlaceSync => Err(CensorError::InvalidConfig {
                message: format!("{} requires a blocking sink", strategy),
            }),
        }
    }

    /// Censors `digits` into a blocking sink, returning the censored count.
    ///
    /// Async strategies are driven to completion on the current thread.
    pub fn censor_blocking<W: Write>(
        &self,
        strategy: Strategy,
        digits: &str,
        mut output: W,
    ) -> Result<usize> {
        match strategy {
            Strategy::InPlaceSync => {
                debug!("Censoring {} bytes with {}", digits.len(), strategy);
                write_censored_digits_inplace_sync(
                    digits.as_bytes(),
                    &mut output,
                    &self.config,
                    &self.pool,
                )
            }
            _ => block_on(self.censor(
                strategy,
                digits,
                AllowStdIo::new(&mut output),
                &CancellationToken::new(),
            )),
        }
    }
}

impl Default for Censor {
    fn default() -> Self {
        Censor {
            config: CensorConfig::default(),
            pool: Arc::new(BufferPool::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "3.1415926535897932384626433";
    const EXPECTED: &str = "3.14*59*6**589*9**38*6*6**3";

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        }
        assert_eq!(" InPlace ".parse::<Strategy>().unwrap(), Strategy::InPlace);
    }

    #[test]
    fn test_unknown_strategy() {
        let err = "bogus".parse::<Strategy>().unwrap_err();
        assert!(err.to_string().contains("unknown strategy 'bogus'"));
    }

    #[test]
    fn test_blocking_all_strategies_agree() {
        let censor = Censor::new(CensorConfig::new(5).unwrap()).unwrap();
        for strategy in Strategy::ALL {
            let mut output = Vec::new();
            let count = censor.censor_blocking(strategy, INPUT, &mut output).unwrap();
            assert_eq!(String::from_utf8(output).unwrap(), EXPECTED, "{}", strategy);
            assert_eq!(count, 11, "{}", strategy);
        }
    }

    #[test]
    fn test_async_rejects_sync_strategy() {
        let censor = Censor::default();
        let mut output = Vec::new();
        let err = block_on(censor.censor(
            Strategy::InPlaceSync,
            INPUT,
            &mut output,
            &CancellationToken::new(),
        ))
        .unwrap_err();
        assert!(matches!(err, CensorError::InvalidConfig { .. }));
        assert!(output.is_empty());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = Censor::new(CensorConfig { chunk_size: 0 }).unwrap_err();
        assert!(matches!(err, CensorError::InvalidConfig { .. }));
    }

    #[test]
    fn test_shared_pool() {
        let pool = Arc::new(BufferPool::default());
        let a = Censor::with_pool(CensorConfig::default(), Arc::clone(&pool)).unwrap();
        let b = Censor::with_pool(CensorConfig::new(3).unwrap(), Arc::clone(&pool)).unwrap();

        a.censor_blocking(Strategy::InPlace, INPUT, Vec::new()).unwrap();
        b.censor_blocking(Strategy::InPlaceSync, INPUT, Vec::new()).unwrap();

        assert_eq!(pool.idle_count(), 1);
    }
}
