//! # Censored Digits
//!
//! Streams the decimal expansion of pi with every digit that is smaller than
//! the digit before it replaced by `*`, and returns how many digits were
//! censored.
//!
//! ```text
//! 3.1415926535897932384626433
//! 3.14*59*6**589*9**38*6*6**3
//! ```
//!
//! ## Strategies
//!
//! The same transform is implemented four ways so their memory and write
//! behaviour can be compared:
//!
//! - **inplace**: async, censors fixed-size windows in one pooled scratch buffer
//! - **inplace-sync**: the same over a blocking [`std::io::Write`]
//! - **iterative**: async, builds the whole censored suffix, then writes twice
//! - **iterative-string**: as above, over `char`s of a `&str`
//!
//! All of them write identical bytes and return identical counts.
//!
//! ## Example
//!
//! ```
//! use censored_digits::{Censor, Strategy};
//!
//! let censor = Censor::default();
//! let mut output = Vec::new();
//! let censored = censor
//!     .censor_blocking(Strategy::InPlace, "3.1415926535", &mut output)
//!     .unwrap();
//!
//! assert_eq!(output, b"3.14*59*6**5");
//! assert_eq!(censored, 4);
//! ```

pub mod cancel;
pub mod config;
pub mod digits;
pub mod error;
pub mod inplace;
pub mod iterative;
pub mod pool;
pub mod report;
pub mod strategy;

pub use cancel::CancellationToken;
pub use config::{CensorConfig, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
pub use digits::{censor_chunk, DigitSequence, MASK, PREFIX, SENTINEL};
pub use error::{CensorError, Result};
pub use inplace::{write_censored_digits_inplace, write_censored_digits_inplace_sync};
pub use iterative::{write_censored_digits_iterative, write_censored_digits_iterative_str};
pub use pool::{BufferPool, PooledBuffer};
pub use report::{run_report, write_report, CountingSink, StrategyReport};
pub use strategy::{Censor, Strategy};
