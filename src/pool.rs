//! Scratch buffer pool for the chunked strategies.
//!
//! A buffer is leased for the duration of one transform and handed back when the
//! [`PooledBuffer`] guard drops, so it is returned exactly once on every exit
//! path: success, early return via `?`, or a dropped future.

use log::trace;
use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

/// Number of idle buffers retained by [`BufferPool::default`].
pub const DEFAULT_MAX_IDLE: usize = 16;

/// A pool of reusable byte buffers shared across concurrent transforms.
///
/// Each leased buffer is exclusively owned by one guard until it drops.
#[derive(Debug)]
pub struct BufferPool {
    idle: Mutex<Vec<Vec<u8>>>,
    max_idle: usize,
}

impl BufferPool {
    /// Creates an empty pool that keeps at most `max_idle` buffers around.
    pub fn new(max_idle: usize) -> Self {
        BufferPool {
            idle: Mutex::new(Vec::new()),
            max_idle,
        }
    }

    /// Leases a zero-filled buffer of exactly `len` bytes.
    ///
    /// Reuses an idle buffer when one with enough capacity is available.
    pub fn acquire(&self, len: usize) -> PooledBuffer<'_> {
        let reused = self
            .idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop();

        let mut buffer = match reused {
            Some(buffer) if buffer.capacity() >= len => {
                trace!("Pool hit: reusing {} byte buffer", buffer.capacity());
                buffer
            }
            _ => {
                trace!("Pool miss: allocating {} byte buffer", len);
                Vec::with_capacity(len)
            }
        };

        buffer.clear();
        buffer.resize(len, 0);

        PooledBuffer {
            pool: self,
            buffer: Some(buffer),
        }
    }

    /// Number of idle buffers currently held.
    pub fn idle_count(&self) -> usize {
        self.idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn release(&self, buffer: Vec<u8>) {
        let mut idle = self.idle.lock().unwrap_or_else(PoisonError::into_inner);
        if idle.len() < self.max_idle {
            idle.push(buffer);
        }
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IDLE)
    }
}

/// A buffer leased from a [`BufferPool`]. Returned to the pool on drop.
///
/// The length is fixed at lease time; the guard only hands out slices, so the
/// buffer is never grown while leased.
#[derive(Debug)]
pub struct PooledBuffer<'a> {
    pool: &'a BufferPool,
    buffer: Option<Vec<u8>>,
}

impl Deref for PooledBuffer<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.buffer.as_deref().unwrap_or_default()
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.buffer.as_deref_mut().unwrap_or_default()
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            self.pool.release(buffer);
        }
    }
}
