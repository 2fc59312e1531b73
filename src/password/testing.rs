//! Entropy doubles shared by the unit tests

use crate::core::error::{HashError, Result};
use crate::password::entropy::EntropySource;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns the same bytes on every draw and counts which source was used
pub struct FixedEntropy {
    bytes: Vec<u8>,
    weak_calls: AtomicUsize,
    strong_calls: AtomicUsize,
}

impl FixedEntropy {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            weak_calls: AtomicUsize::new(0),
            strong_calls: AtomicUsize::new(0),
        }
    }

    pub fn weak_calls(&self) -> usize {
        self.weak_calls.load(Ordering::SeqCst)
    }

    pub fn strong_calls(&self) -> usize {
        self.strong_calls.load(Ordering::SeqCst)
    }

    fn take(&self, n: usize) -> Vec<u8> {
        self.bytes.iter().copied().cycle().take(n).collect()
    }
}

impl EntropySource for FixedEntropy {
    fn weak_bytes(&self, n: usize) -> Result<Vec<u8>> {
        self.weak_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.take(n))
    }

    fn strong_bytes(&self, n: usize) -> Result<Vec<u8>> {
        self.strong_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.take(n))
    }
}

/// An entropy source whose device is unavailable
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn weak_bytes(&self, _n: usize) -> Result<Vec<u8>> {
        Err(HashError::EntropySource("weak source exhausted".to_string()))
    }

    fn strong_bytes(&self, _n: usize) -> Result<Vec<u8>> {
        Err(HashError::EntropySource("strong source unavailable".to_string()))
    }
}
