//! Randomness sources for salt generation

use crate::core::error::Result;
use rand::rngs::OsRng;
use rand::RngCore;

/// A generator of raw random bytes
///
/// `strong_bytes` must be suitable for cryptographic salts. `weak_bytes` may
/// trade assurance for speed. Failures are fatal to the caller.
pub trait EntropySource: Send + Sync {
    fn weak_bytes(&self, n: usize) -> Result<Vec<u8>>;

    fn strong_bytes(&self, n: usize) -> Result<Vec<u8>>;

    /// Draw `n` bytes from the source selected by `strong`
    fn bytes(&self, n: usize, strong: bool) -> Result<Vec<u8>> {
        if strong {
            self.strong_bytes(n)
        } else {
            self.weak_bytes(n)
        }
    }
}

/// Entropy backed by the operating system
///
/// The weak source is the thread-local generator (seeded from the OS, no
/// syscall per draw); the strong source reads the OS generator directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn weak_bytes(&self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        rand::thread_rng().try_fill_bytes(&mut buf)?;
        Ok(buf)
    }

    fn strong_bytes(&self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        OsRng.try_fill_bytes(&mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_entropy_lengths() {
        let entropy = SystemEntropy;
        assert_eq!(entropy.weak_bytes(16).unwrap().len(), 16);
        assert_eq!(entropy.strong_bytes(16).unwrap().len(), 16);
        assert!(entropy.strong_bytes(0).unwrap().is_empty());
    }

    #[test]
    fn test_system_entropy_varies() {
        let entropy = SystemEntropy;
        assert_ne!(entropy.weak_bytes(16).unwrap(), entropy.weak_bytes(16).unwrap());
        assert_ne!(entropy.strong_bytes(16).unwrap(), entropy.strong_bytes(16).unwrap());
    }
}
