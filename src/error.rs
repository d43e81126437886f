//! Error types for lru-kv.

use core::fmt;
use std::collections::TryReserveError;

use crate::config::{MAX_KEY_LEN, MAX_VALUE_LEN};

/// Result type alias for cache operations.
pub type Result<T> = core::result::Result<T, CacheError>;

/// Errors reported by cache creation and mutation.
///
/// A lookup miss is not an error; [`LruKvCache::get`](crate::LruKvCache::get)
/// reports it as `None`.
#[derive(Debug)]
pub enum CacheError {
    /// The requested capacity was zero. The bucket array is sized by the
    /// capacity, so a zero capacity would leave the hash reduction undefined.
    ZeroCapacity,

    /// The bucket array or entry arena could not be allocated at creation.
    AllocationFailed(TryReserveError),

    /// The key exceeds [`MAX_KEY_LEN`] bytes.
    KeyTooLong {
        /// Byte length of the rejected key.
        len: usize,
    },

    /// The value exceeds [`MAX_VALUE_LEN`] bytes.
    ValueTooLong {
        /// Byte length of the rejected value.
        len: usize,
    },
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::ZeroCapacity => write!(f, "cache capacity must be positive"),
            CacheError::AllocationFailed(e) => write!(f, "cache allocation failed: {}", e),
            CacheError::KeyTooLong { len } => {
                write!(f, "key is {} bytes (max {})", len, MAX_KEY_LEN)
            }
            CacheError::ValueTooLong { len } => {
                write!(f, "value is {} bytes (max {})", len, MAX_VALUE_LEN)
            }
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CacheError::AllocationFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TryReserveError> for CacheError {
    fn from(err: TryReserveError) -> Self {
        CacheError::AllocationFailed(err)
    }
}
