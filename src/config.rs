//! Configuration for the LRU key/value cache.
//!
//! # Sizing Guidelines
//!
//! `capacity` bounds the number of live entries and also fixes the number of
//! hash buckets, so lookup cost stays O(1) on average at any fill level. Very
//! small capacities raise the collision rate (fewer buckets), which is
//! correct but slower; pick a capacity that matches the working set you want
//! to keep hot.
//!
//! Keys and values are bounded strings ([`MAX_KEY_LEN`] and
//! [`MAX_VALUE_LEN`] bytes). Inputs over the bound are rejected with an
//! error rather than truncated.
//!
//! # Examples
//!
//! ```
//! use lru_kv::{CacheConfig, LruKvCache};
//!
//! let config = CacheConfig::new(1000).unwrap();
//! let cache = LruKvCache::with_config(config).unwrap();
//! assert_eq!(cache.capacity(), 1000);
//! ```

use core::fmt;
use core::num::NonZeroUsize;

use crate::error::{CacheError, Result};

/// Maximum key length in bytes.
pub const MAX_KEY_LEN: usize = 49;

/// Maximum value length in bytes.
pub const MAX_VALUE_LEN: usize = 99;

/// Configuration for an LRU key/value cache.
///
/// # Fields
///
/// - `capacity`: maximum number of entries the cache can hold, fixed for the
///   cache's lifetime. Also the number of hash buckets.
///
/// # Examples
///
/// ```
/// use lru_kv::CacheConfig;
///
/// let config = CacheConfig::new(128).unwrap();
/// assert_eq!(config.capacity.get(), 128);
///
/// assert!(CacheConfig::new(0).is_err());
/// ```
#[derive(Clone, Copy)]
pub struct CacheConfig {
    /// Maximum number of key/value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl CacheConfig {
    /// Creates a configuration, rejecting a zero capacity.
    pub fn new(capacity: usize) -> Result<Self> {
        match NonZeroUsize::new(capacity) {
            Some(capacity) => Ok(CacheConfig { capacity }),
            None => Err(CacheError::ZeroCapacity),
        }
    }
}

impl fmt::Debug for CacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

/// Checks a key against [`MAX_KEY_LEN`].
pub(crate) fn check_key(key: &str) -> Result<()> {
    if key.len() > MAX_KEY_LEN {
        return Err(CacheError::KeyTooLong { len: key.len() });
    }
    Ok(())
}

/// Checks a value against [`MAX_VALUE_LEN`].
pub(crate) fn check_value(value: &str) -> Result<()> {
    if value.len() > MAX_VALUE_LEN {
        return Err(CacheError::ValueTooLong { len: value.len() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = CacheConfig::new(1000).unwrap();
        assert_eq!(config.capacity.get(), 1000);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(CacheConfig::new(0), Err(CacheError::ZeroCapacity)));
    }

    #[test]
    fn test_key_bound_is_exact() {
        let at_limit = "k".repeat(MAX_KEY_LEN);
        let over_limit = "k".repeat(MAX_KEY_LEN + 1);
        assert!(check_key(&at_limit).is_ok());
        assert!(matches!(
            check_key(&over_limit),
            Err(CacheError::KeyTooLong { len }) if len == MAX_KEY_LEN + 1
        ));
    }

    #[test]
    fn test_value_bound_is_exact() {
        let at_limit = "v".repeat(MAX_VALUE_LEN);
        let over_limit = "v".repeat(MAX_VALUE_LEN + 1);
        assert!(check_value(&at_limit).is_ok());
        assert!(matches!(
            check_value(&over_limit),
            Err(CacheError::ValueTooLong { len }) if len == MAX_VALUE_LEN + 1
        ));
    }
}
