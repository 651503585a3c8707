// History configuration.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::HistoryStore;

/// Snapshots retained when nothing else is configured.
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(50) {
    Some(capacity) => capacity,
    None => panic!("default capacity must be non-zero"),
};

/// Settings for a [`HistoryStore`]. Fixed once a store has been built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY.get()
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl HistoryConfig {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Check the capacity. A store must be able to hold its initial snapshot.
    pub fn validate(&self) -> Result<NonZeroUsize, ConfigError> {
        match NonZeroUsize::new(self.capacity) {
            Some(capacity) => Ok(capacity),
            None => {
                tracing::error!(capacity = self.capacity, "history capacity must be at least 1");
                Err(ConfigError::ZeroCapacity)
            }
        }
    }

    /// Build a store holding `initial` with this configuration.
    pub fn build<T>(&self, initial: T) -> Result<HistoryStore<T>, ConfigError> {
        let capacity = self.validate()?;
        Ok(HistoryStore::with_capacity(initial, capacity))
    }
}

/// Errors related to history configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("history capacity must be at least 1")]
    ZeroCapacity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity_is_fifty() {
        assert_eq!(HistoryConfig::default().capacity, 50);
        assert_eq!(DEFAULT_CAPACITY.get(), 50);
    }

    #[test]
    fn test_missing_capacity_uses_default() {
        let config: HistoryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HistoryConfig::default());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = HistoryConfig::new(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroCapacity));
        assert!(config.build("x").is_err());
    }

    #[test]
    fn test_build_uses_configured_capacity() {
        let store = HistoryConfig::new(3).build(String::new()).unwrap();
        assert_eq!(store.capacity().get(), 3);
    }
}
