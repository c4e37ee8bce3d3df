//! Loader configuration types

use crate::{parse_env, ConfigError, ConfigResult};

/// Batching limits for request-scoped loaders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Maximum keys sent to the store in one bulk call
    pub max_batch_size: usize,
}

impl LoaderConfig {
    /// Load loader configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let max_batch_size = parse_env("LOADER_MAX_BATCH_SIZE", 1000)?;
        if max_batch_size == 0 {
            return Err(ConfigError::ValidationError(
                "LOADER_MAX_BATCH_SIZE must be at least 1".to_string(),
            ));
        }
        Ok(Self { max_batch_size })
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_batch_size: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_default() {
        temp_env::with_var_unset("LOADER_MAX_BATCH_SIZE", || {
            assert_eq!(LoaderConfig::from_env().unwrap(), LoaderConfig::default());
        });
    }

    #[test]
    fn test_from_env_override() {
        temp_env::with_var("LOADER_MAX_BATCH_SIZE", Some("64"), || {
            assert_eq!(LoaderConfig::from_env().unwrap().max_batch_size, 64);
        });
    }

    #[test]
    fn test_zero_rejected() {
        temp_env::with_var("LOADER_MAX_BATCH_SIZE", Some("0"), || {
            assert!(LoaderConfig::from_env().is_err());
        });
    }
}
