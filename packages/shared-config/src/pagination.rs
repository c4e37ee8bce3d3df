//! Pagination configuration types

use crate::{parse_env, ConfigError, ConfigResult};

/// Page size limits applied to every connection field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page size used when a client sends a negative `first`/`last`
    pub default_page_size: usize,

    /// Largest page a client may request
    pub max_page_size: usize,

    /// Reject cursors minted for a different list
    pub strict_cursor_scope: bool,
}

impl PaginationConfig {
    /// Load pagination configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let config = Self {
            default_page_size: parse_env("PAGINATION_DEFAULT_PAGE_SIZE", 10)?,
            max_page_size: parse_env("PAGINATION_MAX_PAGE_SIZE", 100)?,
            strict_cursor_scope: parse_env("PAGINATION_STRICT_CURSOR_SCOPE", true)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.max_page_size == 0 {
            return Err(ConfigError::ValidationError(
                "PAGINATION_MAX_PAGE_SIZE must be at least 1".to_string(),
            ));
        }
        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::ValidationError(format!(
                "PAGINATION_DEFAULT_PAGE_SIZE ({}) exceeds PAGINATION_MAX_PAGE_SIZE ({})",
                self.default_page_size, self.max_page_size
            )));
        }
        Ok(())
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
            strict_cursor_scope: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PaginationConfig::default();
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.max_page_size, 100);
        assert!(config.strict_cursor_scope);
    }

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset(
            [
                "PAGINATION_DEFAULT_PAGE_SIZE",
                "PAGINATION_MAX_PAGE_SIZE",
                "PAGINATION_STRICT_CURSOR_SCOPE",
            ],
            || {
                let config = PaginationConfig::from_env().unwrap();
                assert_eq!(config, PaginationConfig::default());
            },
        );
    }

    #[test]
    fn test_from_env_overrides() {
        temp_env::with_vars(
            [
                ("PAGINATION_DEFAULT_PAGE_SIZE", Some("25")),
                ("PAGINATION_MAX_PAGE_SIZE", Some("50")),
                ("PAGINATION_STRICT_CURSOR_SCOPE", Some("false")),
            ],
            || {
                let config = PaginationConfig::from_env().unwrap();
                assert_eq!(config.default_page_size, 25);
                assert_eq!(config.max_page_size, 50);
                assert!(!config.strict_cursor_scope);
            },
        );
    }

    #[test]
    fn test_default_above_max_rejected() {
        temp_env::with_vars(
            [
                ("PAGINATION_DEFAULT_PAGE_SIZE", Some("200")),
                ("PAGINATION_MAX_PAGE_SIZE", Some("100")),
            ],
            || {
                let err = PaginationConfig::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::ValidationError(_)));
            },
        );
    }

    #[test]
    fn test_invalid_number_rejected() {
        temp_env::with_var("PAGINATION_MAX_PAGE_SIZE", Some("lots"), || {
            let err = PaginationConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue(name, _) if name == "PAGINATION_MAX_PAGE_SIZE"));
        });
    }
}
