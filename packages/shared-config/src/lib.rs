//! Shared configuration types for Bookshelf services
//!
//! This crate provides the configuration the API reads at startup: page size
//! limits, cursor scope checking, and loader batch limits, plus the
//! environment helpers used to parse them.

mod error;
mod loader;
mod pagination;

pub use error::{ConfigError, ConfigResult};
pub use loader::LoaderConfig;
pub use pagination::PaginationConfig;

use std::env;

/// Common configuration shared between all services
#[derive(Debug, Clone)]
pub struct CommonConfig {
    /// Pagination limits
    pub pagination: PaginationConfig,

    /// Loader batching limits
    pub loader: LoaderConfig,

    /// Environment mode (development, staging, production)
    pub environment: Environment,

    /// Log level (from RUST_LOG or LOG_LEVEL)
    pub log_level: String,
}

/// Application environment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        })
    }
}

impl Environment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Staging => write!(f, "staging"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl CommonConfig {
    /// Load common configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            pagination: PaginationConfig::from_env()?,
            loader: LoaderConfig::from_env()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse()
                .unwrap_or_default(),
            log_level: env::var("RUST_LOG")
                .or_else(|_| env::var("LOG_LEVEL"))
                .unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Helper function to get a required environment variable
pub fn get_required_env(name: &str) -> ConfigResult<String> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "prod".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "staging".parse::<Environment>().unwrap(),
            Environment::Staging
        );
        assert_eq!(
            "stage".parse::<Environment>().unwrap(),
            Environment::Staging
        );
        assert_eq!(
            "development".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert_eq!(
            "dev".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert_eq!(
            "anything".parse::<Environment>().unwrap(),
            Environment::Development
        );
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(format!("{}", Environment::Production), "production");
        assert_eq!(format!("{}", Environment::Staging), "staging");
        assert_eq!(format!("{}", Environment::Development), "development");
    }

    #[test]
    fn test_environment_checks() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Production.is_development());
        assert!(Environment::Development.is_development());
        assert!(!Environment::Development.is_production());
    }

    #[test]
    fn test_common_config_from_env() {
        temp_env::with_vars(
            [
                ("ENVIRONMENT", Some("prod")),
                ("RUST_LOG", None),
                ("LOG_LEVEL", Some("warn")),
                ("PAGINATION_MAX_PAGE_SIZE", Some("40")),
                ("LOADER_MAX_BATCH_SIZE", None),
            ],
            || {
                let config = CommonConfig::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.log_level, "warn");
                assert_eq!(config.pagination.max_page_size, 40);
                assert_eq!(config.loader, LoaderConfig::default());
            },
        );
    }

    #[test]
    fn test_parse_env_helpers() {
        temp_env::with_vars([("SET_NUMBER", Some("7")), ("UNSET_NUMBER", None)], || {
            assert_eq!(parse_env("SET_NUMBER", 1u32).unwrap(), 7);
            assert_eq!(parse_env("UNSET_NUMBER", 1u32).unwrap(), 1);
            assert_eq!(get_env_or_default("UNSET_NUMBER", "x"), "x");
            assert!(matches!(
                get_required_env("UNSET_NUMBER"),
                Err(ConfigError::MissingEnvVar(_))
            ));
        });
    }
}
