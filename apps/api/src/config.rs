//! API server configuration

use std::env;

use anyhow::{Context, Result};
use bookshelf_dataloader::{LoaderOptions, Paginator};
use bookshelf_shared_config::{parse_env, CommonConfig, Environment};

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with other services
    pub common: CommonConfig,

    /// Server port (default: 4000)
    pub port: u16,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,

    /// Serve the GraphQL Playground at `/graphql/playground`
    pub graphql_playground: bool,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// The playground defaults to enabled outside production; set
    /// `GRAPHQL_PLAYGROUND` to override either way.
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env().context("Failed to load config")?;
        let graphql_playground = parse_env(
            "GRAPHQL_PLAYGROUND",
            !common.environment.is_production(),
        )?;

        Ok(Self {
            common,

            port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .context("Invalid PORT value")?,

            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),

            graphql_playground,
        })
    }

    /// Paginator honouring the configured page limits and cursor scope policy
    pub fn paginator(&self) -> Paginator {
        let pagination = &self.common.pagination;
        Paginator::new(pagination.default_page_size, pagination.max_page_size)
            .with_strict_scope(pagination.strict_cursor_scope)
    }

    /// Options for every request-scoped loader
    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions::with_max_batch_size(self.common.loader.max_batch_size)
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 8] = [
        "ENVIRONMENT",
        "PORT",
        "CORS_ORIGINS",
        "GRAPHQL_PLAYGROUND",
        "PAGINATION_DEFAULT_PAGE_SIZE",
        "PAGINATION_MAX_PAGE_SIZE",
        "PAGINATION_STRICT_CURSOR_SCOPE",
        "LOADER_MAX_BATCH_SIZE",
    ];

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(VARS, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.port, 4000);
            assert!(config.cors_allowed_origins.is_none());
            assert!(config.graphql_playground);
            assert_eq!(config.environment(), Environment::Development);
            assert_eq!(config.paginator(), Paginator::new(10, 100));
            assert_eq!(config.loader_options(), LoaderOptions::default());
        });
    }

    #[test]
    fn test_playground_disabled_in_production() {
        temp_env::with_vars(
            [("ENVIRONMENT", Some("production")), ("GRAPHQL_PLAYGROUND", None)],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.is_production());
                assert!(!config.graphql_playground);
            },
        );
    }

    #[test]
    fn test_playground_override() {
        temp_env::with_vars(
            [("ENVIRONMENT", Some("production")), ("GRAPHQL_PLAYGROUND", Some("true"))],
            || {
                assert!(Config::from_env().unwrap().graphql_playground);
            },
        );
    }

    #[test]
    fn test_cors_origins_parsing() {
        temp_env::with_var(
            "CORS_ORIGINS",
            Some("http://localhost:3000, https://books.example.com,,"),
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(
                    config.cors_allowed_origins.unwrap(),
                    ["http://localhost:3000", "https://books.example.com"]
                );
            },
        );
    }

    #[test]
    fn test_invalid_port() {
        temp_env::with_var("PORT", Some("not-a-port"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }

    #[test]
    fn test_pagination_settings_reach_paginator() {
        temp_env::with_vars(
            [
                ("PAGINATION_DEFAULT_PAGE_SIZE", Some("5")),
                ("PAGINATION_MAX_PAGE_SIZE", Some("20")),
                ("PAGINATION_STRICT_CURSOR_SCOPE", Some("false")),
                ("LOADER_MAX_BATCH_SIZE", Some("50")),
            ],
            || {
                let config = Config::from_env().unwrap();
                let paginator = config.paginator();
                assert_eq!(paginator.default_page_size(), 5);
                assert_eq!(paginator.max_page_size(), Some(20));
                assert!(!paginator.strict_scope());
                assert_eq!(config.loader_options().max_batch_size, 50);
            },
        );
    }
}
