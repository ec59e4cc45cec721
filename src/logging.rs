// ABOUTME: Tracing subscriber setup for the library consumers and the CLI
// ABOUTME: Reads level, format, and service identity from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging
//!
//! Events are written to stderr so the CLI can keep stdout for JSON results.
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `RUST_LOG` | filter directives, default `info` |
//! | `LOG_FORMAT` | `json`, `pretty`, or `compact` |
//! | `ENVIRONMENT` | `production` turns on source locations |
//! | `LOG_INCLUDE_LOCATION` | include file and line when set |
//! | `SERVICE_NAME` | service name on the startup event |

use std::env;
use std::io;

use anyhow::{anyhow, Result};
use nutrigrade_core::constants::service_names;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Subscriber settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directives
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Emit file and line for each event
    pub include_location: bool,
    /// Reported service name
    pub service_name: String,
    /// Deployment environment name
    pub environment: String,
}

/// Event output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-field human-readable output
    #[default]
    Pretty,
    /// Single-line output for terminals
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, falling back to pretty
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::default(),
            include_location: false,
            service_name: service_names::NUTRIGRADE.into(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Build settings from the environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT").map_or(defaults.format, |value| LogFormat::parse(&value)),
            include_location: environment == "production"
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            environment,
        }
    }

    /// Settings for `nutrigrade-cli`
    ///
    /// Warnings only, or debug with `verbose`, in compact form. Explicit
    /// `RUST_LOG` and `LOG_FORMAT` values still apply.
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        let mut config = Self::from_env();
        if env::var("RUST_LOG").is_err() {
            config.level = if verbose { "debug" } else { "warn" }.into();
        }
        if env::var("LOG_FORMAT").is_err() {
            config.format = LogFormat::Compact;
        }
        config
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::new(&self.level);
        let registry = tracing_subscriber::registry().with(filter);

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        installed.map_err(|error| anyhow!("Failed to install tracing subscriber: {error}"))?;

        info!(
            service.name = %self.service_name,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" Compact "), LogFormat::Compact);
        assert_eq!(LogFormat::parse("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_default_service_name() {
        assert_eq!(LoggingConfig::default().service_name, "nutrigrade");
    }
}
