//! Configuration validation.
//!
//! Returns every problem found, not just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::DiceConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid listener.bind_address `{0}`")]
    BindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("invalid observability.metrics_address `{0}`")]
    MetricsAddress(String),

    #[error("observability.log_level must not be empty")]
    EmptyLogLevel,
}

/// Check a deserialized configuration for semantic errors.
pub fn validate_config(config: &DiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if observability.log_level.trim().is_empty() {
        errors.push(ValidationError::EmptyLogLevel);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
