//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (attempt budget, worker count, intervals)
//! - Check phase commands are invocable (non-empty argv)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: EntrypointConfig → Result<(), Vec<ValidationError>>
//! - Runs once, before the first phase

use std::net::SocketAddr;

use crate::config::schema::EntrypointConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("server.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("probe.max_attempts must be at least 1")]
    ZeroProbeAttempts,

    #[error("probe.interval_ms must be at least 1")]
    ZeroProbeInterval,

    #[error("database.port must be nonzero")]
    ZeroDatabasePort,

    #[error("server.workers must be at least 1")]
    ZeroWorkers,

    #[error("commands.{0} must not be empty")]
    EmptyCommand(&'static str),
}

/// Validate a resolved configuration, collecting every failure.
pub fn validate_config(config: &EntrypointConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind_address.clone(),
        ));
    }
    if config.probe.max_attempts == 0 {
        errors.push(ValidationError::ZeroProbeAttempts);
    }
    if config.probe.interval_ms == 0 {
        errors.push(ValidationError::ZeroProbeInterval);
    }
    if config.database.port == 0 {
        errors.push(ValidationError::ZeroDatabasePort);
    }
    if config.server.workers == 0 {
        errors.push(ValidationError::ZeroWorkers);
    }

    // The seed command may be empty: that models "no seeder available" and
    // is handled as a soft skip by the seed gate, never an error.
    if config.commands.migrate.is_empty() {
        errors.push(ValidationError::EmptyCommand("migrate"));
    }
    if config.commands.collect_static.is_empty() {
        errors.push(ValidationError::EmptyCommand("collect_static"));
    }
    if config.commands.server.is_empty() {
        errors.push(ValidationError::EmptyCommand("server"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
