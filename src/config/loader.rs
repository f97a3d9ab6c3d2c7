//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::EntrypointConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {var}: {value:?}")]
    Env { var: &'static str, value: String },

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration: optional TOML file, then environment overrides,
/// then semantic validation.
pub fn load(path: Option<&Path>) -> Result<EntrypointConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => EntrypointConfig::default(),
    };

    apply_env_overrides(&mut config)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment variable overrides on top of the file/default config.
///
/// Unset or empty variables leave the existing value untouched.
fn apply_env_overrides(config: &mut EntrypointConfig) -> Result<(), ConfigError> {
    if let Some(host) = env_string("POSTGRES_HOST") {
        config.database.host = Some(host);
    }
    if let Some(port) = env_parsed("POSTGRES_PORT")? {
        config.database.port = port;
    }
    if let Some(user) = env_string("POSTGRES_USER") {
        config.database.user = Some(user);
    }
    if let Some(password) = env_string("POSTGRES_PASSWORD") {
        config.database.password = Some(password);
    }
    if let Some(name) = env_string("POSTGRES_DB") {
        config.database.name = Some(name);
    }

    if let Some(attempts) = env_parsed("DB_WAIT_ATTEMPTS")? {
        config.probe.max_attempts = attempts;
    }
    if let Some(interval) = env_parsed("DB_WAIT_INTERVAL_MS")? {
        config.probe.interval_ms = interval;
    }
    if let Some(timeout) = env_parsed("DB_CONNECT_TIMEOUT_SECS")? {
        config.probe.connect_timeout_secs = timeout;
    }

    // Opt-in gate: only the literal "1" enables seeding.
    if let Some(flag) = env_string("SEED_DATA") {
        config.seed.enabled = flag == "1";
    }

    if let Some(address) = env_string("BIND_ADDRESS") {
        config.server.bind_address = address;
    }
    if let Some(workers) = env_parsed("WEB_CONCURRENCY")? {
        config.server.workers = workers;
    }
    if let Some(timeout) = env_parsed("REQUEST_TIMEOUT")? {
        config.server.request_timeout_secs = timeout;
    }

    Ok(())
}

fn env_string(var: &'static str) -> Option<String> {
    match env::var(var) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

fn env_parsed<T: std::str::FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match env_string(var) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Env { var, value }),
        None => Ok(None),
    }
}
