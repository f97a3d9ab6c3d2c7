//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! orchestrator. All types derive Serde traits for deserialization from
//! config files; environment overrides are applied by the loader.

use serde::{Deserialize, Serialize};

/// Root configuration for the startup orchestrator.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EntrypointConfig {
    /// Database dependency settings (probe target).
    pub database: DatabaseConfig,

    /// Readiness probe retry bounds.
    pub probe: ProbeConfig,

    /// One-time data seeding gate.
    pub seed: SeedConfig,

    /// Application server settings handed to the launcher.
    pub server: ServerConfig,

    /// External commands invoked by each phase.
    pub commands: CommandsConfig,
}

/// Database dependency configuration.
///
/// When `host` is unset the readiness probe phase is skipped entirely:
/// there is no dependency to wait for.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database host. Absence skips the probe phase.
    pub host: Option<String>,

    /// Database port.
    pub port: u16,

    /// User for the protocol-aware probe variant.
    pub user: Option<String>,

    /// Password for the protocol-aware probe variant.
    pub password: Option<String>,

    /// Database name for the protocol-aware probe variant.
    pub name: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: 5432,
            user: None,
            password: None,
            name: None,
        }
    }
}

/// Readiness probe retry bounds.
///
/// The probe loop is the only retrying operation in the whole sequence and
/// is bounded by `max_attempts` so an unreachable dependency crash-loops
/// visibly instead of hanging the container forever.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Maximum number of probe attempts before declaring the dependency
    /// unreachable.
    pub max_attempts: u32,

    /// Fixed delay between attempts in milliseconds.
    pub interval_ms: u64,

    /// Per-attempt connection timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval_ms: 1000,
            connect_timeout_secs: 5,
        }
    }
}

/// Data seeding gate. Disabled by default; enabled only by an explicit
/// opt-in (`SEED_DATA=1`).
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SeedConfig {
    /// Run the seed command after migration.
    pub enabled: bool,
}

/// Application server configuration, appended to the server command as
/// gunicorn-style flags by the launcher.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,

    /// Worker process count.
    pub workers: u32,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            workers: 3,
            request_timeout_secs: 60,
        }
    }
}

/// External commands invoked by each phase, as argv vectors.
///
/// The defaults target the Django deployment this orchestrator ships with;
/// any of them can be swapped out via the config file, and the server
/// command additionally via trailing CLI arguments.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// Schema migration command. Non-zero exit is fatal.
    pub migrate: Vec<String>,

    /// Static asset collection command. Non-zero exit is tolerated.
    pub collect_static: Vec<String>,

    /// Data seeding command. Any failure is tolerated; an empty argv means
    /// no seeder is available.
    pub seed: Vec<String>,

    /// Long-running server command; the launcher appends bind/worker/timeout
    /// flags from [`ServerConfig`].
    pub server: Vec<String>,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            migrate: argv(&["python", "manage.py", "migrate", "--noinput"]),
            collect_static: argv(&["python", "manage.py", "collectstatic", "--noinput"]),
            seed: argv(&["python", "manage.py", "seed_repairs"]),
            server: argv(&["gunicorn", "core.wsgi:application"]),
        }
    }
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
