//! Database readiness probing subsystem.
//!
//! # Data Flow
//! ```text
//! EntrypointConfig
//!     → select_probe (pick strategy from configuration availability)
//!         host + user + name → postgres.rs (protocol-aware handshake)
//!         host only          → tcp.rs (bare socket reachability)
//!         no host            → None (phase skipped)
//!     → wait_for_ready (bounded retry loop, fixed interval)
//! ```
//!
//! # Design Decisions
//! - Protocol-aware probe preferred: proves authenticated sessions are
//!   accepted, not just that the port is open
//! - Fixed interval, bounded attempt budget; the loop never retries
//!   unboundedly
//! - Each attempt's connection is closed before the next; nothing is held
//!   across phases

pub mod postgres;
pub mod tcp;

use std::time::{Duration, Instant};

use tokio::time;

use crate::config::{EntrypointConfig, ProbeConfig};
use postgres::PostgresProbe;
use tcp::TcpProbe;

/// Error type for probe attempts and the probe phase.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("attempt timed out after {0:?}")]
    Timeout(Duration),

    #[error("dependency not ready after {attempts} attempts")]
    BudgetExhausted { attempts: u32 },
}

/// A readiness probe strategy, selected once from configuration.
pub enum ReadinessProbe {
    /// Protocol-aware handshake against the database itself.
    Postgres(PostgresProbe),
    /// Generic TCP reachability check.
    Tcp(TcpProbe),
}

impl ReadinessProbe {
    /// Human-readable strategy name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ReadinessProbe::Postgres(_) => "postgres",
            ReadinessProbe::Tcp(_) => "tcp",
        }
    }

    /// The probed endpoint, for logging.
    pub fn target(&self) -> String {
        match self {
            ReadinessProbe::Postgres(probe) => probe.target(),
            ReadinessProbe::Tcp(probe) => probe.target(),
        }
    }

    /// Run a single probe attempt. The connection, if any, is closed before
    /// returning.
    pub async fn check(&self) -> Result<(), ProbeError> {
        match self {
            ReadinessProbe::Postgres(probe) => probe.check().await,
            ReadinessProbe::Tcp(probe) => probe.check().await,
        }
    }
}

/// Pick the probe strategy the configuration supports.
///
/// Returns `None` when no database host is configured: the probe phase is
/// skipped, not failed.
pub fn select_probe(config: &EntrypointConfig) -> Option<ReadinessProbe> {
    let db = &config.database;
    let host = db.host.as_deref()?;

    match (db.user.as_deref(), db.name.as_deref()) {
        (Some(user), Some(name)) => Some(ReadinessProbe::Postgres(PostgresProbe::new(
            host,
            db.port,
            user,
            db.password.as_deref(),
            name,
        ))),
        _ => Some(ReadinessProbe::Tcp(TcpProbe::new(host, db.port))),
    }
}

/// One probe attempt's ephemeral record, used only for logging.
#[derive(Debug)]
pub struct ProbeAttempt {
    pub attempt: u32,
    pub elapsed: Duration,
    pub outcome: Result<(), ProbeError>,
}

/// Poll the probe until it succeeds or the attempt budget runs out.
///
/// Returns the number of attempts used on success. Exhausting the budget is
/// a hard failure: the caller must abort before migration.
pub async fn wait_for_ready(
    probe: &ReadinessProbe,
    config: &ProbeConfig,
) -> Result<u32, ProbeError> {
    let interval = Duration::from_millis(config.interval_ms);
    let connect_timeout = Duration::from_secs(config.connect_timeout_secs);

    for attempt in 1..=config.max_attempts {
        let started = Instant::now();
        let outcome = match time::timeout(connect_timeout, probe.check()).await {
            Ok(result) => result,
            Err(_) => Err(ProbeError::Timeout(connect_timeout)),
        };
        let record = ProbeAttempt {
            attempt,
            elapsed: started.elapsed(),
            outcome,
        };

        match &record.outcome {
            Ok(()) => {
                tracing::info!(
                    attempt = record.attempt,
                    elapsed_ms = record.elapsed.as_millis() as u64,
                    target = %probe.target(),
                    "Database is ready"
                );
                return Ok(attempt);
            }
            Err(error) => {
                tracing::info!(
                    attempt = record.attempt,
                    max_attempts = config.max_attempts,
                    elapsed_ms = record.elapsed.as_millis() as u64,
                    error = %error,
                    "Waiting for database"
                );
            }
        }

        if attempt < config.max_attempts {
            time::sleep(interval).await;
        }
    }

    Err(ProbeError::BudgetExhausted {
        attempts: config.max_attempts,
    })
}
