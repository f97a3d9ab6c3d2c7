//! Startup orchestration.
//!
//! # Responsibilities
//! - Run the four phases in dependency order, exactly once each
//! - Abort on fatal failures (unreachable dependency, broken migration)
//! - Absorb soft failures (assets, seeding) and keep going
//!
//! # Design Decisions
//! - Fail fast and loudly on structural problems, degrade gracefully on
//!   cosmetic ones
//! - The probe sleep is the only suspension point in the whole sequence

use crate::config::EntrypointConfig;
use crate::phases::command::CommandError;
use crate::phases::{assets, migrate, seed, PhaseOutcome};
use crate::probe::{self, ProbeError};

/// Fatal startup failure. Carries a typed exit code so the binary can
/// propagate the failing subprocess's status where one exists.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("database unreachable: {source}")]
    DependencyUnreachable {
        #[source]
        source: ProbeError,
    },

    #[error("schema migration failed: {source}")]
    MigrationFailed {
        #[source]
        source: CommandError,
    },

    #[error("server launch failed: {source}")]
    LaunchFailed {
        #[source]
        source: CommandError,
    },
}

impl StartupError {
    /// Process exit code: the subprocess's own code where available, else a
    /// generic failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            StartupError::MigrationFailed { source } | StartupError::LaunchFailed { source } => {
                source.exit_code().unwrap_or(1)
            }
            StartupError::DependencyUnreachable { .. } => 1,
        }
    }
}

/// Per-phase outcomes for the completed (non-fatal) part of the sequence.
#[derive(Debug)]
pub struct StartupReport {
    pub probe: PhaseOutcome,
    /// Attempts used by the probe; 0 when the phase was skipped.
    pub probe_attempts: u32,
    pub migration: PhaseOutcome,
    pub assets: PhaseOutcome,
    pub seed: PhaseOutcome,
}

/// Run phases 1–4. On success the caller hands off to the server; on error
/// the process must terminate with `error.exit_code()`.
pub async fn run_startup(config: &EntrypointConfig) -> Result<StartupReport, StartupError> {
    // Phase 1: readiness probe, skipped when no dependency is configured.
    let (probe_outcome, probe_attempts) = match probe::select_probe(config) {
        Some(ready_probe) => {
            tracing::info!(
                strategy = ready_probe.kind(),
                target = %ready_probe.target(),
                max_attempts = config.probe.max_attempts,
                "Waiting for database to accept connections"
            );
            let attempts = probe::wait_for_ready(&ready_probe, &config.probe)
                .await
                .map_err(|source| StartupError::DependencyUnreachable { source })?;
            (PhaseOutcome::Completed, attempts)
        }
        None => {
            tracing::info!("No database host configured, skipping readiness probe");
            (PhaseOutcome::Skipped, 0)
        }
    };

    // Phase 2: schema migration, fatal on failure.
    migrate::synchronize_schema(&config.commands)
        .await
        .map_err(|source| StartupError::MigrationFailed { source })?;

    // Phase 3: asset collection, soft-fail.
    let assets_outcome = assets::collect_static(&config.commands).await;

    // Phase 4: opt-in seeding, soft-fail.
    let seed_outcome = seed::run_seed_gate(config).await;

    Ok(StartupReport {
        probe: probe_outcome,
        probe_attempts,
        migration: PhaseOutcome::Completed,
        assets: assets_outcome,
        seed: seed_outcome,
    })
}
