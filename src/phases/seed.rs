//! Seed gate phase.
//!
//! # Responsibilities
//! - Honor the opt-in flag: disabled means the seeder is never invoked
//! - Resolve seeder availability once, as a variant, not via error control
//!   flow
//! - Swallow every seed failure; seeding is a demo/staging convenience and
//!   must never block startup
//!
//! Detecting already-seeded state is the seeder's own job; the gate may run
//! on every restart of an environment that leaves `SEED_DATA=1` set and
//! tracks nothing itself.

use crate::config::EntrypointConfig;
use crate::phases::command::{run_command, CommandError};
use crate::phases::PhaseOutcome;

/// Seeder capability, resolved once per startup.
pub enum Seeder {
    Available(Vec<String>),
    Unavailable(&'static str),
}

pub fn resolve(config: &EntrypointConfig) -> Seeder {
    if config.commands.seed.is_empty() {
        Seeder::Unavailable("no seed command configured")
    } else {
        Seeder::Available(config.commands.seed.clone())
    }
}

pub async fn run_seed_gate(config: &EntrypointConfig) -> PhaseOutcome {
    if !config.seed.enabled {
        tracing::debug!("Seeding disabled, skipping");
        return PhaseOutcome::Skipped;
    }

    let argv = match resolve(config) {
        Seeder::Available(argv) => argv,
        Seeder::Unavailable(reason) => {
            tracing::warn!(reason, "Seeder unavailable; continuing without seed data");
            return PhaseOutcome::SoftFailed;
        }
    };

    tracing::info!(command = ?argv, "Seeding initial data");
    match run_command(&argv).await {
        Ok(()) => {
            tracing::info!("Seed data applied");
            PhaseOutcome::Completed
        }
        // A missing seeder binary is absence, not breakage.
        Err(CommandError::NotFound { program }) => {
            tracing::warn!(
                program = %program,
                "Seeder unavailable; continuing without seed data"
            );
            PhaseOutcome::SoftFailed
        }
        Err(error) => {
            tracing::warn!(error = %error, "Seeding failed; continuing without seed data");
            PhaseOutcome::SoftFailed
        }
    }
}
