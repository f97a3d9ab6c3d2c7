//! Static asset collection phase.
//!
//! Soft-fail by design: missing asset sources are cosmetic, and the server
//! can still bind and serve dynamic traffic without them. This deliberately
//! diverges from the migration phase's strictness.

use crate::config::CommandsConfig;
use crate::phases::command::run_command;
use crate::phases::PhaseOutcome;

pub async fn collect_static(commands: &CommandsConfig) -> PhaseOutcome {
    tracing::info!(command = ?commands.collect_static, "Collecting static assets");
    match run_command(&commands.collect_static).await {
        Ok(()) => {
            tracing::info!("Static assets collected");
            PhaseOutcome::Completed
        }
        Err(error) => {
            tracing::warn!(
                error = %error,
                "Static asset collection failed; continuing without fresh assets"
            );
            PhaseOutcome::SoftFailed
        }
    }
}
