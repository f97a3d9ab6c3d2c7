//! Schema synchronization phase.
//!
//! Runs the application's migration command exactly once per startup, after
//! the dependency is known reachable. Idempotence against an already-migrated
//! schema is the migration tooling's own guarantee.
//!
//! A non-zero exit is fatal: launching a server against a stale schema is
//! worse than crash-looping, and migrations are not safely retryable blind.

use crate::config::CommandsConfig;
use crate::phases::command::{run_command, CommandError};

pub async fn synchronize_schema(commands: &CommandsConfig) -> Result<(), CommandError> {
    tracing::info!(command = ?commands.migrate, "Applying database migrations");
    run_command(&commands.migrate).await?;
    tracing::info!("Database schema is up to date");
    Ok(())
}
