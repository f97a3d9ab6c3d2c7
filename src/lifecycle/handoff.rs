//! Process handoff to the application server.
//!
//! # Responsibilities
//! - Build the final server argv from config
//! - Replace the orchestrator process with the server where the platform
//!   supports it (`exec`), so signals and supervision target the server
//!   directly
//! - Otherwise supervise: spawn, forward termination, exit with the
//!   server's own code
//!
//! Either way the external contract is the same: after handoff the
//! orchestrator's exit code is the server's exit code.

use std::io;

use tokio::process::Command;

use crate::config::EntrypointConfig;
use crate::lifecycle::signals;
use crate::lifecycle::startup::StartupError;
use crate::phases::command::CommandError;

/// The server command with bind/worker/timeout flags appended from config.
pub fn server_argv(config: &EntrypointConfig) -> Vec<String> {
    let mut argv = config.commands.server.clone();
    argv.push("--bind".into());
    argv.push(config.server.bind_address.clone());
    argv.push("--workers".into());
    argv.push(config.server.workers.to_string());
    argv.push("--timeout".into());
    argv.push(config.server.request_timeout_secs.to_string());
    argv
}

/// Replace the current process with the server. Only returns on failure.
#[cfg(unix)]
pub fn exec_server(config: &EntrypointConfig) -> StartupError {
    use std::os::unix::process::CommandExt;

    let argv = server_argv(config);
    tracing::info!(command = ?argv, "Handing off to application server");

    // exec only returns when replacement failed.
    let error = std::process::Command::new(&argv[0]).args(&argv[1..]).exec();
    StartupError::LaunchFailed {
        source: spawn_error(&argv[0], error),
    }
}

/// Spawn the server and wait for it, forwarding termination requests.
/// Returns the server's exit code.
pub async fn supervise_server(config: &EntrypointConfig) -> Result<i32, StartupError> {
    let argv = server_argv(config);
    tracing::info!(command = ?argv, "Starting application server (supervised)");

    let mut child = Command::new(&argv[0])
        .args(&argv[1..])
        .spawn()
        .map_err(|error| StartupError::LaunchFailed {
            source: spawn_error(&argv[0], error),
        })?;

    // Resolve the race first so the wait future is dropped before the child
    // is touched again.
    let exited = tokio::select! {
        status = child.wait() => Some(status),
        () = signals::shutdown_requested() => None,
    };

    match exited {
        Some(status) => {
            let status = status.map_err(|error| StartupError::LaunchFailed {
                source: spawn_error(&argv[0], error),
            })?;
            Ok(status.code().unwrap_or(1))
        }
        None => {
            // Best effort: stop the child, then report a clean external stop.
            let _ = child.start_kill();
            match child.wait().await {
                Ok(status) => Ok(status.code().unwrap_or(0)),
                Err(_) => Ok(0),
            }
        }
    }
}

fn spawn_error(program: &str, error: io::Error) -> CommandError {
    match error.kind() {
        io::ErrorKind::NotFound => CommandError::NotFound {
            program: program.to_string(),
        },
        _ => CommandError::Spawn {
            program: program.to_string(),
            source: error,
        },
    }
}
