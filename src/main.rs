//! Container startup orchestrator.
//!
//! Sequences dependency readiness, schema migration, static asset
//! collection, and optional data seeding, then hands the process over to the
//! application server.
//!
//! ```text
//!                 ┌──────────────────────────────────────────────┐
//!                 │                 ENTRYPOINT                    │
//!                 │                                               │
//!   env / TOML ───┼─▶ config ──▶ probe ──▶ migrate ──▶ assets    │
//!                 │  (once)    (bounded   (fatal on   (soft-     │
//!                 │             retries)   failure)    fail)     │
//!                 │                                      │        │
//!                 │                        seed ◀────────┘        │
//!                 │                      (opt-in, soft-fail)      │
//!                 │                         │                     │
//!                 └─────────────────────────┼─────────────────────┘
//!                                           ▼
//!                                   exec application server
//!                                 (signals go straight to it)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use entrypoint::config::loader;
use entrypoint::lifecycle::{handoff, run_startup};

#[derive(Parser)]
#[command(name = "entrypoint")]
#[command(about = "Container startup orchestrator: probe, migrate, collect, seed, serve")]
struct Cli {
    /// Path to a TOML configuration file (environment variables still win).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server command override, after `--` (launch flags are appended).
    #[arg(last = true)]
    server_command: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "entrypoint=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("entrypoint v0.1.0 starting");

    let cli = Cli::parse();

    let mut config = match loader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(error = %error, "Configuration rejected");
            return ExitCode::FAILURE;
        }
    };
    if !cli.server_command.is_empty() {
        config.commands.server = cli.server_command.clone();
    }

    tracing::info!(
        database_host = config.database.host.as_deref().unwrap_or("<none>"),
        probe_attempts = config.probe.max_attempts,
        seed_enabled = config.seed.enabled,
        bind_address = %config.server.bind_address,
        workers = config.server.workers,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    let report = match run_startup(&config).await {
        Ok(report) => report,
        Err(error) => {
            tracing::error!(error = %error, "Startup failed");
            return exit_code(error.exit_code());
        }
    };

    tracing::info!(
        probe = ?report.probe,
        probe_attempts = report.probe_attempts,
        assets = ?report.assets,
        seed = ?report.seed,
        "Startup sequence complete, launching server"
    );

    // Terminal phase. On Unix this replaces the process and never returns
    // except on failure; elsewhere we supervise and mirror the server's exit.
    #[cfg(unix)]
    {
        let error = handoff::exec_server(&config);
        tracing::error!(error = %error, "Server handoff failed");
        exit_code(error.exit_code())
    }

    #[cfg(not(unix))]
    {
        match handoff::supervise_server(&config).await {
            Ok(code) => exit_code(code),
            Err(error) => {
                tracing::error!(error = %error, "Server handoff failed");
                exit_code(error.exit_code())
            }
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(code.clamp(0, u8::MAX as i32) as u8)
}
