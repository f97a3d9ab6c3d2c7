//! Integration tests for the startup sequence: phase ordering, fatal
//! short-circuits, soft-fail tolerance, and the seed gate.

#![cfg(unix)]

use std::time::{Duration, Instant};

use entrypoint::lifecycle::handoff;
use entrypoint::{run_startup, PhaseOutcome, StartupError};

mod common;

use common::{config_with_fakes, probe_target, FakeCommands};

#[tokio::test]
async fn happy_path_runs_every_phase_once() {
    let fakes = FakeCommands::new();
    let mut config = config_with_fakes(&fakes, 0, 0, 0);
    config.seed.enabled = true;

    let report = run_startup(&config).await.unwrap();

    assert_eq!(report.probe, PhaseOutcome::Skipped);
    assert_eq!(report.probe_attempts, 0);
    assert_eq!(report.migration, PhaseOutcome::Completed);
    assert_eq!(report.assets, PhaseOutcome::Completed);
    assert_eq!(report.seed, PhaseOutcome::Completed);
    assert!(fakes.was_invoked("migrate"));
    assert!(fakes.was_invoked("collectstatic"));
    assert!(fakes.was_invoked("seed"));
}

#[tokio::test]
async fn failing_migration_short_circuits_everything_after_it() {
    let fakes = FakeCommands::new();
    let mut config = config_with_fakes(&fakes, 7, 0, 0);
    config.seed.enabled = true;

    let error = run_startup(&config).await.unwrap_err();

    assert!(matches!(error, StartupError::MigrationFailed { .. }));
    assert_eq!(error.exit_code(), 7);
    assert!(fakes.was_invoked("migrate"));
    assert!(!fakes.was_invoked("collectstatic"));
    assert!(!fakes.was_invoked("seed"));
}

#[tokio::test]
async fn unreachable_database_aborts_before_migration() {
    let fakes = FakeCommands::new();
    let mut config = config_with_fakes(&fakes, 0, 0, 0);
    // Loopback port 1 refuses connections immediately.
    probe_target(&mut config, "127.0.0.1", 1);

    let started = Instant::now();
    let error = run_startup(&config).await.unwrap_err();

    assert!(matches!(error, StartupError::DependencyUnreachable { .. }));
    assert_eq!(error.exit_code(), 1);
    assert!(!fakes.was_invoked("migrate"));
    // Bounded: 5 attempts x (50ms interval + fast refusal) stays well under
    // the budget ceiling.
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn asset_failure_is_soft() {
    let fakes = FakeCommands::new();
    let config = config_with_fakes(&fakes, 0, 1, 0);

    let report = run_startup(&config).await.unwrap();

    assert_eq!(report.assets, PhaseOutcome::SoftFailed);
    assert_eq!(report.migration, PhaseOutcome::Completed);
}

#[tokio::test]
async fn seeding_is_off_by_default() {
    let fakes = FakeCommands::new();
    let config = config_with_fakes(&fakes, 0, 0, 0);
    assert!(!config.seed.enabled);

    let report = run_startup(&config).await.unwrap();

    assert_eq!(report.seed, PhaseOutcome::Skipped);
    assert!(!fakes.was_invoked("seed"));
}

#[tokio::test]
async fn failing_seed_still_reaches_serving() {
    let fakes = FakeCommands::new();
    let mut config = config_with_fakes(&fakes, 0, 0, 3);
    config.seed.enabled = true;

    let report = run_startup(&config).await.unwrap();

    assert_eq!(report.seed, PhaseOutcome::SoftFailed);
    assert!(fakes.was_invoked("seed"));

    // Startup completed; the server still launches and its exit code is the
    // orchestrator's exit code.
    config.commands.server = vec!["true".into()];
    let code = handoff::supervise_server(&config).await.unwrap();
    assert_eq!(code, 0);
}

#[tokio::test]
async fn database_ready_on_a_later_attempt_succeeds() {
    let fakes = FakeCommands::new();
    let mut config = config_with_fakes(&fakes, 0, 0, 0);

    // Reserve a free port, release it, and bring the listener up only after
    // the first probe attempts have failed.
    let reserved = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = reserved.local_addr().unwrap().port();
    drop(reserved);

    probe_target(&mut config, "127.0.0.1", port);
    config.probe.max_attempts = 30;
    config.probe.interval_ms = 100;

    let listener_task = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(250)).await;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .unwrap();
        // Hold the socket open until the probe has had time to connect.
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(listener);
    });

    let report = run_startup(&config).await.unwrap();
    listener_task.abort();

    assert_eq!(report.probe, PhaseOutcome::Completed);
    assert!(report.probe_attempts >= 2);
    assert!(fakes.was_invoked("migrate"));
}

#[tokio::test]
async fn end_to_end_soft_failures_still_serve() {
    // Full scenario: dependency reachable, migration ok, asset collection
    // exits 1, seeding enabled and ok.
    let fakes = FakeCommands::new();
    let mut config = config_with_fakes(&fakes, 0, 1, 0);
    config.seed.enabled = true;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    probe_target(&mut config, "127.0.0.1", port);

    let report = run_startup(&config).await.unwrap();

    assert_eq!(report.probe, PhaseOutcome::Completed);
    assert_eq!(report.assets, PhaseOutcome::SoftFailed);
    assert_eq!(report.seed, PhaseOutcome::Completed);

    config.commands.server = vec!["true".into()];
    let code = handoff::supervise_server(&config).await.unwrap();
    assert_eq!(code, 0);
}
