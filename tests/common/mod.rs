//! Shared utilities for integration testing.
//!
//! Phases drive external commands, so the fakes here are tiny shell scripts
//! that record their invocation in marker files and exit with a scripted
//! status.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use entrypoint::EntrypointConfig;

/// A directory of fake collaborator scripts plus their invocation markers.
pub struct FakeCommands {
    pub dir: tempfile::TempDir,
}

impl FakeCommands {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Write an executable script that touches a marker file named after the
    /// script, then runs `body`.
    pub fn script(&self, name: &str, body: &str) -> Vec<String> {
        let path = self.dir.path().join(name);
        let marker = self.marker_path(name);
        fs::write(
            &path,
            format!("#!/bin/sh\ntouch {}\n{}\n", marker.display(), body),
        )
        .unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        vec![path.display().to_string()]
    }

    pub fn marker_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(format!("{name}.invoked"))
    }

    pub fn was_invoked(&self, name: &str) -> bool {
        self.marker_path(name).exists()
    }
}

/// Config with no database dependency and all three phase commands faked:
/// migrate/collect_static/seed exiting with the given statuses.
pub fn config_with_fakes(
    fakes: &FakeCommands,
    migrate_exit: i32,
    assets_exit: i32,
    seed_exit: i32,
) -> EntrypointConfig {
    let mut config = EntrypointConfig::default();
    config.database.host = None;
    config.commands.migrate = fakes.script("migrate", &format!("exit {migrate_exit}"));
    config.commands.collect_static = fakes.script("collectstatic", &format!("exit {assets_exit}"));
    config.commands.seed = fakes.script("seed", &format!("exit {seed_exit}"));
    config
}

/// Point the probe at an address, with a small bounded budget so failing
/// tests stay fast.
pub fn probe_target(config: &mut EntrypointConfig, host: &str, port: u16) {
    config.database.host = Some(host.to_string());
    config.database.port = port;
    config.probe.max_attempts = 5;
    config.probe.interval_ms = 50;
    config.probe.connect_timeout_secs = 1;
}
