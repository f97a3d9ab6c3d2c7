//! Container Startup Orchestrator Library
//!
//! Runs once per container lifecycle, in strict sequence:
//!
//! ```text
//! START → PROBING → {SKIPPED|READY}
//!       → MIGRATING → {FAILED(fatal)|MIGRATED}
//!       → COLLECTING_ASSETS (soft-fail)
//!       → SEEDING (opt-in, soft-fail)
//!       → SERVING (terminal, process handoff)
//! ```

pub mod config;
pub mod lifecycle;
pub mod phases;
pub mod probe;

pub use config::EntrypointConfig;
pub use lifecycle::{run_startup, StartupError, StartupReport};
pub use phases::PhaseOutcome;
