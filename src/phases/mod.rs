//! Startup phase subsystem.
//!
//! # Phase sequence
//! ```text
//! PROBING → {SKIPPED|READY}
//!     → MIGRATING → {FAILED(fatal)|MIGRATED}       (migrate.rs)
//!     → COLLECTING_ASSETS → soft-fail tolerated     (assets.rs)
//!     → SEEDING(optional) → soft-fail tolerated     (seed.rs)
//!     → SERVING (terminal)
//! ```
//!
//! # Design Decisions
//! - Schema failures are structural: fatal, no retry
//! - Asset and seed failures are cosmetic: logged and absorbed
//! - Every phase invokes its collaborator at most once per startup

pub mod assets;
pub mod command;
pub mod migrate;
pub mod seed;

/// Outcome of a single phase, recorded in the startup report.
///
/// Fatal failures never produce an outcome; they abort the sequence as
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// The phase ran and succeeded.
    Completed,
    /// The phase did not apply (no dependency host, seeding disabled).
    Skipped,
    /// The phase failed but startup continues.
    SoftFailed,
}
