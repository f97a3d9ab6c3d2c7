//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Probe dependency → Migrate schema → Collect assets → Seed (opt-in)
//!     Fatal failure at probe/migrate aborts with a non-zero exit
//!
//! Handoff (handoff.rs):
//!     Sequence complete → exec the application server (process replacement)
//!     Fallback: spawn, forward termination, exit with the server's code
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → forwarded to the supervised server
//! ```
//!
//! # Design Decisions
//! - Strictly sequential: each phase's postcondition is the next one's
//!   precondition
//! - Prefer true process replacement so supervisors signal the server
//!   directly, with no wrapper left in between
//! - Typed exit codes; no process::exit in library code

pub mod handoff;
pub mod signals;
pub mod startup;

pub use startup::{run_startup, StartupError, StartupReport};
