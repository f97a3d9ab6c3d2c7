//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (environment variable overrides)
//!     → validation.rs (semantic checks)
//!     → EntrypointConfig (validated, immutable)
//!     → read by every phase, never re-read mid-run
//! ```
//!
//! # Design Decisions
//! - Config is resolved exactly once, before the first phase runs
//! - All fields have defaults so a bare container still boots
//! - Environment variables win over the file (container convention)
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::CommandsConfig;
pub use schema::DatabaseConfig;
pub use schema::EntrypointConfig;
pub use schema::ProbeConfig;
pub use schema::SeedConfig;
pub use schema::ServerConfig;
