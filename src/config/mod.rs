//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → DiceConfig (validated, immutable)
//!     → consumed by main.rs at startup
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file (or no file) is valid
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{DiceConfig, DieConfig, ListenerConfig, ObservabilityConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
