//! Die subsystem.
//!
//! # Data Flow
//! ```text
//! DiceConfig.dice (initial faces, optional seed)
//!     → die.rs (StandardDie, seeded once)
//!     → shared via Arc<Mutex<_>> in the HTTP state
//!     → handlers set faces, then roll or cheat
//! ```
//!
//! # Design Decisions
//! - `Die` is a trait so handlers can be exercised with a test double
//! - The generator is seeded once per die and never reseeded per roll
//! - Face-count validation happens at construction and in the handlers

pub mod die;

pub use die::{Die, StandardDie, DEFAULT_FACES};
