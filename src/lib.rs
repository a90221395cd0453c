//! Dice API library.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request           ┌───────────────────────────────────────────┐
//!     ─────────────────────────┼─▶ http::server ──▶ http::handlers         │
//!                              │   (layers: id,     (parse query,          │
//!                              │    trace, timeout)  lock die)             │
//!                              │                        │                  │
//!                              │                        ▼                  │
//!     Client Response          │                   dice::Die               │
//!     ◀────────────────────────┼── http::response ◀── roll / cheat         │
//!                              │                                           │
//!                              │  config · observability · lifecycle       │
//!                              └───────────────────────────────────────────┘
//! ```

pub mod config;
pub mod dice;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::DiceConfig;
pub use dice::{Die, StandardDie};
pub use http::DiceServer;
pub use lifecycle::Shutdown;
