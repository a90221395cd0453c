//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, middleware layers)
//!     → request.rs (request ID, query parameter parsing)
//!     → handlers.rs (lock die, set faces, roll or cheat)
//!     → response.rs (JSON result, not-found body, error mapping)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{DiceQuery, UuidRequestId, X_REQUEST_ID};
pub use response::{ApiError, DiceResult};
pub use server::{AppState, DiceServer};
