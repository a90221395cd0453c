//! Response shaping and error mapping.
//!
//! # Design Decisions
//! - Successful results and the not-found body are JSON
//! - Malformed query parameters map to 500 with a plain-text body

use std::num::ParseIntError;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body sent for any method other than GET.
pub const NOT_FOUND_BODY: &str = r#"{"message": "not found"}"#;

/// Outcome of a roll or cheat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceResult {
    pub number: i64,
    pub faces: i64,
}

/// Errors surfaced to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid value {value:?} for query parameter `{name}`: {source}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        source: ParseIntError,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// 404 response for unsupported methods.
pub fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "application/json")],
        NOT_FOUND_BODY,
    )
        .into_response()
}
