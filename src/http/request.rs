//! Request handling.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the client sends none
//! - Resolve the optional `faces` and `number` query parameters
//!
//! # Design Decisions
//! - Query parameters are collected as raw pairs; the first occurrence of a
//!   name wins and an empty value counts as absent
//! - Parsing happens before the die is touched, so a bad parameter never
//!   mutates shared state

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::dice::DEFAULT_FACES;
use crate::http::response::ApiError;

/// Header carrying the request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates a UUID v4 request ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Raw query parameters understood by the dice endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiceQuery {
    pub faces: Option<String>,
    pub number: Option<String>,
}

impl DiceQuery {
    /// Build from decoded `key=value` pairs.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            faces: first_value(pairs, "faces"),
            number: first_value(pairs, "number"),
        }
    }

    /// Face count for this request: default when absent, corrected when
    /// non-positive, error when not an integer.
    pub fn resolve_faces(&self) -> Result<i64, ApiError> {
        match parse_param("faces", self.faces.as_deref())? {
            Some(faces) if faces > 0 => Ok(faces),
            _ => Ok(DEFAULT_FACES),
        }
    }

    /// Requested cheat outcome, defaulting to the resolved face count.
    pub fn resolve_number(&self, faces: i64) -> Result<i64, ApiError> {
        Ok(parse_param("number", self.number.as_deref())?.unwrap_or(faces))
    }
}

fn first_value(pairs: &[(String, String)], name: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
        .filter(|value| !value.is_empty())
}

fn parse_param(name: &'static str, raw: Option<&str>) -> Result<Option<i64>, ApiError> {
    raw.map(|value| {
        value.parse::<i64>().map_err(|source| ApiError::InvalidParameter {
            name,
            value: value.to_string(),
            source,
        })
    })
    .transpose()
}
