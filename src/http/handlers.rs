//! Dice endpoint handlers.
//!
//! Both handlers accept only GET; every other method gets the JSON not-found
//! body. Query parameters are resolved before the die lock is taken, and the
//! lock is held across set, operate and read-back so concurrent requests
//! never see each other's face count.

use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::Method,
    response::{IntoResponse, Response},
    Json,
};

use crate::dice::Die;
use crate::http::request::DiceQuery;
use crate::http::response::{not_found, ApiError, DiceResult};
use crate::http::server::AppState;
use crate::observability::metrics;

const ROLL_ENDPOINT: &str = "roll";
const CHEAT_ENDPOINT: &str = "cheat";

/// `/` and every unrouted path: roll the die.
pub async fn roll_dice<D: Die + 'static>(
    State(state): State<AppState<D>>,
    method: Method,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let start = Instant::now();
    let response = if method == Method::GET {
        into_json(roll(&state, &DiceQuery::from_pairs(&pairs)).await)
    } else {
        tracing::debug!(method = %method, "Unsupported method");
        not_found()
    };
    metrics::record_request(ROLL_ENDPOINT, response.status().as_u16(), start);
    response
}

/// `/cheat`: force an outcome.
pub async fn cheat_dice<D: Die + 'static>(
    State(state): State<AppState<D>>,
    method: Method,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let start = Instant::now();
    let response = if method == Method::GET {
        into_json(cheat(&state, &DiceQuery::from_pairs(&pairs)).await)
    } else {
        tracing::debug!(method = %method, "Unsupported method");
        not_found()
    };
    metrics::record_request(CHEAT_ENDPOINT, response.status().as_u16(), start);
    response
}

async fn roll<D: Die>(state: &AppState<D>, query: &DiceQuery) -> Result<DiceResult, ApiError> {
    let faces = query.resolve_faces()?;

    let mut die = state.die.lock().await;
    die.set_faces(faces);
    let number = die.roll();
    let result = DiceResult {
        number,
        faces: die.faces(),
    };
    drop(die);

    tracing::debug!(number = result.number, faces = result.faces, "Rolled");
    Ok(result)
}

async fn cheat<D: Die>(state: &AppState<D>, query: &DiceQuery) -> Result<DiceResult, ApiError> {
    let faces = query.resolve_faces()?;
    let requested = query.resolve_number(faces)?;

    let mut die = state.die.lock().await;
    die.set_faces(faces);
    let number = die.cheat(requested);
    let result = DiceResult {
        number,
        faces: die.faces(),
    };
    drop(die);

    tracing::debug!(requested, number = result.number, faces = result.faces, "Cheated");
    Ok(result)
}

fn into_json(result: Result<DiceResult, ApiError>) -> Response {
    match result {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Rejected query");
            e.into_response()
        }
    }
}
