//! Error types for the level sequence service.
//!
//! This module defines the central `Error` enum, one variant per validation
//! rule a request can fail. It implements [`IntoResponse`] so handlers can
//! return it directly with `?`: every variant becomes a `400 Bad Request`
//! carrying a JSON body `{"error": "<message>"}`.
//!
//! ## Error Cases
//! - `MissingParams`: `seed` or `cursor` was absent or not an integer.
//! - `BatchTooBig`: more than [`MAX_BATCH`] levels were requested.
//! - `BatchTooLow`: zero or a negative number of levels were requested.
//! - `CursorTooLow`: the cursor was negative.
//! - `SeedTooLow`: the seed was below 1.
//! - `CursorTooHigh`: advancing the cursor would overflow `i64`.
//!
//! [`MAX_BATCH`]: crate::types::MAX_BATCH

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the level sequence service.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// `seed` or `cursor` was absent or could not be parsed as an integer.
    #[error(
        "Invalid request data, received seed={}, cursor={}",
        received(.seed),
        received(.cursor)
    )]
    MissingParams {
        seed: Option<i64>,
        cursor: Option<i64>,
    },

    /// The requested batch exceeds the per-request maximum.
    #[error("Your batch size is too big: {0}")]
    BatchTooBig(i64),

    /// The requested batch is zero or negative.
    #[error("Your batch size is too low: {0}")]
    BatchTooLow(i64),

    /// The cursor is negative.
    #[error("Your cursor is too low: {0}")]
    CursorTooLow(i64),

    /// The seed is below 1.
    #[error("Your seed is too low: {0}")]
    SeedTooLow(i64),

    /// `cursor + batch` does not fit in an `i64`.
    #[error("Your cursor is too high: {cursor} cannot advance by {batch}")]
    CursorTooHigh { cursor: i64, batch: i64 },
}

impl Error {
    /// Name of the query parameter responsible for the rejection.
    pub fn field(&self) -> &'static str {
        match self {
            Error::MissingParams { seed: None, .. } => "seed",
            Error::MissingParams { .. } => "cursor",
            Error::BatchTooBig(_) | Error::BatchTooLow(_) => "batch",
            Error::CursorTooLow(_) | Error::CursorTooHigh { .. } => "cursor",
            Error::SeedTooLow(_) => "seed",
        }
    }

    /// HTTP status reported to the client.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

fn received(value: &Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "none".to_string(),
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
