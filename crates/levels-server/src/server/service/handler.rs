//! Request handlers for the level sequence endpoint.
//!
//! [`get_levels`] serves `GET /api`: it parses the `seed`, `cursor` and
//! `batch` query parameters, logs what it received, validates them in order
//! and returns the generated levels with the advanced cursor. Validation
//! failures become `400 Bad Request` through [`levels_core::Error`]'s
//! `IntoResponse` impl.
//!
//! [`not_found`] answers every other path with a plain-text hint naming the
//! path that was requested.

use crate::server::telemetry::{
    increment_levels_generated, increment_rejected_requests, increment_requests,
    record_batch_size,
};
use axum::{
    Json,
    extract::Query,
    http::{StatusCode, Uri},
};
use levels_core::{Result, params::RawParams, sequence::LevelBatch};

/// Handles `GET /api?seed=<int>&cursor=<int>&batch=<int>`.
///
/// Query pairs are taken in order so that a repeated key resolves to its
/// first occurrence.
#[tracing::instrument(name = "get_levels", skip_all)]
pub async fn get_levels(Query(pairs): Query<Vec<(String, String)>>) -> Result<Json<LevelBatch>> {
    let params = RawParams::from_pairs(pairs).parse();

    tracing::info!(
        seed = ?params.seed,
        cursor = ?params.cursor,
        batch = params.batch,
        "Received level request"
    );
    increment_requests();

    let request = params.validate().inspect_err(|e| {
        tracing::warn!(field = e.field(), "Rejected level request: {}", e);
        increment_rejected_requests(e.field());
    })?;

    let batch = request.generate();
    tracing::debug!(levels = ?batch.levels, cursor = batch.cursor, "Generated levels");
    increment_levels_generated(batch.levels.len() as u64);
    record_batch_size(batch.levels.len() as f64);

    Ok(Json(batch))
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> (StatusCode, String) {
    tracing::debug!(path = uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        format!(
            "You're querying the wrong endpoint: {}. On the bright side, you're connected!",
            uri.path()
        ),
    )
}
