use crate::server::service::handler::{get_levels, not_found};
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the application router.
///
/// `GET /api` serves levels; every other path falls through to
/// [`not_found`]. Each request gets a `TraceLayer` span and permissive CORS
/// headers.
pub fn router() -> Router {
    Router::new()
        .route("/api", get(get_levels))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
}
