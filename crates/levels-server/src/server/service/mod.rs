//! HTTP service implementation.
//!
//! This module contains the request handlers and the axum router that wires
//! them together with the shared middleware stack.
//!
//! ## Structure
//!
//! - [`handler`] - `GET /api` level generation and the catch-all fallback.
//! - [`router`] - route table, CORS and per-request tracing layers.

pub mod handler;
pub mod router;
