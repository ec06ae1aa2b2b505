//! # Sequence Constants
//!
//! Fixed parameters of the level sequence. Clients and the server share these
//! at compile time; changing any of them changes every generated value.
//!
//! - [`LEVEL_MODULUS`] - Prime that wraps every generated value.
//! - [`LEVEL_MULTIPLIER`] - Constant factor applied to `seed * cursor`.
//! - [`MAX_BATCH`] - Largest number of levels a single request may ask for.
//! - [`DEFAULT_BATCH`] - Batch size used when the client omits `batch`.

/// Prime modulus applied to every generated level.
///
/// All levels fall in `0..LEVEL_MODULUS`.
pub const LEVEL_MODULUS: u64 = 1381;

/// Constant factor in `(seed * cursor * LEVEL_MULTIPLIER) % LEVEL_MODULUS`.
pub const LEVEL_MULTIPLIER: u64 = 3;

/// Upper bound (inclusive) on the number of levels per request.
pub const MAX_BATCH: i64 = 10;

/// Batch size used when `batch` is absent or unparsable.
pub const DEFAULT_BATCH: i64 = 1;
