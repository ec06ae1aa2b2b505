//! # levels-core
//!
//! Shared logic for the level sequence service: the closed-form sequence
//! formula, lenient query parameter parsing, ordered request validation and
//! the error type that maps onto HTTP responses.
//!
//! ```
//! use levels_core::{params::RawParams, sequence::LevelBatch};
//!
//! let params = RawParams::from_pairs([("seed", "5"), ("cursor", "2"), ("batch", "3")]).parse();
//! let batch = params.validate().map(|req| req.generate()).unwrap();
//! assert_eq!(batch, LevelBatch { levels: vec![30, 45, 60], cursor: 5 });
//! ```

mod common;
pub mod params;
pub mod sequence;

pub use common::*;
