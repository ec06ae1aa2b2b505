//! Query parameter parsing and request validation.
//!
//! Requests go through three stages:
//!
//! 1. [`RawParams`] - the untyped `seed`, `cursor` and `batch` strings, first
//!    occurrence of each key wins.
//! 2. [`ParsedParams`] - lenient integer parsing. Unparsable `seed`/`cursor`
//!    count as absent; an unparsable or absent `batch` becomes
//!    [`DEFAULT_BATCH`].
//! 3. [`LevelRequest`] - a request that passed every rule and can be
//!    generated without further checks.
//!
//! Validation rules run in a fixed order and the first failure is reported:
//! presence of `seed` and `cursor`, batch too big, batch too low, cursor too
//! low, seed too low, and finally cursor overflow.

use crate::{
    Error, Result,
    sequence::{LevelBatch, Levels},
    types::{DEFAULT_BATCH, MAX_BATCH},
};

/// Untyped query parameters as received.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawParams {
    pub seed: Option<String>,
    pub cursor: Option<String>,
    pub batch: Option<String>,
}

impl RawParams {
    /// Collects the recognized keys from decoded query pairs.
    ///
    /// Unknown keys are ignored. When a key repeats, the first value is kept.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "seed" => &mut raw.seed,
                "cursor" => &mut raw.cursor,
                "batch" => &mut raw.batch,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        raw
    }

    pub fn parse(&self) -> ParsedParams {
        ParsedParams {
            seed: self.seed.as_deref().and_then(parse_int),
            cursor: self.cursor.as_deref().and_then(parse_int),
            batch: self
                .batch
                .as_deref()
                .and_then(parse_int)
                .unwrap_or(DEFAULT_BATCH),
        }
    }
}

fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Integer parameters before validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedParams {
    pub seed: Option<i64>,
    pub cursor: Option<i64>,
    pub batch: i64,
}

impl ParsedParams {
    /// Applies the validation rules in order, returning the first failure.
    pub fn validate(&self) -> Result<LevelRequest> {
        match (self.seed, self.cursor) {
            (Some(seed), Some(cursor)) => LevelRequest::new(seed, cursor, self.batch),
            (seed, cursor) => Err(Error::MissingParams { seed, cursor }),
        }
    }
}

/// A validated request for `batch` levels starting at `cursor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelRequest {
    seed: u64,
    cursor: u64,
    batch: usize,
}

impl LevelRequest {
    /// Validates range rules for already-present parameters.
    ///
    /// Checks run in order: batch too big, batch too low, cursor too low, seed
    /// too low, cursor overflow.
    pub fn new(seed: i64, cursor: i64, batch: i64) -> Result<Self> {
        if batch > MAX_BATCH {
            return Err(Error::BatchTooBig(batch));
        }
        if batch <= 0 {
            return Err(Error::BatchTooLow(batch));
        }
        if cursor < 0 {
            return Err(Error::CursorTooLow(cursor));
        }
        if seed < 1 {
            return Err(Error::SeedTooLow(seed));
        }
        if cursor.checked_add(batch).is_none() {
            return Err(Error::CursorTooHigh { cursor, batch });
        }

        // All three are non-negative here and batch is at most MAX_BATCH.
        Ok(Self {
            seed: seed as u64,
            cursor: cursor as u64,
            batch: batch as usize,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn batch(&self) -> usize {
        self.batch
    }

    pub fn levels(&self) -> Levels {
        Levels::new(self.seed, self.cursor, self.batch)
    }

    pub fn generate(&self) -> LevelBatch {
        LevelBatch::from(self.levels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LEVEL_MODULUS;

    fn parsed(pairs: &[(&str, &str)]) -> ParsedParams {
        RawParams::from_pairs(pairs.iter().copied()).parse()
    }

    fn run(pairs: &[(&str, &str)]) -> Result<LevelBatch> {
        parsed(pairs).validate().map(|req| req.generate())
    }

    #[test]
    fn generates_concrete_example() {
        let batch = run(&[("seed", "5"), ("cursor", "2"), ("batch", "3")]).unwrap();
        assert_eq!(batch.levels, vec![30, 45, 60]);
        assert_eq!(batch.cursor, 5);
    }

    #[test]
    fn batch_defaults_to_one() {
        let batch = run(&[("seed", "5"), ("cursor", "2")]).unwrap();
        assert_eq!(batch.levels, vec![30]);
        assert_eq!(batch.cursor, 3);
    }

    #[test]
    fn unparsable_batch_falls_back_to_default() {
        let params = parsed(&[("seed", "5"), ("cursor", "2"), ("batch", "many")]);
        assert_eq!(params.batch, DEFAULT_BATCH);
    }

    #[test]
    fn cursor_zero_is_present() {
        let batch = run(&[("seed", "8"), ("cursor", "0"), ("batch", "2")]).unwrap();
        assert_eq!(batch.levels, vec![0, 24]);
        assert_eq!(batch.cursor, 2);
    }

    #[test]
    fn integers_allow_sign_and_whitespace() {
        let params = parsed(&[("seed", " +7 "), ("cursor", "-2"), ("batch", "03")]);
        assert_eq!(params.seed, Some(7));
        assert_eq!(params.cursor, Some(-2));
        assert_eq!(params.batch, 3);
    }

    #[test]
    fn first_occurrence_wins_and_unknown_keys_ignored() {
        let raw = RawParams::from_pairs([
            ("seed", "3"),
            ("level", "x"),
            ("seed", "9"),
            ("cursor", "1"),
        ]);
        assert_eq!(raw.seed.as_deref(), Some("3"));
        assert_eq!(raw.cursor.as_deref(), Some("1"));
        assert_eq!(raw.batch, None);
    }

    #[test]
    fn missing_or_unparsable_seed_and_cursor() {
        assert_eq!(
            run(&[("cursor", "2")]),
            Err(Error::MissingParams {
                seed: None,
                cursor: Some(2)
            })
        );
        assert_eq!(
            run(&[("seed", "5")]),
            Err(Error::MissingParams {
                seed: Some(5),
                cursor: None
            })
        );
        assert_eq!(
            run(&[("seed", "five"), ("cursor", "2.5")]),
            Err(Error::MissingParams {
                seed: None,
                cursor: None
            })
        );
    }

    #[test]
    fn missing_params_checked_before_ranges() {
        let err = run(&[("cursor", "-1"), ("batch", "50")]).unwrap_err();
        assert!(matches!(err, Error::MissingParams { .. }));
    }

    #[test]
    fn batch_bounds() {
        let base = [("seed", "5"), ("cursor", "2")];
        let with_batch = |b: &'static str| {
            let mut pairs = base.to_vec();
            pairs.push(("batch", b));
            run(&pairs)
        };
        assert_eq!(with_batch("11"), Err(Error::BatchTooBig(11)));
        assert_eq!(with_batch("0"), Err(Error::BatchTooLow(0)));
        assert_eq!(with_batch("-1"), Err(Error::BatchTooLow(-1)));
        assert_eq!(with_batch("10").unwrap().levels.len(), 10);
        assert_eq!(with_batch("1").unwrap().levels.len(), 1);
    }

    #[test]
    fn cursor_and_seed_lower_bounds() {
        assert_eq!(
            run(&[("seed", "5"), ("cursor", "-1")]),
            Err(Error::CursorTooLow(-1))
        );
        assert_eq!(
            run(&[("seed", "0"), ("cursor", "2")]),
            Err(Error::SeedTooLow(0))
        );
        assert_eq!(
            run(&[("seed", "-4"), ("cursor", "2")]),
            Err(Error::SeedTooLow(-4))
        );
    }

    #[test]
    fn first_failing_rule_wins() {
        // batch too big beats everything after it
        assert_eq!(LevelRequest::new(0, -1, 11), Err(Error::BatchTooBig(11)));
        // batch too low beats cursor and seed
        assert_eq!(LevelRequest::new(0, -1, 0), Err(Error::BatchTooLow(0)));
        // cursor too low beats seed too low
        assert_eq!(LevelRequest::new(0, -1, 1), Err(Error::CursorTooLow(-1)));
        assert_eq!(LevelRequest::new(0, 0, 1), Err(Error::SeedTooLow(0)));
    }

    #[test]
    fn cursor_overflow_rejected() {
        assert_eq!(
            LevelRequest::new(1, i64::MAX, 1),
            Err(Error::CursorTooHigh {
                cursor: i64::MAX,
                batch: 1
            })
        );
        let req = LevelRequest::new(1, i64::MAX - 10, 10).unwrap();
        assert_eq!(req.generate().cursor, i64::MAX as u64);
    }

    #[test]
    fn levels_follow_formula_across_valid_inputs() {
        for seed in [1_i64, 2, 5, 97, 1380, 1381, 1382, 9_999_999] {
            for cursor in [0_i64, 1, 2, 500, 1380, 123_456_789] {
                for batch in 1..=MAX_BATCH {
                    let req = LevelRequest::new(seed, cursor, batch).unwrap();
                    let out = req.generate();
                    assert_eq!(out.levels.len(), batch as usize);
                    assert_eq!(out.cursor, (cursor + batch) as u64);
                    for (i, level) in out.levels.iter().enumerate() {
                        let expected = (seed as i128 * (cursor as i128 + i as i128) * 3)
                            % LEVEL_MODULUS as i128;
                        assert_eq!(*level as i128, expected);
                    }
                }
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let pairs = [("seed", "42"), ("cursor", "17"), ("batch", "7")];
        assert_eq!(run(&pairs), run(&pairs));
    }
}
