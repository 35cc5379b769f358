//! Confirmation reference codes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const PREFIX: &str = "ECC";
const DIGITS: u32 = 6;

/// Display-only registration reference, e.g. `ECC123456`
///
/// Derived from the last six digits of the confirmation time in Unix
/// milliseconds, so codes repeat every 1000 seconds. Nothing downstream
/// consumes them and collisions are not checked.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceCode(String);

impl ReferenceCode {
    /// Derives the code for a confirmation at `at`
    #[must_use]
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        let modulus = 10_i64.pow(DIGITS);
        let tail = at.timestamp_millis().rem_euclid(modulus);
        Self(format!("{PREFIX}{tail:06}"))
    }

    /// The code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap_or_default()
    }

    #[test]
    fn test_keeps_last_six_digits() {
        let code = ReferenceCode::from_timestamp(at(1_700_000_123_456));
        assert_eq!(code.as_str(), "ECC123456");
    }

    #[test]
    fn test_pads_short_tails() {
        let code = ReferenceCode::from_timestamp(at(1_700_000_000_042));
        assert_eq!(code.to_string(), "ECC000042");
    }

    #[test]
    fn test_repeats_every_thousand_seconds() {
        let first = ReferenceCode::from_timestamp(at(1_700_000_999_999));
        let second = ReferenceCode::from_timestamp(at(1_700_001_999_999));
        assert_eq!(first, second);
    }
}
