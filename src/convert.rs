//! Conversions between [`Duration`] and other representations.
//!
//! Serde goes through the canonical string, so a duration reads and writes as
//! `"-01:30"` in JSON or TOML.

use chrono::TimeDelta;

use crate::duration::Duration;
use crate::error::{DurationError, Result};

impl TryFrom<String> for Duration {
    type Error = DurationError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<&str> for Duration {
    type Error = DurationError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl From<Duration> for String {
    fn from(duration: Duration) -> Self {
        duration.to_string()
    }
}

/// Fails when the duration exceeds the millisecond range of `TimeDelta`.
impl TryFrom<Duration> for TimeDelta {
    type Error = DurationError;

    fn try_from(duration: Duration) -> Result<Self> {
        TimeDelta::try_minutes(duration.to_minutes()).ok_or(DurationError::OutOfRange)
    }
}

/// Whole minutes only, the sub-minute remainder is truncated toward zero.
impl TryFrom<TimeDelta> for Duration {
    type Error = DurationError;

    fn try_from(delta: TimeDelta) -> Result<Self> {
        Duration::from_minutes(delta.num_minutes())
    }
}
