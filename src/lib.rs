pub mod convert;
pub mod duration;
pub mod duration_string;
pub mod error;

pub use duration::{Duration, MINS_IN_HOUR, Sign};
pub use duration_string::{duration_from_str, duration_to_str, is_duration_str};
pub use error::{DurationError, Result};
