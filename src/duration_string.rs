//! Canonical `[-]H:MM` text form of a duration.
//!
//! The hours field holds one or more digits, the minutes field exactly two.
//! A leading `-` applies to both fields.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DurationError, Result};

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?)([0-9]+):([0-9]{2})$").expect("duration pattern is valid")
});

/// Whether `text` is exactly a duration string, with nothing before or after it.
pub fn is_duration_str(text: &str) -> bool {
    DURATION_RE.is_match(text)
}

/// Split a duration string into signed hours and minutes.
///
/// Both values carry the sign, so `"-7:19"` gives `(-7, -19)`. Minutes are
/// returned as written and may exceed 59 (`"7:67"` gives `(7, 67)`).
pub fn duration_from_str(text: &str) -> Result<(i64, i64)> {
    let Some(caps) = DURATION_RE.captures(text) else {
        log::debug!("rejected duration string {text:?}");
        return Err(DurationError::Format(text.to_string()));
    };

    // Only overflow can fail here, the pattern guarantees digits
    let hours: i64 = caps[2].parse().map_err(|_| DurationError::OutOfRange)?;
    let minutes: i64 = caps[3].parse().map_err(|_| DurationError::OutOfRange)?;

    if caps[1].is_empty() {
        Ok((hours, minutes))
    } else {
        Ok((-hours, -minutes))
    }
}

/// Render hours and minutes as `[-]HH:MM`.
///
/// Hours are padded to at least two digits, minutes to two. The `-` prefix is
/// written when either argument is negative.
pub fn duration_to_str(hours: i64, minutes: i64) -> String {
    let sign = if hours < 0 || minutes < 0 { "-" } else { "" };
    format!(
        "{sign}{:02}:{:02}",
        hours.unsigned_abs(),
        minutes.unsigned_abs()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_short_and_padded_hours() {
        for text in ["7:19", "07:19", "-7:19", "-07:19", "13:23", "100:00"] {
            assert!(is_duration_str(text), "{text} should be accepted");
        }
    }

    #[test]
    fn test_rejects_surrounding_characters() {
        for text in [
            "x7:19", "x07:19", "7:19x", "07:19x", "x-7:19", "x-07:19", "-7:19x", "-07:19x",
        ] {
            assert!(!is_duration_str(text), "{text} should be rejected");
        }
    }

    #[test]
    fn test_rejects_bad_fields() {
        for text in ["", ":", "7:1", "7:190", ":19", "7:1a", "--7:19", "+7:19", "7 :19", "7:19\n"] {
            assert!(!is_duration_str(text), "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Arabic-Indic digits
        assert!(!is_duration_str("٧:١٩"));
    }

    #[test]
    fn test_parse_negative_applies_to_both_fields() {
        assert_eq!(duration_from_str("-7:19").unwrap(), (-7, -19));
        assert_eq!(duration_from_str("-00:07").unwrap(), (0, -7));
        assert_eq!(duration_from_str("-0:00").unwrap(), (0, 0));
    }

    #[test]
    fn test_parse_keeps_unnormalized_minutes() {
        assert_eq!(duration_from_str("07:67").unwrap(), (7, 67));
    }

    #[test]
    fn test_parse_rejects_invalid() {
        let err = duration_from_str("7:19x").unwrap_err();
        assert_eq!(err, DurationError::Format("7:19x".to_string()));
    }

    #[test]
    fn test_parse_hours_overflow() {
        let err = duration_from_str("99999999999999999999:00").unwrap_err();
        assert_eq!(err, DurationError::OutOfRange);
    }

    #[test]
    fn test_format_padding() {
        assert_eq!(duration_to_str(0, 0), "00:00");
        assert_eq!(duration_to_str(7, 5), "07:05");
        assert_eq!(duration_to_str(100, 0), "100:00");
        assert_eq!(duration_to_str(-2, 0), "-02:00");
        assert_eq!(duration_to_str(0, -7), "-00:07");
    }
}
