//! Signed durations made of whole hours and 0-59 minutes.
//!
//! A [`Duration`] is normalized on construction: minutes past 59 carry into
//! the hours, and the sign is kept apart from the magnitudes. Arithmetic goes
//! through the signed total of minutes and builds a fresh value.

use std::any::{Any, type_name};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::duration_string::{duration_from_str, duration_to_str};
use crate::error::{DurationError, Result};

/// The number of minutes in one hour
pub const MINS_IN_HOUR: i64 = 60;

/// Sign of a duration: -1, 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

impl Sign {
    pub fn as_i8(self) -> i8 {
        self as i8
    }

    fn as_i64(self) -> i64 {
        self as i64
    }

    fn flip(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// A duration in hours and minutes.
///
/// The total magnitude never exceeds `i64::MAX` minutes, so
/// [`Duration::to_minutes`] is always representable and negation never
/// overflows.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Duration {
    sign: Sign,
    hours: u64,
    minutes: u8, // Always 0 <= minutes < 60
}

impl Duration {
    pub const ZERO: Duration = Duration {
        sign: Sign::Zero,
        hours: 0,
        minutes: 0,
    };

    /// Build a duration from a number of hours and a number of minutes.
    ///
    /// Give two negative arguments (or one negative and one zero) for a
    /// negative duration. Minutes of 60 or more are carried into the hours.
    ///
    /// # Errors
    ///
    /// [`DurationError::InvalidArgument`] if both arguments are non-zero and
    /// their signs differ, [`DurationError::OutOfRange`] if the total number
    /// of minutes does not fit in an `i64`.
    pub fn new(hours: i64, minutes: i64) -> Result<Self> {
        if hours.signum() * minutes.signum() < 0 {
            log::debug!("rejected duration with mixed signs ({hours}, {minutes})");
            return Err(DurationError::InvalidArgument { hours, minutes });
        }

        let sign = if hours < 0 || minutes < 0 {
            Sign::Negative
        } else if hours == 0 && minutes == 0 {
            Sign::Zero
        } else {
            Sign::Positive
        };

        let total = u128::from(hours.unsigned_abs()) * MINS_IN_HOUR as u128
            + u128::from(minutes.unsigned_abs());
        let total = u64::try_from(total)
            .ok()
            .filter(|total| *total <= i64::MAX as u64)
            .ok_or(DurationError::OutOfRange)?;

        Ok(Self::from_magnitude(sign, total))
    }

    /// Build a duration from a signed number of minutes.
    ///
    /// Fails with [`DurationError::OutOfRange`] only for `i64::MIN`.
    pub fn from_minutes(minutes: i64) -> Result<Self> {
        Self::new(0, minutes)
    }

    // Callers guarantee `total <= i64::MAX` and `total == 0` iff `sign` is zero
    fn from_magnitude(sign: Sign, total: u64) -> Self {
        let per_hour = MINS_IN_HOUR as u64;
        Self {
            sign,
            hours: total / per_hour,
            minutes: (total % per_hour) as u8,
        }
    }

    // Clamps to the representable range, `i64::MIN` becomes `-i64::MAX`
    fn saturating_from_minutes(minutes: i64) -> Self {
        let sign = match minutes.signum() {
            -1 => Sign::Negative,
            0 => Sign::Zero,
            _ => Sign::Positive,
        };
        Self::from_magnitude(sign, minutes.unsigned_abs().min(i64::MAX as u64))
    }

    /// Signed number of hours, zero for a null duration.
    pub fn hours(&self) -> i64 {
        self.sign.as_i64() * self.hours as i64
    }

    /// Signed number of minutes past the hour, in `-59..=59`.
    pub fn minutes(&self) -> i64 {
        self.sign.as_i64() * i64::from(self.minutes)
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// Convert this duration to an integral number of minutes.
    pub fn to_minutes(&self) -> i64 {
        // Bounded by `i64::MAX` on construction
        let magnitude = (self.hours * MINS_IN_HOUR as u64 + u64::from(self.minutes)) as i64;
        self.sign.as_i64() * magnitude
    }

    /// Convert this duration to a real number of hours.
    pub fn to_hours(&self) -> f64 {
        let magnitude = self.hours as f64 + f64::from(self.minutes) / MINS_IN_HOUR as f64;
        f64::from(self.sign.as_i8()) * magnitude
    }

    /// The same duration with a non-negative sign.
    pub fn abs(self) -> Self {
        let sign = match self.sign {
            Sign::Zero => Sign::Zero,
            _ => Sign::Positive,
        };
        Self { sign, ..self }
    }

    pub fn checked_add(self, rhs: Duration) -> Result<Self> {
        self.to_minutes()
            .checked_add(rhs.to_minutes())
            .ok_or(DurationError::OutOfRange)
            .and_then(Self::from_minutes)
    }

    pub fn checked_sub(self, rhs: Duration) -> Result<Self> {
        self.to_minutes()
            .checked_sub(rhs.to_minutes())
            .ok_or(DurationError::OutOfRange)
            .and_then(Self::from_minutes)
    }

    /// Multiply by a real number, rounding half up to the nearest minute.
    ///
    /// Fails with [`DurationError::OutOfRange`] when the product is not
    /// finite or does not fit.
    pub fn checked_mul(self, scalar: f64) -> Result<Self> {
        let product = round_half_up(self.to_minutes() as f64 * scalar);
        Self::from_minutes(minutes_from_f64(product)?)
    }

    /// Divide by a real number, rounding half up to the nearest minute.
    ///
    /// # Errors
    ///
    /// [`DurationError::DivideByZero`] if `scalar` is zero,
    /// [`DurationError::OutOfRange`] if the quotient is not finite or does not
    /// fit.
    pub fn checked_div(self, scalar: f64) -> Result<Self> {
        if scalar == 0.0 {
            log::debug!("rejected division of {} by zero", self);
            return Err(DurationError::DivideByZero);
        }
        let quotient = round_half_up(self.to_minutes() as f64 / scalar);
        Self::from_minutes(minutes_from_f64(quotient)?)
    }

    /// Equality against a value of any type, `false` unless it is a `Duration`.
    pub fn equals_any<T: Any>(&self, other: &T) -> bool {
        (other as &dyn Any)
            .downcast_ref::<Duration>()
            .is_some_and(|other| other == self)
    }

    /// Order against a value of any type.
    ///
    /// Fails with [`DurationError::TypeMismatch`] unless `other` is a
    /// `Duration`.
    pub fn compare_any<T: Any>(&self, other: &T) -> Result<Ordering> {
        match (other as &dyn Any).downcast_ref::<Duration>() {
            Some(other) => Ok(self.cmp(other)),
            None => Err(DurationError::TypeMismatch {
                found: type_name::<T>(),
            }),
        }
    }

    pub fn lt_any<T: Any>(&self, other: &T) -> Result<bool> {
        Ok(self.compare_any(other)?.is_lt())
    }

    pub fn le_any<T: Any>(&self, other: &T) -> Result<bool> {
        Ok(self.compare_any(other)?.is_le())
    }

    pub fn gt_any<T: Any>(&self, other: &T) -> Result<bool> {
        Ok(self.compare_any(other)?.is_gt())
    }

    pub fn ge_any<T: Any>(&self, other: &T) -> Result<bool> {
        Ok(self.compare_any(other)?.is_ge())
    }
}

/// Round to the nearest integer, exact halves going toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn minutes_from_f64(value: f64) -> Result<i64> {
    // i64::MAX as f64 is 2^63, which is already out of range
    if value.is_finite() && value > -(i64::MAX as f64) && value < i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(DurationError::OutOfRange)
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Duration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_minutes().cmp(&other.to_minutes())
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Self {
            sign: self.sign.flip(),
            ..self
        }
    }
}

/// Saturates at the representable range; use [`Duration::checked_add`] to detect overflow.
impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Self::saturating_from_minutes(self.to_minutes().saturating_add(rhs.to_minutes()))
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Self::saturating_from_minutes(self.to_minutes().saturating_sub(rhs.to_minutes()))
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

/// Rounds half up to the nearest minute and saturates; a NaN scalar gives zero.
impl Mul<f64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: f64) -> Duration {
        let product = round_half_up(self.to_minutes() as f64 * rhs);
        Self::saturating_from_minutes(product as i64)
    }
}

impl Mul<Duration> for f64 {
    type Output = Duration;

    fn mul(self, rhs: Duration) -> Duration {
        rhs * self
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: i64) -> Duration {
        Self::saturating_from_minutes(self.to_minutes().saturating_mul(rhs))
    }
}

impl Mul<Duration> for i64 {
    type Output = Duration;

    fn mul(self, rhs: Duration) -> Duration {
        rhs * self
    }
}

impl Div<f64> for Duration {
    type Output = Result<Duration>;

    fn div(self, rhs: f64) -> Result<Duration> {
        self.checked_div(rhs)
    }
}

impl Div<i64> for Duration {
    type Output = Result<Duration>;

    fn div(self, rhs: i64) -> Result<Duration> {
        self.checked_div(rhs as f64)
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(iter: I) -> Duration {
        iter.copied().sum()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&duration_to_str(self.hours(), self.minutes()))
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({}, {})", self.hours(), self.minutes())
    }
}

impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self> {
        let (hours, minutes) = duration_from_str(s)?;
        Self::new(hours, minutes)
    }
}
