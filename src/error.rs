use thiserror::Error;

/// Errors produced when building, combining or parsing durations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("Arguments hours ({hours}) and minutes ({minutes}) must have the same sign")]
    InvalidArgument { hours: i64, minutes: i64 },

    #[error("The given object is not of type Duration (found {found})")]
    TypeMismatch { found: &'static str },

    #[error("Division of a duration by zero")]
    DivideByZero,

    #[error("Invalid duration string '{0}', expected [-]H:MM")]
    Format(String),

    #[error("Duration out of range")]
    OutOfRange,
}

pub type Result<T> = std::result::Result<T, DurationError>;
