#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("unknown workout code \"{0}\" (expected one of {codes})", codes = crate::WorkoutKind::codes())]
    UnknownWorkoutCode(String),
    #[error("invalid arguments for {code}: {reason}")]
    InvalidArguments { code: String, reason: ArgumentError },
    #[error("division by zero: {field} must be greater than zero")]
    DivisionByZero { field: &'static str },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ArgumentError {
    #[error("expected {expected} arguments, got {given}")]
    Count { expected: usize, given: usize },
    #[error("argument {position} must be an integer ({value})")]
    NotAnInteger { position: usize, value: f64 },
    #[error("argument {position} is out of range ({value})")]
    OutOfRange { position: usize, value: f64 },
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

impl WorkoutError {
    pub(crate) fn invalid(code: &str, reason: ArgumentError) -> Self {
        WorkoutError::InvalidArguments {
            code: code.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::unknown_code(
        WorkoutError::UnknownWorkoutCode("XYZ".to_string()),
        "unknown workout code \"XYZ\" (expected one of RUN, WLK, SWM)"
    )]
    #[case::count(
        WorkoutError::invalid("RUN", ArgumentError::Count { expected: 3, given: 2 }),
        "invalid arguments for RUN: expected 3 arguments, got 2"
    )]
    #[case::not_an_integer(
        WorkoutError::invalid("SWM", ArgumentError::NotAnInteger { position: 4, value: 40.5 }),
        "invalid arguments for SWM: argument 4 must be an integer (40.5)"
    )]
    #[case::non_positive(
        WorkoutError::invalid("WLK", ArgumentError::NonPositive { field: "weight" }),
        "invalid arguments for WLK: weight must be greater than zero"
    )]
    #[case::division_by_zero(
        WorkoutError::DivisionByZero { field: "duration" },
        "division by zero: duration must be greater than zero"
    )]
    #[case::not_finite(
        WorkoutError::NotFinite { field: "height" },
        "height must be a finite number"
    )]
    #[case::negative(
        WorkoutError::invalid("SWM", ArgumentError::Negative { field: "pool length" }),
        "invalid arguments for SWM: pool length must not be negative"
    )]
    fn test_workout_error_display(#[case] error: WorkoutError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
