use std::{fmt, str::FromStr};

use crate::WorkoutKind;

/// Computed results of a single training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingRecord {
    pub kind: WorkoutKind,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl TrainingRecord {
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TrainingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.kind, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories
        )
    }
}

/// Values read back from a rendered summary line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMessage {
    pub training_type: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl FromStr for ParsedMessage {
    type Err = ParseMessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_suffix('.')
            .ok_or(ParseMessageError::MissingTerminator)?;
        let mut fields = body.split("; ");

        let training_type = field(fields.next(), "Training type: ", "")?.to_string();
        let duration_hours = number(field(fields.next(), "Duration: ", " h.")?)?;
        let distance_km = number(field(fields.next(), "Distance: ", " km")?)?;
        let mean_speed_kmh = number(field(fields.next(), "Avg speed: ", " km/h")?)?;
        let calories = number(field(fields.next(), "Calories burned: ", "")?)?;

        if let Some(extra) = fields.next() {
            return Err(ParseMessageError::UnexpectedField(extra.to_string()));
        }

        Ok(ParsedMessage {
            training_type,
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories,
        })
    }
}

fn field<'a>(
    part: Option<&'a str>,
    prefix: &'static str,
    suffix: &'static str,
) -> Result<&'a str, ParseMessageError> {
    part.and_then(|p| p.strip_prefix(prefix))
        .and_then(|p| p.strip_suffix(suffix))
        .ok_or(ParseMessageError::MissingField(prefix.trim_end_matches(": ")))
}

fn number(value: &str) -> Result<f64, ParseMessageError> {
    value
        .parse::<f64>()
        .map_err(|_| ParseMessageError::InvalidNumber(value.to_string()))
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseMessageError {
    #[error("message must end with a period")]
    MissingTerminator,
    #[error("missing field \"{0}\"")]
    MissingField(&'static str),
    #[error("invalid number \"{0}\"")]
    InvalidNumber(String),
    #[error("unexpected field \"{0}\"")]
    UnexpectedField(String),
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::swimming(
        TrainingRecord {
            kind: WorkoutKind::Swimming,
            duration_hours: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories: 336.0,
        },
        "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories burned: 336.000."
    )]
    #[case::running(
        TrainingRecord {
            kind: WorkoutKind::Running,
            duration_hours: 1.0,
            distance_km: 9.75,
            mean_speed_kmh: 9.75,
            calories: 699.75,
        },
        "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750."
    )]
    #[case::sports_walking(
        TrainingRecord {
            kind: WorkoutKind::SportsWalking,
            duration_hours: 0.25,
            distance_km: 1.3,
            mean_speed_kmh: 5.2,
            calories: 39.375,
        },
        "Training type: SportsWalking; Duration: 0.250 h.; Distance: 1.300 km; Avg speed: 5.200 km/h; Calories burned: 39.375."
    )]
    fn test_training_record_message(#[case] record: TrainingRecord, #[case] expected: &str) {
        assert_eq!(record.message(), expected);
    }

    #[rstest]
    fn test_message_round_trip(
        #[values(0.1, 1.0, 2.345_678)] duration_hours: f64,
        #[values(0.0, 0.9936, 12.345_49, 42.000_4)] value: f64,
    ) {
        let record = TrainingRecord {
            kind: WorkoutKind::Running,
            duration_hours,
            distance_km: value,
            mean_speed_kmh: value / duration_hours,
            calories: value * 71.3,
        };

        let parsed = record.message().parse::<ParsedMessage>().unwrap();

        assert_eq!(parsed.training_type, "Running");
        assert_approx_eq!(parsed.duration_hours, record.duration_hours, 0.0005);
        assert_approx_eq!(parsed.distance_km, record.distance_km, 0.0005);
        assert_approx_eq!(parsed.mean_speed_kmh, record.mean_speed_kmh, 0.0005);
        assert_approx_eq!(parsed.calories, record.calories, 0.0005);
    }

    #[rstest]
    #[case::no_terminator(
        "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750",
        ParseMessageError::MissingTerminator
    )]
    #[case::missing_field(
        "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km.",
        ParseMessageError::MissingField("Avg speed")
    )]
    #[case::invalid_number(
        "Training type: Running; Duration: one h.; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750.",
        ParseMessageError::InvalidNumber("one".to_string())
    )]
    #[case::unexpected_field(
        "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750; Steps: 15000.",
        ParseMessageError::UnexpectedField("Steps: 15000".to_string())
    )]
    fn test_parse_message_error(#[case] message: &str, #[case] expected: ParseMessageError) {
        assert_eq!(message.parse::<ParsedMessage>(), Err(expected));
    }
}
