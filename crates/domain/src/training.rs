use derive_more::{Display, Into};
use strum::{EnumIter, IntoEnumIterator};

use crate::{TrainingRecord, WorkoutError, error::ArgumentError};

/// Length of one running or walking step in meters.
pub const STEP_LENGTH_M: f64 = 0.65;
/// Length of one swimming stroke in meters.
pub const SWIM_STROKE_LENGTH_M: f64 = 1.38;
pub const METERS_PER_KM: f64 = 1000.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

const RUN_CALORIE_FACTOR: f64 = 18.0;
const RUN_CALORIE_OFFSET: f64 = 20.0;
const WALK_WEIGHT_FACTOR: f64 = 0.035;
const WALK_SPEED_HEIGHT_FACTOR: f64 = 0.029;
const SWIM_SPEED_OFFSET: f64 = 1.1;
const SWIM_WEIGHT_FACTOR: f64 = 2.0;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, WorkoutError> {
        match code {
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::SportsWalking),
            "SWM" => Ok(WorkoutKind::Swimming),
            _ => Err(WorkoutError::UnknownWorkoutCode(code.to_string())),
        }
    }

    /// Number of positional values a package of this kind carries.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    #[must_use]
    pub fn codes() -> String {
        WorkoutKind::iter()
            .map(WorkoutKind::code)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Training duration in hours.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Hours(f64);

impl Hours {
    pub fn new(value: f64) -> Result<Self, WorkoutError> {
        if !value.is_finite() {
            return Err(WorkoutError::NotFinite { field: "duration" });
        }

        if value <= 0.0 {
            return Err(WorkoutError::DivisionByZero { field: "duration" });
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn minutes(self) -> f64 {
        self.0 * MINUTES_PER_HOUR
    }
}

/// Body weight in kilograms.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Kilograms(f64);

impl Kilograms {
    pub fn new(value: f64) -> Result<Self, ArgumentError> {
        if !value.is_finite() {
            return Err(ArgumentError::NotFinite { field: "weight" });
        }

        if value <= 0.0 {
            return Err(ArgumentError::NonPositive { field: "weight" });
        }

        Ok(Self(value))
    }
}

/// Body height in centimeters.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Centimeters(f64);

impl Centimeters {
    pub fn new(value: f64) -> Result<Self, WorkoutError> {
        if !value.is_finite() {
            return Err(WorkoutError::NotFinite { field: "height" });
        }

        if value <= 0.0 {
            return Err(WorkoutError::DivisionByZero { field: "height" });
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn meters(self) -> f64 {
        self.0 / 100.0
    }
}

/// Length of a swimming pool in meters.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Meters(f64);

impl Meters {
    pub fn new(value: f64) -> Result<Self, ArgumentError> {
        if !value.is_finite() {
            return Err(ArgumentError::NotFinite { field: "pool length" });
        }

        if value < 0.0 {
            return Err(ArgumentError::Negative { field: "pool length" });
        }

        Ok(Self(value))
    }
}

/// Readings shared by all kinds of workouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    action_count: u32,
    duration: Hours,
    weight: Kilograms,
}

impl Sample {
    #[must_use]
    pub fn new(action_count: u32, duration: Hours, weight: Kilograms) -> Self {
        Self {
            action_count,
            duration,
            weight,
        }
    }

    #[must_use]
    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    #[must_use]
    pub fn duration(&self) -> Hours {
        self.duration
    }

    #[must_use]
    pub fn weight(&self) -> Kilograms {
        self.weight
    }
}

/// Floor division computed from the remainder, so `1 // 0.1` yields 9 rather than the
/// 10 a rounded quotient would give.
fn floor_div(dividend: f64, divisor: f64) -> f64 {
    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;

    if remainder != 0.0 && (divisor < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }

    if quotient == 0.0 {
        return 0.0_f64.copysign(dividend / divisor);
    }

    let floor = quotient.floor();
    if quotient - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    Running(Sample),
    SportsWalking {
        sample: Sample,
        height: Centimeters,
    },
    Swimming {
        sample: Sample,
        pool_length: Meters,
        pool_lengths_count: u32,
    },
}

impl Training {
    #[must_use]
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Training::Running(_) => WorkoutKind::Running,
            Training::SportsWalking { .. } => WorkoutKind::SportsWalking,
            Training::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    #[must_use]
    pub fn sample(&self) -> &Sample {
        match self {
            Training::Running(sample)
            | Training::SportsWalking { sample, .. }
            | Training::Swimming { sample, .. } => sample,
        }
    }

    #[must_use]
    pub fn step_length_m(&self) -> f64 {
        match self {
            Training::Running(_) | Training::SportsWalking { .. } => STEP_LENGTH_M,
            Training::Swimming { .. } => SWIM_STROKE_LENGTH_M,
        }
    }

    #[must_use]
    pub fn distance_km(&self) -> f64 {
        f64::from(self.sample().action_count()) * self.step_length_m() / METERS_PER_KM
    }

    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        let duration = f64::from(self.sample().duration());
        match self {
            Training::Running(_) | Training::SportsWalking { .. } => self.distance_km() / duration,
            Training::Swimming {
                pool_length,
                pool_lengths_count,
                ..
            } => {
                f64::from(*pool_length) * f64::from(*pool_lengths_count) / METERS_PER_KM / duration
            }
        }
    }

    #[must_use]
    pub fn spent_calories(&self) -> f64 {
        let sample = self.sample();
        let weight = f64::from(sample.weight());
        let speed = self.mean_speed_kmh();
        match self {
            Training::Running(_) => {
                (RUN_CALORIE_FACTOR * speed - RUN_CALORIE_OFFSET) * weight / METERS_PER_KM
                    * sample.duration().minutes()
            }
            Training::SportsWalking { height, .. } => {
                let speed_per_height = floor_div(speed * speed, height.meters());
                (WALK_WEIGHT_FACTOR * weight
                    + speed_per_height * WALK_SPEED_HEIGHT_FACTOR * weight)
                    * sample.duration().minutes()
            }
            Training::Swimming { .. } => (speed + SWIM_SPEED_OFFSET) * SWIM_WEIGHT_FACTOR * weight,
        }
    }

    #[must_use]
    pub fn record(&self) -> TrainingRecord {
        TrainingRecord {
            kind: self.kind(),
            duration_hours: self.sample().duration().into(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}
