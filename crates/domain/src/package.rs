use log::debug;

use crate::{
    Centimeters, Hours, Kilograms, Meters, Sample, Training, WorkoutError, WorkoutKind,
    error::ArgumentError,
};

/// Readings received from a sensor block: a workout code and its positional values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Package<'a> {
    pub code: &'a str,
    pub data: &'a [f64],
}

impl Package<'_> {
    pub fn read(&self) -> Result<Training, WorkoutError> {
        read_package(self.code, self.data)
    }
}

pub const SAMPLE_PACKAGES: [Package<'static>; 3] = [
    Package {
        code: "SWM",
        data: &[720.0, 1.0, 80.0, 25.0, 40.0],
    },
    Package {
        code: "RUN",
        data: &[15000.0, 1.0, 75.0],
    },
    Package {
        code: "WLK",
        data: &[9000.0, 1.0, 75.0, 180.0],
    },
];

/// Build the training selected by `code` from positional sensor values.
///
/// The values are expected in the following order:
///
///  - `RUN`: action count, duration (h), weight (kg)
///  - `WLK`: action count, duration (h), weight (kg), height (cm)
///  - `SWM`: action count, duration (h), weight (kg), pool length (m), pool lengths
///
pub fn read_package(code: &str, data: &[f64]) -> Result<Training, WorkoutError> {
    let result = WorkoutKind::from_code(code).and_then(|kind| build(kind, data));
    match result {
        Ok(ref training) => debug!("read {code} package: {training:?}"),
        Err(ref err) => debug!("failed to read {code} package: {err}"),
    }
    result
}

fn build(kind: WorkoutKind, data: &[f64]) -> Result<Training, WorkoutError> {
    let code = kind.code();
    let invalid = |reason| WorkoutError::invalid(code, reason);

    if data.len() != kind.arity() {
        return Err(invalid(ArgumentError::Count {
            expected: kind.arity(),
            given: data.len(),
        }));
    }

    if let Some((position, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(invalid(ArgumentError::OutOfRange {
            position: position + 1,
            value,
        }));
    }

    let sample = Sample::new(
        count(data, 0).map_err(invalid)?,
        Hours::new(data[1])?,
        Kilograms::new(data[2]).map_err(invalid)?,
    );

    Ok(match kind {
        WorkoutKind::Running => Training::Running(sample),
        WorkoutKind::SportsWalking => Training::SportsWalking {
            sample,
            height: Centimeters::new(data[3])?,
        },
        WorkoutKind::Swimming => Training::Swimming {
            sample,
            pool_length: Meters::new(data[3]).map_err(invalid)?,
            pool_lengths_count: count(data, 4).map_err(invalid)?,
        },
    })
}

fn count(data: &[f64], index: usize) -> Result<u32, ArgumentError> {
    let value = data[index];
    let position = index + 1;

    if value.fract() != 0.0 {
        return Err(ArgumentError::NotAnInteger { position, value });
    }

    if !(0.0..=f64::from(u32::MAX)).contains(&value) {
        return Err(ArgumentError::OutOfRange { position, value });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(value as u32)
}
