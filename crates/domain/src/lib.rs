#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod info;
pub mod package;
pub mod training;

pub use error::{ArgumentError, WorkoutError};
pub use info::{ParseMessageError, ParsedMessage, TrainingRecord};
pub use package::{Package, SAMPLE_PACKAGES, read_package};
pub use training::{Centimeters, Hours, Kilograms, Meters, Sample, Training, WorkoutKind};
