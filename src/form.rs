//! Workout Form
//!
//! Draft state of the input form and its validation rules.

use crate::error::TrackerError;
use crate::models::{Workout, WorkoutType};

/// Raw form fields, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutForm {
    pub workout_type: WorkoutType,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

/// Validated numeric values ready to build a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutInput {
    pub workout_type: WorkoutType,
    pub distance: f64,
    pub duration: f64,
    /// Cadence for running, elevation gain for cycling
    pub specific: f64,
}

impl WorkoutForm {
    /// Prefill the form from an existing record
    pub fn from_workout(workout: &Workout) -> Self {
        let mut form = Self {
            workout_type: workout.workout_type(),
            distance: workout.distance.to_string(),
            duration: workout.duration.to_string(),
            ..Default::default()
        };
        match workout.workout_type() {
            WorkoutType::Running => form.cadence = workout.specific_value().to_string(),
            WorkoutType::Cycling => form.elevation = workout.specific_value().to_string(),
        }
        form
    }

    /// Switch type. Both type-specific fields are emptied.
    pub fn set_type(&mut self, workout_type: WorkoutType) {
        self.workout_type = workout_type;
        self.cadence.clear();
        self.elevation.clear();
    }

    pub fn shows_cadence(&self) -> bool {
        self.workout_type == WorkoutType::Running
    }

    pub fn shows_elevation(&self) -> bool {
        self.workout_type == WorkoutType::Cycling
    }

    /// Empty every numeric field, keeping the selected type
    pub fn clear_values(&mut self) {
        self.distance.clear();
        self.duration.clear();
        self.cadence.clear();
        self.elevation.clear();
    }

    /// Distance, duration and cadence must be finite and positive.
    /// Elevation only has to be finite.
    pub fn validate(&self) -> Result<WorkoutInput, TrackerError> {
        let distance = coerce_number(&self.distance);
        let duration = coerce_number(&self.duration);

        let specific = match self.workout_type {
            WorkoutType::Running => {
                let cadence = coerce_number(&self.cadence);
                if !all_finite(&[distance, duration, cadence]) || !all_positive(&[distance, duration, cadence]) {
                    return Err(TrackerError::InvalidInput);
                }
                cadence
            }
            WorkoutType::Cycling => {
                let elevation = coerce_number(&self.elevation);
                if !all_finite(&[distance, duration, elevation]) || !all_positive(&[distance, duration]) {
                    return Err(TrackerError::InvalidInput);
                }
                elevation
            }
        };

        Ok(WorkoutInput {
            workout_type: self.workout_type,
            distance,
            duration,
            specific,
        })
    }
}

/// Number-input coercion: blank is 0, anything unparsable is NaN.
///
/// Only decimal notation is read: hex ("0x10") comes out NaN, and
/// "inf"/"nan" parse to non-finite values. Validation rejects both, which
/// is what a number input would submit for them anyway.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(distance: &str, duration: &str, cadence: &str) -> WorkoutForm {
        WorkoutForm {
            workout_type: WorkoutType::Running,
            distance: distance.into(),
            duration: duration.into(),
            cadence: cadence.into(),
            ..Default::default()
        }
    }

    fn cycling(distance: &str, duration: &str, elevation: &str) -> WorkoutForm {
        WorkoutForm {
            workout_type: WorkoutType::Cycling,
            distance: distance.into(),
            duration: duration.into(),
            elevation: elevation.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("  "), 0.0);
        assert_eq!(coerce_number("4.5"), 4.5);
        assert!(coerce_number("abc").is_nan());
        assert!(!coerce_number("inf").is_finite());
    }

    #[test]
    fn test_non_decimal_input_is_rejected() {
        assert!(coerce_number("0x10").is_nan());
        assert!(coerce_number("nan").is_nan());
        assert!(coerce_number("inf").is_infinite());
        assert_eq!(coerce_number("1e1"), 10.0);

        assert_eq!(running("0x10", "30", "170").validate(), Err(TrackerError::InvalidInput));
        assert_eq!(running("inf", "30", "170").validate(), Err(TrackerError::InvalidInput));
        assert_eq!(cycling("20", "60", "nan").validate(), Err(TrackerError::InvalidInput));
    }

    #[test]
    fn test_valid_running() {
        let input = running("5", "30", "170").validate().unwrap();
        assert_eq!(input.distance, 5.0);
        assert_eq!(input.specific, 170.0);
    }

    #[test]
    fn test_rejects_non_positive_or_non_finite() {
        assert_eq!(running("0", "30", "170").validate(), Err(TrackerError::InvalidInput));
        assert_eq!(running("-2", "30", "170").validate(), Err(TrackerError::InvalidInput));
        assert_eq!(running("x", "30", "170").validate(), Err(TrackerError::InvalidInput));
        assert_eq!(running("5", "30", "").validate(), Err(TrackerError::InvalidInput));
        assert_eq!(cycling("5", "", "10").validate(), Err(TrackerError::InvalidInput));
    }

    #[test]
    fn test_cycling_elevation_only_needs_finite() {
        assert_eq!(cycling("20", "60", "-35").validate().unwrap().specific, -35.0);
        // blank elevation coerces to 0
        assert_eq!(cycling("20", "60", "").validate().unwrap().specific, 0.0);
        assert!(cycling("20", "60", "up").validate().is_err());
    }

    #[test]
    fn test_set_type_clears_specific_fields() {
        let mut form = running("5", "30", "170");
        form.set_type(WorkoutType::Cycling);
        assert!(form.cadence.is_empty());
        assert!(form.shows_elevation());
        assert!(!form.shows_cadence());
        assert_eq!(form.distance, "5");
    }
}
