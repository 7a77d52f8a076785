//! Workout Models
//!
//! Workout records and their derived metrics. Records are plain data once
//! built: pace/speed and the description are computed at construction and
//! persisted as-is.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// A map position as `[lat, lng]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords(pub f64, pub f64);

/// Workout type discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    #[default]
    Running,
    Cycling,
}

impl WorkoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "cycling" => WorkoutType::Cycling,
            _ => WorkoutType::Running,
        }
    }

    /// Capitalized name used in descriptions
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃‍♂️",
            WorkoutType::Cycling => "🚴‍♀️",
        }
    }
}

/// Type-specific fields, tagged by `type` in the stored JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutKind {
    Running {
        /// steps/min
        cadence: f64,
        /// min/km
        pace: f64,
    },
    Cycling {
        /// meters, may be negative
        #[serde(rename = "elevationGain")]
        elevation_gain: f64,
        /// km/h
        speed: f64,
    },
}

/// A single workout record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub date: DateTime<Utc>,
    pub coords: Coords,
    /// km
    pub distance: f64,
    /// min
    pub duration: f64,
    #[serde(default)]
    pub clicks: u32,
    pub description: String,
    #[serde(flatten)]
    pub kind: WorkoutKind,
}

impl Workout {
    pub fn running(
        id: String,
        date: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        cadence: f64,
    ) -> Self {
        Self {
            description: describe(WorkoutType::Running, &date),
            id,
            date,
            coords,
            distance,
            duration,
            clicks: 0,
            kind: WorkoutKind::Running {
                cadence,
                pace: duration / distance,
            },
        }
    }

    pub fn cycling(
        id: String,
        date: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Self {
        Self {
            description: describe(WorkoutType::Cycling, &date),
            id,
            date,
            coords,
            distance,
            duration,
            clicks: 0,
            kind: WorkoutKind::Cycling {
                elevation_gain,
                speed: distance / (duration / 60.0),
            },
        }
    }

    /// Build a record of the given type. `specific` is the cadence for
    /// running and the elevation gain for cycling. Inputs are not validated.
    pub fn build(
        workout_type: WorkoutType,
        id: String,
        date: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        specific: f64,
    ) -> Self {
        match workout_type {
            WorkoutType::Running => Self::running(id, date, coords, distance, duration, specific),
            WorkoutType::Cycling => Self::cycling(id, date, coords, distance, duration, specific),
        }
    }

    pub fn workout_type(&self) -> WorkoutType {
        match self.kind {
            WorkoutKind::Running { .. } => WorkoutType::Running,
            WorkoutKind::Cycling { .. } => WorkoutType::Cycling,
        }
    }

    /// Pace for running, speed for cycling
    pub fn metric(&self) -> f64 {
        match self.kind {
            WorkoutKind::Running { pace, .. } => pace,
            WorkoutKind::Cycling { speed, .. } => speed,
        }
    }

    /// Cadence for running, elevation gain for cycling
    pub fn specific_value(&self) -> f64 {
        match self.kind {
            WorkoutKind::Running { cadence, .. } => cadence,
            WorkoutKind::Cycling { elevation_gain, .. } => elevation_gain,
        }
    }

    pub fn click(&mut self) {
        self.clicks += 1;
    }
}

/// "<Type> on <Month> <Day>" in local time, no year
fn describe(workout_type: WorkoutType, date: &DateTime<Utc>) -> String {
    let local = date.with_timezone(&Local);
    format!("{} on {}", workout_type.label(), local.format("%B %-d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Local noon, so the described day holds in any timezone
    fn noon(month: u32, day: u32) -> DateTime<Utc> {
        Local.with_ymd_and_hms(2024, month, day, 12, 0, 0).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_running_pace() {
        let w = Workout::running("1".into(), noon(4, 14), Coords(1.0, 2.0), 5.0, 30.0, 170.0);
        assert_eq!(w.metric(), 6.0);
        assert_eq!(w.workout_type(), WorkoutType::Running);
        assert_eq!(w.specific_value(), 170.0);
    }

    #[test]
    fn test_cycling_speed() {
        let w = Workout::cycling("2".into(), noon(4, 14), Coords(1.0, 2.0), 20.0, 60.0, -40.0);
        assert_eq!(w.metric(), 20.0);
        assert_eq!(w.specific_value(), -40.0);
    }

    #[test]
    fn test_description_uses_creation_date() {
        let w = Workout::build(WorkoutType::Cycling, "3".into(), noon(9, 3), Coords(0.0, 0.0), 10.0, 30.0, 5.0);
        assert_eq!(w.description, "Cycling on September 3");

        let r = Workout::build(WorkoutType::Running, "4".into(), noon(1, 21), Coords(0.0, 0.0), 10.0, 30.0, 5.0);
        assert_eq!(r.description, "Running on January 21");
    }

    #[test]
    fn test_stored_shape() {
        let w = Workout::cycling("5".into(), noon(4, 14), Coords(51.5, -0.1), 20.0, 60.0, 120.0);
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["type"], "cycling");
        assert_eq!(json["elevationGain"], 120.0);
        assert_eq!(json["speed"], 20.0);
        assert_eq!(json["coords"], serde_json::json!([51.5, -0.1]));
        assert!(json.get("cadence").is_none());
    }

    #[test]
    fn test_reads_browser_shaped_record() {
        let raw = r#"{
            "date": "2024-04-14T12:00:00.000Z",
            "id": "3101234567",
            "clicks": 0,
            "coords": [38.7, -9.1],
            "distance": 5,
            "duration": 30,
            "type": "running",
            "cadence": 170,
            "pace": 6,
            "description": "Running on April 14 "
        }"#;
        let w: Workout = serde_json::from_str(raw).unwrap();
        assert_eq!(w.workout_type(), WorkoutType::Running);
        assert_eq!(w.metric(), 6.0);
        assert_eq!(w.coords, Coords(38.7, -9.1));
        assert_eq!(w.description, "Running on April 14 ");
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!(WorkoutType::from_str("cycling"), WorkoutType::Cycling);
        assert_eq!(WorkoutType::from_str("running"), WorkoutType::Running);
        assert_eq!(WorkoutType::Cycling.as_str(), "cycling");
    }
}
