//! Workout Persistence
//!
//! The whole workout list is stored as one JSON array under a single key.
//! Every write replaces the full list.

use crate::error::StorageError;
use crate::models::Workout;

/// String key-value store (window.localStorage in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, or nothing if the browser denies access
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("localStorage unavailable, workouts will not persist");
        }
        Self { inner }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Read the stored list. Missing or malformed data means no history.
pub fn load_workouts<S: KeyValueStore>(store: &S, key: &str) -> Vec<Workout> {
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };
    match serde_json::from_str::<Option<Vec<Workout>>>(&raw) {
        Ok(workouts) => workouts.unwrap_or_default(),
        Err(e) => {
            log::warn!("Discarding unreadable workout data: {}", e);
            Vec::new()
        }
    }
}

pub fn save_workouts<S: KeyValueStore>(store: &S, key: &str, workouts: &[Workout]) -> Result<(), StorageError> {
    let json = serde_json::to_string(workouts).map_err(|e| StorageError::Serialize(e.to_string()))?;
    store.set(key, &json)
}

pub fn clear_workouts<S: KeyValueStore>(store: &S, key: &str) -> Result<(), StorageError> {
    store.remove(key)
}

/// In-memory store for tests; counts writes
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
    writes: std::cell::Cell<usize>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coords, WorkoutKind, WorkoutType};
    use chrono::{TimeZone, Utc};

    fn sample() -> Vec<Workout> {
        let date = Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap();
        vec![
            Workout::running("1".into(), date, Coords(1.0, 2.0), 5.0, 30.0, 170.0),
            Workout::cycling("2".into(), date, Coords(3.0, 4.0), 20.0, 60.0, 300.0),
            Workout::running("3".into(), date, Coords(5.0, 6.0), 8.0, 44.0, 160.0),
        ]
    }

    #[test]
    fn test_round_trip_keeps_variants() {
        let store = MemoryStore::default();
        let original = sample();
        save_workouts(&store, "workouts", &original).unwrap();

        let loaded = load_workouts(&store, "workouts");
        assert_eq!(loaded.len(), 3);
        for (before, after) in original.iter().zip(&loaded) {
            assert_eq!(after.workout_type(), before.workout_type());
            assert_eq!(after.metric(), before.metric());
            assert_eq!(after.description, before.description);
        }
        assert!(matches!(loaded[1].kind, WorkoutKind::Cycling { elevation_gain, .. } if elevation_gain == 300.0));
        assert!(matches!(loaded[2].kind, WorkoutKind::Running { cadence, .. } if cadence == 160.0));
        assert_eq!(loaded[0].workout_type(), WorkoutType::Running);
    }

    #[test]
    fn test_missing_entry_is_empty() {
        let store = MemoryStore::default();
        assert!(load_workouts(&store, "workouts").is_empty());
    }

    #[test]
    fn test_malformed_entry_is_empty() {
        let store = MemoryStore::with_entry("workouts", "{not json");
        assert!(load_workouts(&store, "workouts").is_empty());

        let store = MemoryStore::with_entry("workouts", r#"[{"type":"swimming"}]"#);
        assert!(load_workouts(&store, "workouts").is_empty());

        let store = MemoryStore::with_entry("workouts", "null");
        assert!(load_workouts(&store, "workouts").is_empty());
    }

    #[test]
    fn test_clear_removes_entry() {
        let store = MemoryStore::default();
        save_workouts(&store, "workouts", &sample()).unwrap();
        clear_workouts(&store, "workouts").unwrap();
        assert!(store.get("workouts").is_none());
    }
}
