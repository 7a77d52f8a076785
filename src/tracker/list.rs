//! Rendered List
//!
//! Snapshot of what the workout list currently shows. Entries are built from
//! a record once, when it is rendered; sorting reorders the existing entries
//! instead of rebuilding them, so per-entry UI state (a disabled edit
//! control) survives.

use crate::models::{Workout, WorkoutType};

/// One rendered list item
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: String,
    pub workout_type: WorkoutType,
    pub title: String,
    pub distance: f64,
    pub duration: f64,
    /// Pace or speed
    pub metric: f64,
    /// Cadence or elevation gain
    pub specific: f64,
    pub edit_disabled: bool,
}

impl ListEntry {
    pub fn render(workout: &Workout) -> Self {
        Self {
            id: workout.id.clone(),
            workout_type: workout.workout_type(),
            title: workout.description.clone(),
            distance: workout.distance,
            duration: workout.duration,
            metric: workout.metric(),
            specific: workout.specific_value(),
            edit_disabled: false,
        }
    }

    pub fn metric_text(&self) -> String {
        format!("{:.1}", self.metric)
    }

    pub fn metric_unit(&self) -> &'static str {
        match self.workout_type {
            WorkoutType::Running => "min/km",
            WorkoutType::Cycling => "km/h",
        }
    }

    pub fn specific_icon(&self) -> &'static str {
        match self.workout_type {
            WorkoutType::Running => "🦶🏼",
            WorkoutType::Cycling => "⛰",
        }
    }

    pub fn specific_unit(&self) -> &'static str {
        match self.workout_type {
            WorkoutType::Running => "spm",
            WorkoutType::Cycling => "m",
        }
    }
}

/// Rendered entries, top of the list first
#[derive(Debug, Clone, Default)]
pub struct RenderedList {
    entries: Vec<ListEntry>,
}

impl RenderedList {
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert_top(&mut self, entry: ListEntry) {
        self.entries.insert(0, entry);
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ListEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Rebuild the list in `order` from copies of the current entries.
    /// Ids with no rendered entry are skipped.
    pub fn reorder<'a>(&mut self, order: impl IntoIterator<Item = &'a str>) {
        let current = std::mem::take(&mut self.entries);
        self.entries = order
            .into_iter()
            .filter_map(|id| current.iter().find(|e| e.id == id).cloned())
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coords;
    use chrono::{TimeZone, Utc};

    fn entry(id: &str) -> ListEntry {
        let date = Utc.with_ymd_and_hms(2024, 4, 14, 12, 0, 0).unwrap();
        ListEntry::render(&Workout::running(id.into(), date, Coords(0.0, 0.0), 5.0, 32.0, 170.0))
    }

    #[test]
    fn test_insert_top_and_remove() {
        let mut list = RenderedList::default();
        list.insert_top(entry("a"));
        list.insert_top(entry("b"));
        assert_eq!(list.entries()[0].id, "b");
        assert!(list.remove("a"));
        assert!(!list.remove("a"));
        assert_eq!(list.entries().len(), 1);
    }

    #[test]
    fn test_reorder_keeps_entry_state() {
        let mut list = RenderedList::default();
        list.insert_top(entry("a"));
        list.insert_top(entry("b"));
        list.get_mut("a").unwrap().edit_disabled = true;

        list.reorder(["a", "missing", "b"]);
        let ids: Vec<_> = list.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert!(list.entries()[0].edit_disabled);
    }

    #[test]
    fn test_running_entry_text() {
        let e = entry("a");
        assert_eq!(e.metric_text(), "6.4");
        assert_eq!(e.metric_unit(), "min/km");
        assert_eq!(e.specific_unit(), "spm");
    }
}
