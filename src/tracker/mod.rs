//! Workout Tracker
//!
//! Application controller. Owns the workout list, one map marker per
//! workout, the rendered list and the form/edit state, and keeps storage in
//! sync after every mutation.

mod list;

pub use list::ListEntry;
use list::RenderedList;

use chrono::Utc;

use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::form::WorkoutForm;
use crate::map::{MapSurface, MarkerPopup};
use crate::models::{Coords, Workout};
use crate::storage::{clear_workouts, load_workouts, save_workouts, KeyValueStore};

/// Field the list can be sorted by (descending)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Distance,
    Duration,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Distance => "distance",
            SortField::Duration => "duration",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "distance" => Some(SortField::Distance),
            "duration" => Some(SortField::Duration),
            _ => None,
        }
    }

    fn value(&self, workout: &Workout) -> f64 {
        match self {
            SortField::Distance => workout.distance,
            SortField::Duration => workout.duration,
        }
    }
}

pub struct Tracker<S, M: MapSurface> {
    config: TrackerConfig,
    store: S,
    map: Option<M>,
    workouts: Vec<Workout>,
    markers: Vec<(String, M::Marker)>,
    list: RenderedList,
    /// Workout loaded into the form for editing
    edit_target: Option<String>,
    /// Map position picked for a new workout
    pending_location: Option<Coords>,
    form_open: bool,
}

impl<S: KeyValueStore, M: MapSurface> Tracker<S, M> {
    /// Restore stored workouts and render them into the list.
    /// Markers are placed once a map is attached.
    pub fn new(config: TrackerConfig, store: S) -> Self {
        let workouts = load_workouts(&store, &config.storage_key);
        let mut list = RenderedList::default();
        for workout in &workouts {
            list.insert_top(ListEntry::render(workout));
        }
        log::info!("Restored {} workouts", workouts.len());
        Self {
            config,
            store,
            map: None,
            workouts,
            markers: Vec::new(),
            list,
            edit_target: None,
            pending_location: None,
            form_open: false,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn entries(&self) -> &[ListEntry] {
        self.list.entries()
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn edit_target(&self) -> Option<&str> {
        self.edit_target.as_deref()
    }

    /// Sort options are only usable when there is something to sort
    pub fn sort_enabled(&self) -> bool {
        !self.workouts.is_empty()
    }

    /// Attach the map and place markers for every workout
    pub fn attach_map(&mut self, map: M) {
        self.map = Some(map);
        for i in 0..self.workouts.len() {
            let id = &self.workouts[i].id;
            if !self.markers.iter().any(|(mid, _)| mid == id) {
                self.render_marker(i);
            }
        }
    }

    /// Open the form for a new workout at `coords`
    pub fn begin_new(&mut self, coords: Coords) {
        self.pending_location = Some(coords);
        self.edit_target = None;
        self.form_open = true;
    }

    /// Load a workout into the form. Returns the prefilled form, or `None`
    /// when the id is unknown or the workout is already being edited (its
    /// edit control is disabled in that case).
    pub fn edit(&mut self, id: &str) -> Option<WorkoutForm> {
        let workout = self.workouts.iter().find(|w| w.id == id)?;

        if self.edit_target.as_deref() == Some(id) {
            if let Some(entry) = self.list.get_mut(id) {
                entry.edit_disabled = true;
            }
            return None;
        }

        let form = WorkoutForm::from_workout(workout);
        self.edit_target = Some(id.to_string());
        self.pending_location = None;
        self.form_open = true;
        log::debug!("Editing workout {}", id);
        Some(form)
    }

    /// Validate the form and add the workout, replacing the edit target if
    /// one is active. Nothing changes on error. Returns the new workout id.
    pub fn submit(&mut self, form: &WorkoutForm) -> Result<String, TrackerError> {
        let input = form.validate()?;

        let (coords, replaced) = match (self.pending_location, self.edit_target.as_deref()) {
            (Some(coords), _) => (coords, None),
            (None, Some(edit_id)) => {
                let old = self
                    .workouts
                    .iter()
                    .find(|w| w.id == edit_id)
                    .ok_or(TrackerError::NoLocation)?;
                (old.coords, Some(old.id.clone()))
            }
            (None, None) => return Err(TrackerError::NoLocation),
        };

        let workout = Workout::build(
            input.workout_type,
            self.next_id(),
            Utc::now(),
            coords,
            input.distance,
            input.duration,
            input.specific,
        );
        let new_id = workout.id.clone();

        if let Some(old_id) = replaced {
            self.workouts.retain(|w| w.id != old_id);
            self.list.remove(&old_id);
            self.clear_marker(&old_id);
            self.edit_target = None;
            log::info!("Replaced workout {} with {}", old_id, new_id);
        } else {
            log::info!("Added {} workout {}", input.workout_type.as_str(), new_id);
        }

        self.list.insert_top(ListEntry::render(&workout));
        self.workouts.push(workout);
        self.render_marker(self.workouts.len() - 1);

        self.pending_location = None;
        self.form_open = false;
        self.persist();
        Ok(new_id)
    }

    /// Remove one workout. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(index) = self.workouts.iter().position(|w| w.id == id) else {
            log::debug!("Delete ignored, no workout {}", id);
            return false;
        };
        self.workouts.remove(index);
        self.list.remove(id);
        self.clear_marker(id);
        if self.edit_target.as_deref() == Some(id) {
            self.edit_target = None;
        }
        self.persist();
        log::info!("Deleted workout {}", id);
        true
    }

    /// Drop the stored list. Returns `true` when the page should reload;
    /// with no workouts this does nothing.
    pub fn delete_all(&mut self) -> Result<bool, TrackerError> {
        if self.workouts.is_empty() {
            return Ok(false);
        }
        clear_workouts(&self.store, &self.config.storage_key)?;
        log::info!("Cleared {} workouts", self.workouts.len());
        Ok(true)
    }

    /// Sort workouts descending by `field` and reorder the rendered list to
    /// match. Storage picks up the new order on the next write.
    pub fn sort(&mut self, field: SortField) -> bool {
        if self.list.is_empty() {
            return false;
        }
        self.workouts.sort_by(|a, b| {
            field
                .value(b)
                .partial_cmp(&field.value(a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self.list.reorder(self.workouts.iter().map(|w| w.id.as_str()));
        log::debug!("Sorted by {}", field.as_str());
        true
    }

    /// Center the map on a workout. Returns its position.
    pub fn focus(&mut self, id: &str) -> Option<Coords> {
        let workout = self.workouts.iter_mut().find(|w| w.id == id)?;
        workout.click();
        let coords = workout.coords;
        if let Some(map) = &self.map {
            map.set_view(coords, self.config.map_zoom, self.config.pan_duration_secs);
        }
        Some(coords)
    }

    fn render_marker(&mut self, index: usize) {
        let Some(map) = &self.map else {
            return;
        };
        let workout = &self.workouts[index];
        let popup = MarkerPopup::for_workout(workout, &self.config);
        let marker = map.add_marker(workout.coords, &popup);
        self.markers.push((workout.id.clone(), marker));
    }

    fn clear_marker(&mut self, id: &str) {
        let map = self.map.as_ref();
        self.markers.retain(|(marker_id, marker)| {
            if marker_id != id {
                return true;
            }
            if let Some(map) = map {
                map.remove_marker(marker);
            }
            false
        });
    }

    fn persist(&self) {
        if let Err(e) = save_workouts(&self.store, &self.config.storage_key, &self.workouts) {
            log::error!("Failed to persist workouts: {}", e);
        }
    }

    /// Last 10 digits of the current time in ms, bumped until unused
    fn next_id(&self) -> String {
        let mut n = Utc::now().timestamp_millis().rem_euclid(10_000_000_000);
        loop {
            let id = format!("{:010}", n);
            if !self.workouts.iter().any(|w| w.id == id) {
                return id;
            }
            n = (n + 1) % 10_000_000_000;
        }
    }
}
