//! Application Context
//!
//! Shared state provided via Leptos Context API. Every user intent (edit,
//! delete, re-center, sort, ...) goes through a method here, which forwards
//! it to the tracker and handles the browser side effects.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::browser;
use crate::form::WorkoutForm;
use crate::map::LeafletMap;
use crate::models::Coords;
use crate::storage::BrowserStorage;
use crate::tracker::{SortField, Tracker};

pub type AppTracker = Tracker<BrowserStorage, LeafletMap>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Controller state (holds JS handles, so it lives in local storage)
    pub tracker: RwSignal<AppTracker, LocalStorage>,
    /// Draft shown in the input form
    pub form: RwSignal<WorkoutForm>,
    /// Bumped whenever the form should grab focus - read
    pub focus_trigger: ReadSignal<u32>,
    /// Bumped whenever the form should grab focus - write
    set_focus_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        tracker: RwSignal<AppTracker, LocalStorage>,
        form: RwSignal<WorkoutForm>,
        focus_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            tracker,
            form,
            focus_trigger: focus_trigger.0,
            set_focus_trigger: focus_trigger.1,
        }
    }

    fn request_focus(&self) {
        self.set_focus_trigger.update(|v| *v += 1);
    }

    /// Map double-click: open the form for a new workout
    pub fn begin_new(&self, coords: Coords) {
        self.tracker.update(|t| t.begin_new(coords));
        self.request_focus();
    }

    /// Load a workout into the form
    pub fn edit(&self, id: &str) {
        if let Some(form) = self.tracker.try_update(|t| t.edit(id)).flatten() {
            self.form.set(form);
            self.request_focus();
        }
    }

    /// Submit the draft. Returns `true` when a workout was saved.
    pub fn submit(&self) -> bool {
        let draft = self.form.get_untracked();
        match self.tracker.try_update(|t| t.submit(&draft)) {
            Some(Ok(_)) => {
                self.form.update(|f| f.clear_values());
                true
            }
            Some(Err(e)) => {
                browser::alert(&e.to_string());
                false
            }
            None => false,
        }
    }

    pub fn delete(&self, id: &str) {
        self.tracker.update(|t| {
            t.delete(id);
        });
    }

    /// Clear storage and reload the page
    pub fn delete_all(&self) {
        match self.tracker.try_update(|t| t.delete_all()) {
            Some(Ok(true)) => browser::reload_page(),
            Some(Err(e)) => browser::alert(&e.to_string()),
            _ => {}
        }
    }

    pub fn sort(&self, field: SortField) {
        self.tracker.update(|t| {
            t.sort(field);
        });
    }

    /// List item click: pan the map to the workout
    pub fn focus(&self, id: &str) {
        self.tracker.update(|t| {
            t.focus(id);
        });
    }
}
