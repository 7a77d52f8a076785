//! Workout Map App
//!
//! Sidebar (form, toolbar, list) next to the map. The map is mounted once
//! the device position is known.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::{ListToolbar, WorkoutEntryForm, WorkoutList};
use crate::config::TrackerConfig;
use crate::context::AppContext;
use crate::error::LocateError;
use crate::form::WorkoutForm;
use crate::geolocation;
use crate::map::LeafletMap;
use crate::storage::BrowserStorage;
use crate::tracker::Tracker;

#[component]
pub fn App(config: TrackerConfig) -> impl IntoView {
    let map_element_id = config.map_element_id.clone();

    // State
    let tracker = RwSignal::new_local(Tracker::new(config.clone(), BrowserStorage::open()));
    let form = RwSignal::new(WorkoutForm::default());
    let focus_trigger = signal(0u32);

    let ctx = AppContext::new(tracker, form, focus_trigger);
    provide_context(ctx);

    // Locate the device, then mount the map. Reads no signals, so runs once.
    Effect::new(move |_| {
        let config = config.clone();
        spawn_local(async move {
            match geolocation::current_position().await {
                Ok(center) => {
                    let map = LeafletMap::mount(&config, center);
                    map.on_double_click(move |coords| ctx.begin_new(coords));
                    tracker.update(|t| t.attach_map(map));
                }
                Err(LocateError::Unsupported) => {
                    log::warn!("Geolocation unsupported, map not loaded");
                }
                Err(e) => {
                    log::warn!("Geolocation failed: {}", e);
                    browser::alert(&e.to_string());
                }
            }
        });
    });

    view! {
        <div class="sidebar">
            <h1 class="logo">"Workout Map"</h1>

            <WorkoutEntryForm />

            <ListToolbar />

            <WorkoutList />
        </div>
        <div id=map_element_id></div>
    }
}
