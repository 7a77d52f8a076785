//! Workout Item Component
//!
//! One list row. Clicking the row re-centers the map; the edit and delete
//! controls carry their own handlers and stop propagation.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::tracker::ListEntry;

#[component]
pub fn WorkoutItem(entry: ListEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = StoredValue::new(entry.id.clone());
    let workout_type = entry.workout_type;
    let item_class = move || {
        let mut c = format!("workout workout--{}", workout_type.as_str());
        if ctx.tracker.with(|t| t.edit_target() == Some(id.get_value().as_str())) {
            c.push_str(" workout--editing");
        }
        c
    };

    view! {
        <li
            class=item_class
            data-id=entry.id.clone()
            on:click=move |_| ctx.focus(&id.get_value())
        >
            <h2 class="workout__title">{entry.title.clone()}</h2>

            <button
                class="workout-edit--button"
                disabled=entry.edit_disabled
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.edit(&id.get_value());
                }
            >
                "✎"
            </button>
            <button
                class="workout-delete--button"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.delete(&id.get_value());
                }
            >
                "×"
            </button>

            <div class="workout__details">
                <span class="workout__icon">{workout_type.icon()}</span>
                <span class="workout__value">{entry.distance.to_string()}</span>
                <span class="workout__unit">"km"</span>
            </div>
            <div class="workout__details">
                <span class="workout__icon">"⏱"</span>
                <span class="workout__value">{entry.duration.to_string()}</span>
                <span class="workout__unit">"min"</span>
            </div>
            <div class="workout__details">
                <span class="workout__icon">"⚡️"</span>
                <span class="workout__value">{entry.metric_text()}</span>
                <span class="workout__unit">{entry.metric_unit()}</span>
            </div>
            <div class="workout__details">
                <span class="workout__icon">{entry.specific_icon()}</span>
                <span class="workout__value">{entry.specific.to_string()}</span>
                <span class="workout__unit">{entry.specific_unit()}</span>
            </div>
        </li>
    }
}
