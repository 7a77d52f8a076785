//! Workout List Component
//!
//! Renders the tracker's list entries, top first.

use leptos::prelude::*;

use crate::components::WorkoutItem;
use crate::context::AppContext;

#[component]
pub fn WorkoutList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <ul class="workout-elements">
            <For
                each=move || ctx.tracker.with(|t| t.entries().to_vec())
                // edit_disabled is part of the key so a disabled control re-renders
                key=|entry| (entry.id.clone(), entry.edit_disabled)
                children=move |entry| view! { <WorkoutItem entry=entry /> }
            />
        </ul>
    }
}
