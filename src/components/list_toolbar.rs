//! List Toolbar Component
//!
//! Sort selector and delete-all control above the workout list.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::tracker::SortField;

const SORT_FIELDS: &[(SortField, &str)] = &[
    (SortField::Distance, "Distance"),
    (SortField::Duration, "Duration"),
];

#[component]
pub fn ListToolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let sort_disabled = move || !ctx.tracker.with(|t| t.sort_enabled());

    view! {
        <div class="workout__settings">
            <select
                class="workout__setting-sort"
                on:change=move |ev| {
                    if let Some(field) = SortField::from_str(&event_target_value(&ev)) {
                        ctx.sort(field);
                    }
                }
            >
                <option value="" selected=true disabled=true>"Sort by"</option>
                {SORT_FIELDS.iter().map(|(field, label)| view! {
                    <option value=field.as_str() disabled=sort_disabled>{*label}</option>
                }).collect_view()}
            </select>
            <button class="delete__all" on:click=move |_| ctx.delete_all()>
                "Delete all"
            </button>
        </div>
    }
}
