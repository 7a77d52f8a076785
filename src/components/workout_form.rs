//! Workout Form Component
//!
//! Input form for a new or edited workout. Shown after a map double-click
//! or an edit click; cadence and elevation rows swap with the type.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::WorkoutType;

#[component]
pub fn WorkoutEntryForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let reveal_delay = ctx.tracker.with_untracked(|t| t.config().form_reveal_delay_ms);

    // display:none right after submit so the slide-out does not animate
    let (instant_hidden, set_instant_hidden) = signal(false);
    let distance_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if ctx.focus_trigger.get() == 0 {
            return;
        }
        if let Some(input) = distance_ref.get() {
            let _ = input.focus();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.submit() {
            set_instant_hidden.set(true);
            Timeout::new(reveal_delay, move || set_instant_hidden.set(false)).forget();
        }
    };

    let form_class = move || {
        if ctx.tracker.with(|t| t.is_form_open()) { "form" } else { "form hidden" }
    };
    let row_class = |shown: bool| if shown { "form__row" } else { "form__row form__row--hidden" };

    view! {
        <form
            class=form_class
            style:display=move || if instant_hidden.get() { "none" } else { "grid" }
            on:submit=on_submit
        >
            <div class="form__row">
                <label class="form__label">"Type"</label>
                <select
                    class="form__input form__input--type"
                    prop:value=move || ctx.form.with(|f| f.workout_type.as_str())
                    on:change=move |ev| {
                        let workout_type = WorkoutType::from_str(&event_target_value(&ev));
                        ctx.form.update(|f| f.set_type(workout_type));
                    }
                >
                    <option value="running">"Running"</option>
                    <option value="cycling">"Cycling"</option>
                </select>
            </div>
            <div class="form__row">
                <label class="form__label">"Distance"</label>
                <input
                    class="form__input form__input--distance"
                    placeholder="km"
                    node_ref=distance_ref
                    prop:value=move || ctx.form.with(|f| f.distance.clone())
                    on:input=move |ev| ctx.form.update(|f| f.distance = event_target_value(&ev))
                />
            </div>
            <div class="form__row">
                <label class="form__label">"Duration"</label>
                <input
                    class="form__input form__input--duration"
                    placeholder="min"
                    prop:value=move || ctx.form.with(|f| f.duration.clone())
                    on:input=move |ev| ctx.form.update(|f| f.duration = event_target_value(&ev))
                />
            </div>
            <div class=move || row_class(ctx.form.with(|f| f.shows_cadence()))>
                <label class="form__label">"Cadence"</label>
                <input
                    class="form__input form__input--cadence"
                    placeholder="step/min"
                    prop:value=move || ctx.form.with(|f| f.cadence.clone())
                    on:input=move |ev| ctx.form.update(|f| f.cadence = event_target_value(&ev))
                />
            </div>
            <div class=move || row_class(ctx.form.with(|f| f.shows_elevation()))>
                <label class="form__label">"Elev Gain"</label>
                <input
                    class="form__input form__input--elevation"
                    placeholder="meters"
                    prop:value=move || ctx.form.with(|f| f.elevation.clone())
                    on:input=move |ev| ctx.form.update(|f| f.elevation = event_target_value(&ev))
                />
            </div>
            <button class="form__btn" type="submit">"OK"</button>
        </form>
    }
}
