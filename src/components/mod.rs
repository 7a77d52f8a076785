//! UI Components
//!
//! Leptos components for the sidebar.

mod workout_form;
mod workout_item;
mod workout_list;
mod list_toolbar;

pub use workout_form::WorkoutEntryForm;
pub use workout_item::WorkoutItem;
pub use workout_list::WorkoutList;
pub use list_toolbar::ListToolbar;
