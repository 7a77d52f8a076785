//! Workout Map Frontend Entry Point

mod app;
mod browser;
mod components;
mod config;
mod context;
mod error;
mod form;
mod geolocation;
mod map;
mod models;
mod storage;
mod tracker;

use app::App;
use config::TrackerConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = TrackerConfig::from_page();
    if let Err(e) = console_logger::init(console_logger::parse_level(&config.log_level)) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
