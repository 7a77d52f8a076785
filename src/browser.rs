//! Browser Helpers

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn reload_page() {
    let reloaded = web_sys::window().map(|w| w.location().reload());
    if let Some(Err(e)) = reloaded {
        log::error!("Page reload failed: {:?}", e);
    }
}
