//! Tracker Configuration
//!
//! Defaults can be overridden by a JSON block embedded in the page:
//! `<script id="tracker-config" type="application/json">{"map_zoom": 15}</script>`

use serde::Deserialize;

/// Element holding the optional JSON override
pub const CONFIG_ELEMENT_ID: &str = "tracker-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// localStorage key holding the workout list
    pub storage_key: String,
    /// Element the map is mounted into
    pub map_element_id: String,
    pub map_zoom: u8,
    pub tile_url: String,
    pub tile_attribution: String,
    pub popup_max_width: u32,
    pub popup_min_width: u32,
    /// Animated re-center duration
    pub pan_duration_secs: f64,
    /// How long the form stays display:none after hiding
    pub form_reveal_delay_ms: u32,
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: "workouts".to_string(),
            map_element_id: "map".to_string(),
            map_zoom: 13,
            tile_url: "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png".to_string(),
            tile_attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
            popup_max_width: 250,
            popup_min_width: 100,
            pan_duration_secs: 1.0,
            form_reveal_delay_ms: 1000,
            log_level: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Parse an override; unknown or missing fields keep their defaults
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Read the page override, falling back to defaults
    pub fn from_page() -> Self {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .and_then(|raw| Self::from_json(&raw))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config = TrackerConfig::from_json(r#"{"map_zoom": 15, "storage_key": "runs"}"#).unwrap();
        assert_eq!(config.map_zoom, 15);
        assert_eq!(config.storage_key, "runs");
        assert_eq!(config.popup_max_width, 250);
    }

    #[test]
    fn test_malformed_override() {
        assert!(TrackerConfig::from_json("zoom=15").is_none());
    }
}
