//! Map Display
//!
//! Bindings to the global Leaflet `L` namespace plus the narrow surface the
//! tracker needs: center the view, place a marker with popup, remove it.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::TrackerConfig;
use crate::models::{Coords, Workout};

#[wasm_bindgen]
extern "C" {
    type LeafletMapHandle;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn leaflet_map(element_id: &str) -> LeafletMapHandle;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMapHandle, center: &JsValue, zoom: u8, options: &JsValue) -> LeafletMapHandle;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &LeafletMapHandle, layer: &LeafletMarker) -> LeafletMapHandle;

    #[wasm_bindgen(method)]
    fn on(this: &LeafletMapHandle, event: &str, handler: &js_sys::Function) -> LeafletMapHandle;

    type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_layer_to(this: &TileLayer, map: &LeafletMapHandle) -> TileLayer;

    /// A placed Leaflet marker
    pub type LeafletMarker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn leaflet_marker(latlng: &JsValue) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &LeafletMarker, map: &LeafletMapHandle) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &LeafletMarker, popup: &Popup) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = setPopupContent)]
    fn set_popup_content(this: &LeafletMarker, content: &str) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &LeafletMarker) -> LeafletMarker;

    type Popup;

    #[wasm_bindgen(js_namespace = L, js_name = popup)]
    fn leaflet_popup(options: &JsValue) -> Popup;

    type MapMouseEvent;

    #[wasm_bindgen(method, getter)]
    fn latlng(this: &MapMouseEvent) -> LatLng;

    type LatLng;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &LatLng) -> f64;
}

/// What the tracker needs from a map widget
pub trait MapSurface {
    type Marker;

    /// Move the view to `center`. A non-zero duration animates the pan.
    fn set_view(&self, center: Coords, zoom: u8, pan_duration_secs: f64);
    fn add_marker(&self, coords: Coords, popup: &MarkerPopup) -> Self::Marker;
    fn remove_marker(&self, marker: &Self::Marker);
}

/// Popup attached to a workout marker
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    pub content: String,
    pub class_name: String,
    pub max_width: u32,
    pub min_width: u32,
}

impl MarkerPopup {
    pub fn for_workout(workout: &Workout, config: &TrackerConfig) -> Self {
        let workout_type = workout.workout_type();
        Self {
            content: format!("{} {}", workout_type.icon(), workout.description),
            class_name: format!("{}-popup", workout_type.as_str()),
            max_width: config.popup_max_width,
            min_width: config.popup_min_width,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PopupOptions<'a> {
    max_width: u32,
    min_width: u32,
    auto_close: bool,
    close_on_click: bool,
    class_name: &'a str,
}

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

#[derive(Serialize)]
struct PanOptions {
    duration: f64,
}

#[derive(Serialize)]
struct ViewOptions {
    animate: bool,
    pan: PanOptions,
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::UNDEFINED)
}

/// Leaflet map mounted into a page element
pub struct LeafletMap {
    handle: LeafletMapHandle,
}

impl LeafletMap {
    /// Create the map centered on `center` with the configured tile layer
    pub fn mount(config: &TrackerConfig, center: Coords) -> Self {
        let handle = leaflet_map(&config.map_element_id);
        handle.set_view(&to_js(&center), config.map_zoom, &JsValue::UNDEFINED);
        let tiles = TileOptions {
            attribution: &config.tile_attribution,
        };
        tile_layer(&config.tile_url, &to_js(&tiles)).add_layer_to(&handle);
        log::info!("Map mounted at {:?}", center);
        Self { handle }
    }

    /// Call `handler` with the map position of every double-click
    pub fn on_double_click(&self, mut handler: impl FnMut(Coords) + 'static) {
        let cb = Closure::<dyn FnMut(MapMouseEvent)>::new(move |ev: MapMouseEvent| {
            let latlng = ev.latlng();
            handler(Coords(latlng.lat(), latlng.lng()));
        });
        self.handle.on("dblclick", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

impl MapSurface for LeafletMap {
    type Marker = LeafletMarker;

    fn set_view(&self, center: Coords, zoom: u8, pan_duration_secs: f64) {
        let options = ViewOptions {
            animate: pan_duration_secs > 0.0,
            pan: PanOptions {
                duration: pan_duration_secs,
            },
        };
        self.handle.set_view(&to_js(&center), zoom, &to_js(&options));
    }

    fn add_marker(&self, coords: Coords, popup: &MarkerPopup) -> LeafletMarker {
        let options = PopupOptions {
            max_width: popup.max_width,
            min_width: popup.min_width,
            auto_close: false,
            close_on_click: false,
            class_name: &popup.class_name,
        };
        let marker = leaflet_marker(&to_js(&coords));
        marker
            .add_marker_to(&self.handle)
            .bind_popup(&leaflet_popup(&to_js(&options)))
            .set_popup_content(&popup.content)
            .open_popup();
        marker
    }

    fn remove_marker(&self, marker: &LeafletMarker) {
        self.handle.remove_layer(marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone, Utc};

    #[test]
    fn test_popup_for_workout() {
        let date = Local.with_ymd_and_hms(2024, 4, 14, 12, 0, 0).unwrap().with_timezone(&Utc);
        let w = Workout::cycling("1".into(), date, Coords(0.0, 0.0), 20.0, 60.0, 10.0);
        let popup = MarkerPopup::for_workout(&w, &TrackerConfig::default());
        assert_eq!(popup.content, "🚴‍♀️ Cycling on April 14");
        assert_eq!(popup.class_name, "cycling-popup");
        assert_eq!(popup.max_width, 250);
        assert_eq!(popup.min_width, 100);
    }
}
