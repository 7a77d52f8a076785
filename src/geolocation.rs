//! Device Location
//!
//! One-shot `navigator.geolocation.getCurrentPosition` as a future.
//! No retry and no timeout.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::LocateError;
use crate::models::Coords;

pub async fn current_position() -> Result<Coords, LocateError> {
    let geolocation = web_sys::window()
        .and_then(|w| w.navigator().geolocation().ok())
        .ok_or(LocateError::Unsupported)?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&wasm_bindgen::JsValue::NULL, &e);
        }
    });

    let value = JsFuture::from(promise).await.map_err(|_| LocateError::Denied)?;
    let position: web_sys::Position = value.dyn_into().map_err(|_| LocateError::Denied)?;
    let coords = position.coords();
    Ok(Coords(coords.latitude(), coords.longitude()))
}
