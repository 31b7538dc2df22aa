//! Device position through `navigator.geolocation`.

use crate::net::describe;
use js_sys::{Promise, Reflect};
use suggest_core::{Coordinates, Result, SuggestError};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Resolves the current position once. Fails when the browser has no
/// geolocation, the user refuses, or the lookup errors out.
pub async fn current_position() -> Result<Coordinates> {
    let window = web_sys::window()
        .ok_or_else(|| SuggestError::Geolocation("no window available".into()))?;

    let geolocation = window
        .navigator()
        .geolocation()
        .ok()
        .filter(|g| !g.is_undefined())
        .ok_or_else(|| {
            SuggestError::Geolocation("geolocation is not supported by this browser".into())
        })?;

    let promise = Promise::new(&mut |resolve, reject| {
        let requested =
            geolocation.get_current_position_with_error_callback(&resolve, Some(&reject));
        if let Err(e) = requested {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let position = JsFuture::from(promise)
        .await
        .map_err(|e| SuggestError::Geolocation(describe(&e)))?;
    coordinates_of(&position)
}

/// Reads `position.coords.{latitude,longitude}`.
pub(crate) fn coordinates_of(position: &JsValue) -> Result<Coordinates> {
    let coords = Reflect::get(position, &JsValue::from_str("coords"))
        .map_err(|e| SuggestError::Geolocation(describe(&e)))?;
    let read = |field: &str| {
        Reflect::get(&coords, &JsValue::from_str(field))
            .ok()
            .and_then(|v| v.as_f64())
            .ok_or_else(|| SuggestError::Geolocation(format!("position has no {field}")))
    };
    Ok(Coordinates::new(read("latitude")?, read("longitude")?))
}
