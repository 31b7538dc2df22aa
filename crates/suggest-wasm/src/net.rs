//! `fetch` wrapper returning the body as text.

use suggest_core::{Result, SuggestError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// GETs `url` and returns the body. Non-2xx statuses are errors, matching
/// what the widgets treat as a failed request.
pub async fn fetch_text(url: &str) -> Result<String> {
    let window =
        web_sys::window().ok_or_else(|| SuggestError::Transport("no window available".into()))?;

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;

    if !response.ok() {
        return Err(SuggestError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let text = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    text.as_string()
        .ok_or_else(|| SuggestError::Transport(format!("body of {url} is not text")))
}

fn transport(e: JsValue) -> SuggestError {
    SuggestError::Transport(describe(&e))
}

/// Best-effort message out of a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
