//! suggest-wasm — WebAssembly bindings for the autocomplete widgets
//!
//! This crate mounts the `suggest-core` view-model onto a host page. Each
//! widget owns a text input and a list element; typing queries the server,
//! the answer is rendered as `<li>` entries, and clicking an entry fills the
//! input.
//!
//! What it provides
//! ----------------
//! - Automatic mounting on module load (via `#[wasm_bindgen(start)]`) of
//!   - the artist widget on `#autocomplete` / `#suggestions` (`GET /suggest`)
//!   - the location widget on `#autocompletegeo` / `#suggestionsloc`
//!     (`GET /suggestgeo`, plus "Géolocalisation" → `GET /geonames`)
//!
//!   when those elements exist.
//! - Manual mounting: `mount_name_suggest()`, `mount_geo_suggest()`,
//!   `mount_suggest(kind, overrides)`, each returning a [`SuggestHandle`].
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { mount_suggest } from 'suggest-wasm';
//!
//! async function main() {
//!   await init(); // mounts the default widgets if their elements exist
//!
//!   const places = mount_suggest('geo', {
//!     input_id: 'city',
//!     list_id: 'city-list',
//!     report_geolocation_errors: true,
//!   });
//!   console.log(places.state()); // "idle"
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Dropping (`free()`-ing) a handle detaches its listeners. The widgets
//!   mounted by `start()` live as long as the page.
//! - Failures never escape a widget: a failed suggestion request renders the
//!   error line, a failed position lookup is logged to the console.
//! - See `dist/index.html` for a host page with the expected elements.
use std::rc::Rc;

use serde_wasm_bindgen::{from_value, to_value};
use suggest_core::prelude::*;
use suggest_core::ConfigOverrides;
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod geo;
pub mod logger;
mod mount;
pub mod net;

use crate::mount::{Listener, Mounted};

#[cfg(target_arch = "wasm32")]
thread_local! {
    // Widgets mounted by `start()`; kept for the lifetime of the page.
    static AUTO_MOUNTED: std::cell::RefCell<Vec<SuggestHandle>> =
        const { std::cell::RefCell::new(Vec::new()) };
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    log::info!("Initializing suggest widgets...");

    let ready = dom::document()
        .map(|doc| doc.ready_state() != "loading")
        .unwrap_or(false);
    if ready {
        auto_mount();
        return;
    }

    // Script ran before the body was parsed; wait for it.
    let Ok(doc) = dom::document() else {
        return;
    };
    let on_ready = Closure::once(auto_mount);
    if doc
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .is_ok()
    {
        on_ready.forget();
    }
}

/// Mounts the two default widgets, skipping any whose elements are absent.
#[cfg(target_arch = "wasm32")]
fn auto_mount() {
    for config in [WidgetConfig::name(), WidgetConfig::geo()] {
        let id = config.input_id.clone();
        match SuggestHandle::mount(config) {
            Ok(handle) => AUTO_MOUNTED.with(|m| m.borrow_mut().push(handle)),
            Err(e) => log::debug!("Skipping #{id}: {e}"),
        }
    }
}

fn to_js(e: SuggestError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/* --------------------------------------------------------------------------
   Mounting
-------------------------------------------------------------------------- */

/// Artist widget on `#autocomplete` / `#suggestions`.
#[wasm_bindgen]
pub fn mount_name_suggest() -> Result<SuggestHandle, JsValue> {
    SuggestHandle::mount(WidgetConfig::name()).map_err(to_js)
}

/// Location widget on `#autocompletegeo` / `#suggestionsloc`.
#[wasm_bindgen]
pub fn mount_geo_suggest() -> Result<SuggestHandle, JsValue> {
    SuggestHandle::mount(WidgetConfig::geo()).map_err(to_js)
}

/// `kind` is `"name"` or `"geo"`; `overrides` is an optional object whose
/// keys replace the preset's values (`input_id`, `list_id`, `endpoint`, ...).
#[wasm_bindgen]
pub fn mount_suggest(kind: &str, overrides: JsValue) -> Result<SuggestHandle, JsValue> {
    let kind: WidgetKind = kind.parse().map_err(to_js)?;
    let overrides: ConfigOverrides = if overrides.is_undefined() || overrides.is_null() {
        ConfigOverrides::default()
    } else {
        from_value(overrides)?
    };
    let config = WidgetConfig::preset(kind)
        .with_overrides(overrides)
        .map_err(to_js)?;
    SuggestHandle::mount(config).map_err(to_js)
}

/* --------------------------------------------------------------------------
   Handle
-------------------------------------------------------------------------- */

/// A mounted widget. Listeners stay attached while the handle lives.
#[wasm_bindgen]
pub struct SuggestHandle {
    mounted: Rc<Mounted>,
    _listeners: Vec<Listener>,
}

impl SuggestHandle {
    fn mount(config: WidgetConfig) -> suggest_core::Result<Self> {
        let (mounted, listeners) = mount::mount(config)?;
        Ok(Self {
            mounted,
            _listeners: listeners,
        })
    }
}

#[wasm_bindgen]
impl SuggestHandle {
    /// Current entries as `[{ label, kind }]`.
    pub fn entries(&self) -> Result<JsValue, JsValue> {
        Ok(to_value(self.mounted.widget.borrow().list())?)
    }

    /// Current entry labels, in display order.
    pub fn labels(&self) -> js_sys::Array {
        self.mounted
            .widget
            .borrow()
            .list()
            .entries()
            .iter()
            .map(|e| JsValue::from_str(&e.label))
            .collect()
    }

    /// `"idle"`, `"awaiting_response"` or `"list_visible"`.
    pub fn state(&self) -> String {
        self.mounted.widget.borrow().state().as_str().to_string()
    }

    pub fn query(&self) -> String {
        self.mounted.widget.borrow().query().to_string()
    }

    /// Same as clicking entry `index`.
    pub fn select(&self, index: usize) {
        self.mounted.select(index);
    }

    /// Same as clicking outside the widget.
    pub fn dismiss(&self) {
        self.mounted.dismiss();
    }

    /// Renders a suggestion body obtained elsewhere, superseding anything in
    /// flight.
    #[wasm_bindgen(js_name = injectResponse)]
    pub fn inject_response(&self, body: &str) {
        self.mounted.inject(body);
    }
}
