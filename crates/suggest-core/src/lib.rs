// crates/suggest-core/src/lib.rs

//! # suggest-core
//!
//! The platform-independent half of the name and geo autocomplete widgets:
//! response decoding, request URLs, configuration presets and the
//! [`Widget`] view-model that ties them together. No I/O happens here;
//! `suggest-wasm` wires a [`Widget`] to the DOM and `suggest-cli` to a
//! blocking HTTP client.

pub mod common;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod geonames;
pub mod list;
pub mod response;
pub mod traits;
pub mod widget;

// Re-exports
pub use crate::common::{Coordinates, Ticket};
pub use crate::config::{ConfigOverrides, WidgetConfig, WidgetKind};
pub use crate::error::{Result, SuggestError};
pub use crate::geonames::{GeoName, GeoNamesResponse, Place};
pub use crate::list::{Entry, EntryKind, SuggestionList};
pub use crate::response::{parse_suggestions, SuggestResponse};
pub use crate::traits::ListRenderer;
pub use crate::widget::{Applied, ClickTarget, FetchRequest, Selection, Widget, WidgetState};

pub mod prelude {
    pub use crate::{
        Applied, ClickTarget, Coordinates, Entry, EntryKind, ListRenderer, Selection,
        SuggestError, SuggestionList, Ticket, Widget, WidgetConfig, WidgetKind, WidgetState,
    };
}
