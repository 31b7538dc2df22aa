// crates/suggest-core/src/error.rs

use thiserror::Error;

/// Everything that can go wrong between an input event and a rendered list.
///
/// None of these escape the widget: the view-model turns them into a message
/// entry or a log line (see [`crate::widget::Widget`]).
#[derive(Debug, Error)]
pub enum SuggestError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },

    /// The reverse-geocoding service reported a failure in its own payload.
    #[error("geocoding service error: {0}")]
    Service(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Position lookup refused, timed out, or not supported by the device.
    #[error("geolocation failed: {0}")]
    Geolocation(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SuggestError>;
