// crates/suggest-core/src/common.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// A device position, as handed over by the browser's geolocation API.
///
/// Produced once per lookup and consumed immediately by the reverse-geocode
/// request; the widget never stores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Sequence number attached to every outbound request.
///
/// Tickets are handed out in strictly increasing order by
/// [`crate::widget::Widget`]; a response is only applied when its ticket is
/// newer than the last one applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ticket(pub u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
