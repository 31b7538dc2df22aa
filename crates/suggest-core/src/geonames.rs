// crates/suggest-core/src/geonames.rs

//! Reverse-geocode payloads.
//!
//! The `/geonames` endpoint proxies GeoNames' `findNearbyPlaceNameJSON`, so
//! the body is either
//!
//! ```json
//! { "geonames": [ { "name": "Paris", "countryName": "France", ... } ] }
//! ```
//!
//! or, when the upstream rejects the call, a status object:
//!
//! ```json
//! { "status": { "message": "user account not enabled", "value": 10 } }
//! ```

use crate::error::{Result, SuggestError};
use serde::{Deserialize, Serialize};

/// One nearby place. Only `name` and `countryName` drive the widget; the rest
/// is kept for logging and for hosts that want more than two lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoName {
    pub name: String,
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub admin_name1: Option<String>,
    #[serde(default)]
    pub toponym_name: Option<String>,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lng: Option<String>,
    #[serde(default)]
    pub distance: Option<String>,
    #[serde(default)]
    pub geoname_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoNamesStatus {
    pub message: String,
    #[serde(default)]
    pub value: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoNamesResponse {
    #[serde(default)]
    pub geonames: Vec<GeoName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GeoNamesStatus>,
}

/// City and country pulled from the first reverse-geocode hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub city: String,
    pub country: String,
}

impl GeoNamesResponse {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// The place the widget shows, or `None` when nothing is nearby.
    ///
    /// An upstream status object is an error, not an empty result.
    pub fn first_place(&self) -> Result<Option<Place>> {
        if let Some(status) = &self.status {
            return Err(SuggestError::Service(status.message.clone()));
        }
        Ok(self.geonames.first().map(|g| Place {
            city: g.name.clone(),
            country: g.country_name.clone(),
        }))
    }
}

/// Decodes a `/geonames` body straight to the first place.
pub fn parse_place(body: &str) -> Result<Option<Place>> {
    GeoNamesResponse::from_json(body)?.first_place()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: &str = r#"{"geonames":[{"adminCode1":"11","lng":"2.3488","distance":"0.52","geonameId":2988507,"toponymName":"Paris","countryId":"3017382","fcl":"P","population":2138551,"countryCode":"FR","name":"Paris","fclName":"city, village,...","countryName":"France","fcodeName":"capital of a political entity","adminName1":"Île-de-France","lat":"48.85341","fcode":"PPLC"},{"name":"Second","countryName":"Elsewhere"}]}"#;

    #[test]
    fn first_hit_wins() {
        let place = parse_place(PARIS).unwrap().unwrap();
        assert_eq!(place.city, "Paris");
        assert_eq!(place.country, "France");
    }

    #[test]
    fn unknown_fields_are_ignored_and_known_ones_kept() {
        let resp = GeoNamesResponse::from_json(PARIS).unwrap();
        assert_eq!(resp.geonames.len(), 2);
        let first = &resp.geonames[0];
        assert_eq!(first.country_code.as_deref(), Some("FR"));
        assert_eq!(first.admin_name1.as_deref(), Some("Île-de-France"));
        assert_eq!(first.geoname_id, Some(2988507));
    }

    #[test]
    fn empty_result_is_none() {
        assert_eq!(parse_place(r#"{"geonames":[]}"#).unwrap(), None);
        assert_eq!(parse_place("{}").unwrap(), None);
    }

    #[test]
    fn status_payload_is_a_service_error() {
        let body = r#"{"status":{"message":"user account not enabled to use the free webservice","value":10}}"#;
        let err = parse_place(body).unwrap_err();
        assert!(matches!(err, SuggestError::Service(ref m) if m.contains("not enabled")));
    }

    #[test]
    fn garbage_is_a_json_error() {
        assert!(matches!(
            parse_place("<html>502</html>"),
            Err(SuggestError::Json(_))
        ));
    }
}
