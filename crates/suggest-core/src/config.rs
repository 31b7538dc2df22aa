// crates/suggest-core/src/config.rs

//! Widget configuration.
//!
//! Two presets match the host page contract: [`WidgetConfig::name`] for the
//! artist widget (`#autocomplete` / `#suggestions`) and [`WidgetConfig::geo`]
//! for the location widget (`#autocompletegeo` / `#suggestionsloc`). Hosts
//! adjust a preset with [`ConfigOverrides`], usually parsed from JSON.

use crate::endpoint::{GEONAMES_PATH, SUGGEST_GEO_PATH, SUGGEST_PATH};
use crate::error::{Result, SuggestError};
use serde::{Deserialize, Serialize};

pub const GEOLOCATE_LABEL: &str = "Géolocalisation";
pub const ERROR_MESSAGE: &str = "Error fetching suggestions";
pub const NAME_NO_MATCH: &str = "No artist matching!";
pub const GEO_NO_MATCH: &str = "No location matching!";
pub const GEOLOCATION_ERROR_MESSAGE: &str = "Location unavailable";

/// Which preset a widget was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Name,
    Geo,
}

impl std::str::FromStr for WidgetKind {
    type Err = SuggestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" | "artist" => Ok(WidgetKind::Name),
            "geo" | "location" => Ok(WidgetKind::Geo),
            other => Err(SuggestError::InvalidConfig(format!(
                "unknown widget kind '{other}' (expected 'name' or 'geo')"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub kind: WidgetKind,
    /// Id of the text input, without the leading `#`.
    pub input_id: String,
    /// Id of the list element suggestions are rendered into.
    pub list_id: String,
    /// Suggestion endpoint; the query is appended as `query=`.
    pub endpoint: String,
    /// Prefix lists with the synthetic geolocation entry.
    pub geolocation: bool,
    pub reverse_geocode_endpoint: String,
    pub geolocate_label: String,
    pub no_match_message: String,
    pub error_message: String,
    /// Render `geolocation_error_message` when the position or the
    /// reverse-geocode lookup fails. Off by default: failures are only logged.
    pub report_geolocation_errors: bool,
    pub geolocation_error_message: String,
}

impl WidgetConfig {
    /// Artist/member name widget.
    pub fn name() -> Self {
        Self {
            kind: WidgetKind::Name,
            input_id: "autocomplete".into(),
            list_id: "suggestions".into(),
            endpoint: SUGGEST_PATH.into(),
            geolocation: false,
            reverse_geocode_endpoint: GEONAMES_PATH.into(),
            geolocate_label: GEOLOCATE_LABEL.into(),
            no_match_message: NAME_NO_MATCH.into(),
            error_message: ERROR_MESSAGE.into(),
            report_geolocation_errors: false,
            geolocation_error_message: GEOLOCATION_ERROR_MESSAGE.into(),
        }
    }

    /// Location widget with the "Géolocalisation" entry.
    pub fn geo() -> Self {
        Self {
            kind: WidgetKind::Geo,
            input_id: "autocompletegeo".into(),
            list_id: "suggestionsloc".into(),
            endpoint: SUGGEST_GEO_PATH.into(),
            geolocation: true,
            no_match_message: GEO_NO_MATCH.into(),
            ..Self::name()
        }
    }

    pub fn preset(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Name => Self::name(),
            WidgetKind::Geo => Self::geo(),
        }
    }

    /// Preset for `kind` with the JSON overrides in `json` applied and validated.
    pub fn from_json(kind: WidgetKind, json: &str) -> Result<Self> {
        let overrides: ConfigOverrides = serde_json::from_str(json)?;
        Self::preset(kind).with_overrides(overrides)
    }

    pub fn with_overrides(mut self, o: ConfigOverrides) -> Result<Self> {
        if let Some(v) = o.input_id {
            self.input_id = v;
        }
        if let Some(v) = o.list_id {
            self.list_id = v;
        }
        if let Some(v) = o.endpoint {
            self.endpoint = v;
        }
        if let Some(v) = o.geolocation {
            self.geolocation = v;
        }
        if let Some(v) = o.reverse_geocode_endpoint {
            self.reverse_geocode_endpoint = v;
        }
        if let Some(v) = o.geolocate_label {
            self.geolocate_label = v;
        }
        if let Some(v) = o.no_match_message {
            self.no_match_message = v;
        }
        if let Some(v) = o.error_message {
            self.error_message = v;
        }
        if let Some(v) = o.report_geolocation_errors {
            self.report_geolocation_errors = v;
        }
        if let Some(v) = o.geolocation_error_message {
            self.geolocation_error_message = v;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("input_id", &self.input_id),
            ("list_id", &self.list_id),
            ("endpoint", &self.endpoint),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SuggestError::InvalidConfig(format!("{field} must not be empty")));
            }
        }
        if self.input_id == self.list_id {
            return Err(SuggestError::InvalidConfig(
                "input_id and list_id must name different elements".into(),
            ));
        }
        if self.geolocation {
            if self.geolocate_label.trim().is_empty() {
                return Err(SuggestError::InvalidConfig(
                    "geolocate_label must not be empty when geolocation is on".into(),
                ));
            }
            if self.reverse_geocode_endpoint.trim().is_empty() {
                return Err(SuggestError::InvalidConfig(
                    "reverse_geocode_endpoint must not be empty when geolocation is on".into(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::name()
    }
}

/// Partial configuration; every `Some` replaces the preset's value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub input_id: Option<String>,
    pub list_id: Option<String>,
    pub endpoint: Option<String>,
    pub geolocation: Option<bool>,
    pub reverse_geocode_endpoint: Option<String>,
    pub geolocate_label: Option<String>,
    pub no_match_message: Option<String>,
    pub error_message: Option<String>,
    pub report_geolocation_errors: Option<bool>,
    pub geolocation_error_message: Option<String>,
}
