// crates/suggest-core/src/endpoint.rs

//! Request URL construction for the three widget endpoints.

use crate::common::Coordinates;

pub const SUGGEST_PATH: &str = "/suggest";
pub const SUGGEST_GEO_PATH: &str = "/suggestgeo";
pub const GEONAMES_PATH: &str = "/geonames";

/// `<endpoint>?query=<percent-encoded query>`
pub fn suggest_url(endpoint: &str, query: &str) -> String {
    format!(
        "{endpoint}{}query={}",
        separator(endpoint),
        urlencoding::encode(query)
    )
}

/// `<endpoint>?lat=<latitude>&lng=<longitude>`
pub fn reverse_geocode_url(endpoint: &str, at: Coordinates) -> String {
    format!(
        "{endpoint}{}lat={}&lng={}",
        separator(endpoint),
        at.latitude,
        at.longitude
    )
}

/// Prefixes a relative endpoint with an origin. Absolute URLs pass through.
pub fn with_base(base: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    let base = base.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{base}{url}")
    } else {
        format!("{base}/{url}")
    }
}

fn separator(endpoint: &str) -> char {
    if endpoint.contains('?') {
        '&'
    } else {
        '?'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_percent_encoded() {
        assert_eq!(suggest_url(SUGGEST_PATH, "queen"), "/suggest?query=queen");
        assert_eq!(
            suggest_url(SUGGEST_GEO_PATH, "saint étienne&x=1"),
            "/suggestgeo?query=saint%20%C3%A9tienne%26x%3D1"
        );
    }

    #[test]
    fn empty_query_still_sends_the_parameter() {
        assert_eq!(suggest_url(SUGGEST_PATH, ""), "/suggest?query=");
    }

    #[test]
    fn existing_query_string_is_extended() {
        assert_eq!(
            suggest_url("/suggest?lang=fr", "a"),
            "/suggest?lang=fr&query=a"
        );
    }

    #[test]
    fn reverse_geocode_carries_both_coordinates() {
        let url = reverse_geocode_url(GEONAMES_PATH, Coordinates::new(48.8534, 2.3488));
        assert_eq!(url, "/geonames?lat=48.8534&lng=2.3488");
    }

    #[test]
    fn base_joining() {
        assert_eq!(
            with_base("http://localhost:8000/", "/suggest?query=a"),
            "http://localhost:8000/suggest?query=a"
        );
        assert_eq!(
            with_base("http://localhost:8000", "suggest"),
            "http://localhost:8000/suggest"
        );
        assert_eq!(
            with_base("http://localhost:8000", "https://api.example/x"),
            "https://api.example/x"
        );
    }
}
