use mockito::{Matcher, Server};
use suggest_cli::SuggestClient;
use suggest_core::{Applied, Coordinates, EntryKind, SuggestError, Widget, WidgetConfig};

fn name_widget() -> Widget {
    Widget::new(WidgetConfig::name()).unwrap()
}

fn geo_widget() -> Widget {
    Widget::new(WidgetConfig::geo()).unwrap()
}

#[test]
fn names_query_is_encoded_and_rendered() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/suggest")
        .match_query(Matcher::UrlEncoded("query".into(), "queen & co".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"["Queen","Queens of the Stone Age"]"#)
        .expect(1)
        .create();

    let client = SuggestClient::new(&server.url()).unwrap();
    let mut widget = name_widget();
    assert_eq!(client.run_query(&mut widget, "queen & co"), Applied::Rendered);

    mock.assert();
    assert_eq!(
        widget.list().labels(),
        vec!["Queen", "Queens of the Stone Age"]
    );
}

#[test]
fn legacy_body_is_understood() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/suggest")
        .match_query(Matcher::Any)
        .with_body("[ABBA, AC/DC]")
        .create();

    let client = SuggestClient::new(&server.url()).unwrap();
    let mut widget = name_widget();
    client.run_query(&mut widget, "a");

    mock.assert();
    assert_eq!(widget.list().labels(), vec!["ABBA", "AC/DC"]);
}

#[test]
fn places_no_match_sentinel_shows_message() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/suggestgeo")
        .match_query(Matcher::UrlEncoded("query".into(), "zzz".into()))
        .with_body("null")
        .expect(1)
        .create();

    let client = SuggestClient::new(&server.url()).unwrap();
    let mut widget = geo_widget();
    client.run_query(&mut widget, "zzz");

    mock.assert();
    let entries = widget.list().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, EntryKind::Message);
    assert_eq!(entries[0].label, "No location matching!");
}

#[test]
fn places_matches_start_with_geolocation_entry() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/suggestgeo")
        .match_query(Matcher::Any)
        .with_body(r#"["london-uk","los_angeles-usa"]"#)
        .create();

    let client = SuggestClient::new(&server.url()).unwrap();
    let mut widget = geo_widget();
    client.run_query(&mut widget, "lo");

    assert_eq!(
        widget.list().labels(),
        vec!["Géolocalisation", "london-uk", "los_angeles-usa"]
    );
    assert_eq!(widget.list().entries()[0].kind, EntryKind::Geolocate);
}

#[test]
fn server_error_is_a_status_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/suggest")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .create();

    let client = SuggestClient::new(&server.url()).unwrap();
    let err = client.get_text("/suggest?query=x").unwrap_err();
    assert!(matches!(err, SuggestError::Status { status: 500, .. }));

    let mut widget = name_widget();
    assert_eq!(client.run_query(&mut widget, "x"), Applied::Rendered);
    assert_eq!(widget.list().labels(), vec!["Error fetching suggestions"]);
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let client = SuggestClient::new("http://127.0.0.1:1").unwrap();
    let err = client.get_text("/suggest?query=x").unwrap_err();
    assert!(matches!(err, SuggestError::Transport(_)));
}

#[test]
fn locate_renders_city_then_country() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/geonames")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("lat".into(), "48.8534".into()),
            Matcher::UrlEncoded("lng".into(), "2.3488".into()),
        ]))
        .with_body(r#"{"geonames":[{"name":"Paris","countryName":"France","countryCode":"FR"}]}"#)
        .expect(1)
        .create();

    let client = SuggestClient::new(&server.url()).unwrap();
    let mut widget = geo_widget();
    let applied = client.run_locate(&mut widget, Coordinates::new(48.8534, 2.3488));

    mock.assert();
    assert_eq!(applied, Applied::Rendered);
    assert_eq!(widget.list().labels(), vec!["Paris", "France"]);
}

#[test]
fn locate_with_nothing_nearby_leaves_list_alone() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/geonames")
        .match_query(Matcher::Any)
        .with_body(r#"{"geonames":[]}"#)
        .create();

    let client = SuggestClient::new(&server.url()).unwrap();
    let mut widget = geo_widget();
    let applied = client.run_locate(&mut widget, Coordinates::new(0.0, -160.0));

    assert_eq!(applied, Applied::Unchanged);
    assert!(widget.list().is_empty());
}

#[test]
fn locate_is_refused_by_the_name_widget() {
    let client = SuggestClient::new("http://127.0.0.1:1").unwrap();
    let mut widget = name_widget();
    assert_eq!(
        client.run_locate(&mut widget, Coordinates::new(1.0, 1.0)),
        Applied::Unchanged
    );
}

#[test]
fn locate_server_error_is_quiet_unless_reported() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/geonames")
        .match_query(Matcher::Any)
        .with_status(500)
        .expect(2)
        .create();

    let client = SuggestClient::new(&server.url()).unwrap();
    assert_eq!(client.base_url(), server.url());

    let mut quiet = geo_widget();
    let at = Coordinates::new(48.8534, 2.3488);
    assert_eq!(client.run_locate(&mut quiet, at), Applied::Unchanged);
    assert!(quiet.list().is_empty());

    let mut config = WidgetConfig::geo();
    config.report_geolocation_errors = true;
    let mut loud = Widget::new(config).unwrap();
    assert_eq!(client.run_locate(&mut loud, at), Applied::Rendered);
    assert_eq!(loud.list().labels(), vec!["Location unavailable"]);
}
