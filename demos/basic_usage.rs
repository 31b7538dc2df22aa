//! Basic usage example for suggest-rs
//!
//! This example drives the widget view-model without a browser or a server:
//! - Build the name and geo widgets from their presets
//! - Feed them server bodies (JSON, legacy and the no-match sentinel)
//! - See stale responses being dropped
//! - Walk the geolocation path with a canned reverse-geocode body

use suggest_core::prelude::*;

fn show(title: &str, widget: &Widget) {
    println!("{title} [{}]", widget.state().as_str());
    for (i, entry) in widget.list().entries().iter().enumerate() {
        println!("  {i}. {} ({})", entry.label, entry.kind.as_str());
    }
}

fn main() -> suggest_core::Result<()> {
    println!("=== suggest-rs Basic Usage Example ===\n");

    // Example 1: Name widget with a JSON body
    println!("--- Example 1: Artist suggestions ---");
    let mut names = Widget::new(WidgetConfig::name())?;
    let request = names.input("que");
    println!("GET {}", request.url);
    names.apply_suggestions(request.ticket, Ok(r#"["Queen","Queens of the Stone Age"]"#.into()));
    show("names", &names);
    println!();

    // Example 2: Legacy comma-separated body
    println!("--- Example 2: Legacy body ---");
    names.inject("[\"ABBA\", \"AC/DC\"");
    show("names", &names);
    println!();

    // Example 3: No match
    println!("--- Example 3: No-match sentinel ---");
    let request = names.input("zzzz");
    names.apply_suggestions(request.ticket, Ok("null".into()));
    show("names", &names);
    println!();

    // Example 4: Out-of-order responses
    println!("--- Example 4: Stale responses are dropped ---");
    let slow = names.input("b");
    let fast = names.input("be");
    names.apply_suggestions(fast.ticket, Ok(r#"["Beatles","Bee Gees"]"#.into()));
    let late = names.apply_suggestions(slow.ticket, Ok(r#"["Blondie"]"#.into()));
    println!("late answer for {}: {late:?}", slow.ticket);
    show("names", &names);
    println!();

    // Example 5: Picking an entry
    println!("--- Example 5: Selection ---");
    if let Some(Selection::Fill(text)) = names.select(1) {
        println!("input now reads {text:?}");
    }
    show("names", &names);
    println!();

    // Example 6: Geo widget and the geolocation entry
    println!("--- Example 6: Location suggestions ---");
    let mut places = Widget::new(WidgetConfig::geo())?;
    let request = places.input("par");
    places.apply_suggestions(request.ticket, Ok(r#"["paris-france","parma-italy"]"#.into()));
    show("places", &places);

    if let Some(Selection::Locate(ticket)) = places.select(0) {
        let at = Coordinates::new(48.8534, 2.3488);
        if let Some(lookup) = places.located(ticket, at) {
            println!("GET {}", lookup.url);
            places.apply_place(
                lookup.ticket,
                Ok(r#"{"geonames":[{"name":"Paris","countryName":"France"}]}"#.into()),
            );
        }
    }
    show("places", &places);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
