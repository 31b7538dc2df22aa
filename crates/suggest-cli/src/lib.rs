//! suggest-cli
//! ===========
//!
//! Command-line probe for the suggestion endpoints the autocomplete widgets
//! talk to. It drives the same `suggest-core` view-model as the browser
//! widgets, so what it prints is what the dropdown would show.
//!
//! Quick start
//! -----------
//!
//! ```text
//! suggest-cli names queen
//! suggest-cli places "new york" --base-url http://localhost:8000
//! suggest-cli locate --lat 48.8534 --lng 2.3488
//! curl -s 'localhost:8000/suggest?query=a' | suggest-cli parse -
//! ```
//!
//! The library half exposes [`SuggestClient`] (blocking HTTP against the
//! endpoints) and [`TerminalList`] (a [`ListRenderer`] for any writer).
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::io::Write;
use std::time::Duration;

use reqwest::blocking::Client;
use suggest_core::endpoint::with_base;
use suggest_core::{
    Applied, Coordinates, EntryKind, ListRenderer, Result, SuggestError, SuggestionList, Widget,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for `/suggest`, `/suggestgeo` and `/geonames`.
pub struct SuggestClient {
    base_url: String,
    http: Client,
}

impl SuggestClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(concat!("suggest-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SuggestError::Transport(e.to_string()))?;
        Ok(Self {
            base_url: base_url.to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs a widget URL relative to the base and returns the body.
    pub fn get_text(&self, url: &str) -> Result<String> {
        let url = with_base(&self.base_url, url);
        log::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| SuggestError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status {
                status: status.as_u16(),
                url,
            });
        }
        response
            .text()
            .map_err(|e| SuggestError::Transport(e.to_string()))
    }

    /// Types `query` into the widget and applies the server's answer.
    pub fn run_query(&self, widget: &mut Widget, query: &str) -> Applied {
        let request = widget.input(query);
        let outcome = self.get_text(&request.url);
        widget.apply_suggestions(request.ticket, outcome)
    }

    /// Runs the geolocation path with a known position.
    pub fn run_locate(&self, widget: &mut Widget, at: Coordinates) -> Applied {
        let Some(ticket) = widget.start_locate() else {
            log::warn!("Geolocation is disabled for this widget");
            return Applied::Unchanged;
        };
        let Some(request) = widget.located(ticket, at) else {
            return Applied::Stale;
        };
        let outcome = self.get_text(&request.url);
        widget.apply_place(request.ticket, outcome)
    }
}

/// Prints a list one entry per line: index, a marker, the label.
///
/// `*` marks the geolocation entry, `!` a status message.
pub struct TerminalList<W: Write> {
    out: W,
}

impl<W: Write> TerminalList<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ListRenderer for TerminalList<W> {
    type Error = std::io::Error;

    fn render(&mut self, list: &SuggestionList) -> std::io::Result<()> {
        if list.is_empty() {
            writeln!(self.out, "(no suggestions)")?;
        }
        for (i, entry) in list.entries().iter().enumerate() {
            let marker = match entry.kind {
                EntryKind::Suggestion => ' ',
                EntryKind::Geolocate => '*',
                EntryKind::Message => '!',
            };
            writeln!(self.out, "{i:>3} {marker} {}", entry.label)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suggest_core::Entry;

    #[test]
    fn terminal_list_marks_entry_kinds() {
        let list = SuggestionList::from_entries(vec![
            Entry::geolocate("Géolocalisation"),
            Entry::suggestion("paris"),
        ]);
        let mut out = TerminalList::new(Vec::new());
        out.render(&list).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "  0 * Géolocalisation\n  1   paris\n");
    }

    #[test]
    fn empty_list_says_so() {
        let mut out = TerminalList::new(Vec::new());
        out.render(&SuggestionList::new()).unwrap();
        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "(no suggestions)\n");
    }
}
