// crates/suggest-core/src/widget.rs

//! # Widget view-model
//!
//! One [`Widget`] drives one input/list pair. It never performs I/O: every
//! operation either returns the request the host must send ([`FetchRequest`],
//! [`Selection::Locate`]) or consumes the outcome of one, and the host
//! re-renders [`Widget::list`] whenever an operation reports
//! [`Applied::Rendered`].
//!
//! ```text
//! Idle ──input──▶ AwaitingResponse ──response──▶ ListVisible ──select / outside click──▶ Idle
//!                        ▲                            │
//!                        └──── select "Géolocalisation" ◀┘
//! ```
//!
//! Responses may arrive out of order. Each request carries a [`Ticket`]; an
//! outcome is applied only when its ticket is newer than the last applied
//! one. Closing the list (selection or outside click) retires every ticket
//! issued so far.

use crate::common::{Coordinates, Ticket};
use crate::config::WidgetConfig;
use crate::endpoint::{reverse_geocode_url, suggest_url};
use crate::error::{Result, SuggestError};
use crate::geonames::parse_place;
use crate::list::{Entry, EntryKind, SuggestionList};
use crate::response::{parse_suggestions, SuggestResponse};
use crate::traits::ListRenderer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetState {
    Idle,
    AwaitingResponse,
    ListVisible,
}

impl WidgetState {
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetState::Idle => "idle",
            WidgetState::AwaitingResponse => "awaiting_response",
            WidgetState::ListVisible => "list_visible",
        }
    }
}

/// A GET the host has to issue. Feed the outcome back with the same ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: Ticket,
    pub url: String,
}

/// Result of picking a list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Put this text into the input. The list is already empty.
    Fill(String),
    /// Ask the device for its position, then call [`Widget::located`] or
    /// [`Widget::geolocation_failed`] with this ticket.
    Locate(Ticket),
}

/// Where a document click landed, relative to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// On the list element or anything inside it.
    List,
    /// On the input itself.
    Input,
    Outside,
}

/// Whether an operation changed what is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The list was rebuilt; render it.
    Rendered,
    /// Nothing visible changed.
    Unchanged,
    /// The outcome belonged to a superseded request and was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct Widget {
    config: WidgetConfig,
    query: String,
    list: SuggestionList,
    state: WidgetState,
    issued: u64,
    applied: u64,
}

impl Widget {
    pub fn new(config: WidgetConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            query: String::new(),
            list: SuggestionList::new(),
            state: WidgetState::Idle,
            issued: 0,
            applied: 0,
        })
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Current input value as the widget knows it.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn list(&self) -> &SuggestionList {
        &self.list
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Renders the current list through `renderer`.
    pub fn render_into<R: ListRenderer>(
        &self,
        renderer: &mut R,
    ) -> std::result::Result<(), R::Error> {
        renderer.render(&self.list)
    }

    /* ----------------------------------------------------------------------
       Text query path
    ---------------------------------------------------------------------- */

    /// The input changed. Returns the one request to send for it.
    pub fn input(&mut self, query: &str) -> FetchRequest {
        self.query = query.to_string();
        self.state = WidgetState::AwaitingResponse;
        let ticket = self.issue();
        FetchRequest {
            ticket,
            url: suggest_url(&self.config.endpoint, query),
        }
    }

    /// Applies the outcome of a suggestion request: the raw body, or the
    /// transport error.
    pub fn apply_suggestions(&mut self, ticket: Ticket, outcome: Result<String>) -> Applied {
        if !self.accept(ticket) {
            return Applied::Stale;
        }

        self.list = match outcome {
            Ok(body) => self.build_list(parse_suggestions(&body)),
            Err(e) => {
                log::warn!("Suggestion request {ticket} failed: {e}");
                SuggestionList::single(Entry::message(self.config.error_message.clone()))
            }
        };
        self.state = WidgetState::ListVisible;
        Applied::Rendered
    }

    /// Applies a body that did not come through [`Widget::input`], e.g. one the
    /// host fetched itself. Supersedes everything in flight.
    pub fn inject(&mut self, body: &str) -> Applied {
        let ticket = self.issue();
        self.apply_suggestions(ticket, Ok(body.to_string()))
    }

    fn build_list(&self, response: SuggestResponse) -> SuggestionList {
        match response {
            SuggestResponse::NoMatch => {
                SuggestionList::single(Entry::message(self.config.no_match_message.clone()))
            }
            SuggestResponse::Matches(items) => {
                let mut entries = Vec::with_capacity(items.len() + 1);
                if self.config.geolocation {
                    entries.push(Entry::geolocate(self.config.geolocate_label.clone()));
                }
                entries.extend(items.into_iter().map(Entry::suggestion));
                SuggestionList::from_entries(entries)
            }
        }
    }

    /* ----------------------------------------------------------------------
       Selection & dismissal
    ---------------------------------------------------------------------- */

    /// The user picked entry `index`. `None` when the index is out of range.
    pub fn select(&mut self, index: usize) -> Option<Selection> {
        let entry = self.list.get(index)?;

        if entry.kind == EntryKind::Geolocate && self.config.geolocation {
            return self.start_locate().map(Selection::Locate);
        }

        let text = entry.label.clone();
        self.query = text.clone();
        self.close();
        Some(Selection::Fill(text))
    }

    /// A click somewhere on the page.
    pub fn click(&mut self, target: ClickTarget) -> Applied {
        match target {
            ClickTarget::List | ClickTarget::Input => Applied::Unchanged,
            ClickTarget::Outside => self.dismiss(),
        }
    }

    /// Empties the list and drops whatever is in flight.
    pub fn dismiss(&mut self) -> Applied {
        let visible = !self.list.is_empty();
        self.close();
        if visible {
            Applied::Rendered
        } else {
            Applied::Unchanged
        }
    }

    fn close(&mut self) {
        self.list.clear();
        self.applied = self.issued;
        self.state = WidgetState::Idle;
    }

    /* ----------------------------------------------------------------------
       Geolocation path
    ---------------------------------------------------------------------- */

    /// Starts a position lookup without going through the list, as selecting
    /// the geolocation entry does. `None` when geolocation is off.
    pub fn start_locate(&mut self) -> Option<Ticket> {
        if !self.config.geolocation {
            return None;
        }
        self.state = WidgetState::AwaitingResponse;
        Some(self.issue())
    }

    /// The device reported its position. Returns the reverse-geocode request,
    /// or `None` if the lookup was superseded meanwhile.
    pub fn located(&mut self, ticket: Ticket, at: Coordinates) -> Option<FetchRequest> {
        if !self.is_current(ticket) {
            log::debug!("Dropping position for superseded lookup {ticket}");
            return None;
        }
        log::info!("Latitude: {}, longitude: {}", at.latitude, at.longitude);
        Some(FetchRequest {
            ticket,
            url: reverse_geocode_url(&self.config.reverse_geocode_endpoint, at),
        })
    }

    /// The position lookup failed or geolocation is unavailable.
    pub fn geolocation_failed(&mut self, ticket: Ticket, err: SuggestError) -> Applied {
        log::error!("Could not retrieve the position: {err}");
        self.fail_locate(ticket)
    }

    /// Applies the reverse-geocode outcome: city then country from the first
    /// hit. An empty result leaves the list as it was.
    pub fn apply_place(&mut self, ticket: Ticket, outcome: Result<String>) -> Applied {
        if !self.is_current(ticket) {
            log::debug!("Dropping reverse-geocode result for superseded lookup {ticket}");
            return Applied::Stale;
        }

        match outcome.and_then(|body| parse_place(&body)) {
            Ok(Some(place)) => {
                log::info!("City: {}, country: {}", place.city, place.country);
                self.applied = ticket.0;
                self.list = SuggestionList::from_entries(vec![
                    Entry::suggestion(place.city),
                    Entry::suggestion(place.country),
                ]);
                self.state = WidgetState::ListVisible;
                Applied::Rendered
            }
            Ok(None) => {
                log::info!("No place found near the device position");
                self.applied = ticket.0;
                self.settle();
                Applied::Unchanged
            }
            Err(e) => {
                log::error!("Could not resolve city/country: {e}");
                self.fail_locate(ticket)
            }
        }
    }

    fn fail_locate(&mut self, ticket: Ticket) -> Applied {
        if !self.accept(ticket) {
            return Applied::Stale;
        }
        if self.config.report_geolocation_errors {
            self.list = SuggestionList::single(Entry::message(
                self.config.geolocation_error_message.clone(),
            ));
            self.state = WidgetState::ListVisible;
            Applied::Rendered
        } else {
            self.settle();
            Applied::Unchanged
        }
    }

    /* ----------------------------------------------------------------------
       Tickets
    ---------------------------------------------------------------------- */

    fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 > self.applied
    }

    /// Marks `ticket` applied if it is current.
    fn accept(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "Discarding stale response {ticket} (last applied #{})",
                self.applied
            );
            return false;
        }
        self.applied = ticket.0;
        true
    }

    fn settle(&mut self) {
        self.state = if self.list.is_empty() {
            WidgetState::Idle
        } else {
            WidgetState::ListVisible
        };
    }
}
