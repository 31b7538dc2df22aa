// crates/suggest-core/src/traits.rs
use crate::list::SuggestionList;

/// Something that can show a [`SuggestionList`]: a DOM `<ul>`, a terminal.
///
/// Lists are always rendered in full. Implementors replace whatever they showed
/// before; an empty list means "hide the dropdown".
pub trait ListRenderer {
    type Error;

    fn render(&mut self, list: &SuggestionList) -> Result<(), Self::Error>;
}
