// crates/suggest-core/src/response.rs

//! # Suggestion bodies
//!
//! The suggestion endpoints answer with a JSON-encoded array of strings
//! (`["Queen - Artiste(s)","Freddie Mercury - Membre"]\n`) or with the bare
//! `null\n` sentinel when nothing matched.
//!
//! Decoding is lenient: a body that is not a JSON array is split on commas and
//! every piece loses its bracket and quote characters, which is the historical
//! wire contract of these endpoints.

/// Body the server sends when no suggestion matched.
pub const NO_MATCH_SENTINEL: &str = "null";

/// Characters stripped from every piece of a comma-split body.
const WRAPPING: [char; 3] = ['"', '[', ']'];

/// Outcome of decoding one suggestion body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestResponse {
    /// The server signalled zero results. Not an error.
    NoMatch,
    /// Suggestions in server order, already cleaned.
    Matches(Vec<String>),
}

impl SuggestResponse {
    pub fn is_no_match(&self) -> bool {
        matches!(self, SuggestResponse::NoMatch)
    }

    pub fn len(&self) -> usize {
        match self {
            SuggestResponse::NoMatch => 0,
            SuggestResponse::Matches(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decodes a raw suggestion body.
///
/// # Examples
///
/// ```rust
/// use suggest_core::response::{parse_suggestions, SuggestResponse};
///
/// let parsed = parse_suggestions("\"a\",\"b\",\"c\"");
/// assert_eq!(
///     parsed,
///     SuggestResponse::Matches(vec!["a".into(), "b".into(), "c".into()])
/// );
///
/// assert_eq!(parse_suggestions("null\n"), SuggestResponse::NoMatch);
/// ```
pub fn parse_suggestions(body: &str) -> SuggestResponse {
    let body = body.trim();
    if body == NO_MATCH_SENTINEL {
        return SuggestResponse::NoMatch;
    }

    let pieces = match serde_json::from_str::<Vec<String>>(body) {
        Ok(items) => items,
        Err(_) => split_legacy(body),
    };

    let items: Vec<String> = pieces
        .iter()
        .map(|s| strip_wrapping(s).trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    log::debug!("Suggestions array: {items:?}");

    if items.is_empty() {
        SuggestResponse::NoMatch
    } else {
        SuggestResponse::Matches(items)
    }
}

/// Comma split, for bodies that are not JSON.
fn split_legacy(body: &str) -> Vec<String> {
    body.split(',').map(str::to_string).collect()
}

/// Removes every `"`, `[` and `]` from a piece.
pub fn strip_wrapping(piece: &str) -> String {
    piece.chars().filter(|c| !WRAPPING.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(items: &[&str]) -> SuggestResponse {
        SuggestResponse::Matches(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn quoted_list_keeps_server_order() {
        assert_eq!(parse_suggestions(r#""a","b","c""#), matches(&["a", "b", "c"]));
    }

    #[test]
    fn json_array_with_trailing_newline() {
        let body = "[\"Queen - Artiste(s)\",\"Freddie Mercury - Membre\"]\n";
        assert_eq!(
            parse_suggestions(body),
            matches(&["Queen - Artiste(s)", "Freddie Mercury - Membre"])
        );
    }

    #[test]
    fn sentinel_is_no_match() {
        assert_eq!(parse_suggestions("null\n"), SuggestResponse::NoMatch);
        assert_eq!(parse_suggestions("null"), SuggestResponse::NoMatch);
    }

    #[test]
    fn sentinel_inside_a_list_is_a_suggestion() {
        assert_eq!(parse_suggestions(r#""null","x""#), matches(&["null", "x"]));
    }

    #[test]
    fn empty_bodies_are_no_match() {
        assert!(parse_suggestions("[]\n").is_no_match());
        assert!(parse_suggestions("").is_no_match());
        assert!(parse_suggestions("  \n").is_no_match());
    }

    #[test]
    fn json_keeps_commas_inside_names() {
        let body = r#"["Earth, Wind & Fire - Artiste(s)","Maurice White - Membre"]"#;
        assert_eq!(
            parse_suggestions(body),
            matches(&["Earth, Wind & Fire - Artiste(s)", "Maurice White - Membre"])
        );
    }

    #[test]
    fn broken_json_falls_back_to_comma_split() {
        // Unterminated array: not JSON, still usable.
        let body = r#"["paris","france""#;
        assert_eq!(parse_suggestions(body), matches(&["paris", "france"]));
    }

    #[test]
    fn json_items_lose_brackets_and_quotes() {
        let body = r#"["[Bracket] \"Q\"","[\"\"]","AC/DC"]"#;
        assert_eq!(parse_suggestions(body), matches(&["Bracket Q", "AC/DC"]));
    }

    #[test]
    fn strip_removes_brackets_and_quotes_only() {
        assert_eq!(strip_wrapping(r#"["los angeles"]"#), "los angeles");
        assert_eq!(strip_wrapping("Guns N' Roses"), "Guns N' Roses");
    }

    #[test]
    fn len_counts_matches() {
        assert_eq!(parse_suggestions(r#"["a","b"]"#).len(), 2);
        assert_eq!(SuggestResponse::NoMatch.len(), 0);
        assert!(SuggestResponse::NoMatch.is_empty());
    }
}
