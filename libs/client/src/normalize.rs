//! Normalization of heterogeneous backend list responses
//!
//! List endpoints answer with one of three envelopes (a bare array, an
//! object carrying the array under a resource-named field, or a generic
//! `data` field), and list-membership entries arrive as a bare string, a
//! bare number, or an object holding the media reference under one of
//! several alternate field names. This module is the single place where
//! both shapes are coerced into plain sequences of string ids.

use serde::Deserialize;

/// The three response envelopes tolerated for every list endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    /// Bare JSON array
    Bare(Vec<T>),
    /// `{ "favorites": [...] }`
    Favorites { favorites: Vec<T> },
    /// `{ "watchlist": [...] }`
    Watchlist { watchlist: Vec<T> },
    /// `{ "history": [...] }`
    History { history: Vec<T> },
    /// `{ "friends": [...] }`
    Friends { friends: Vec<T> },
    /// `{ "comments": [...] }`
    Comments { comments: Vec<T> },
    /// Generic `{ "data": [...] }` fallback
    Data { data: Vec<T> },
}

impl<T> ListEnvelope<T> {
    /// Unwrap whichever envelope was used into the plain sequence
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items)
            | ListEnvelope::Favorites { favorites: items }
            | ListEnvelope::Watchlist { watchlist: items }
            | ListEnvelope::History { history: items }
            | ListEnvelope::Friends { friends: items }
            | ListEnvelope::Comments { comments: items }
            | ListEnvelope::Data { data: items } => items,
        }
    }
}

/// A string-or-number identifier value
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    /// String form
    Str(String),
    /// Numeric form
    Num(i64),
}

impl IdValue {
    fn into_string(self) -> Option<String> {
        match self {
            IdValue::Str(s) if s.is_empty() => None,
            IdValue::Str(s) => Some(s),
            IdValue::Num(n) => Some(n.to_string()),
        }
    }
}

/// Object-shaped list entry carrying the media reference under one of the
/// alternate field names used by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct ListEntry {
    /// Preferred field name
    #[serde(default, rename = "crossoverId")]
    pub crossover_id: Option<IdValue>,
    /// Generic fallback
    #[serde(default)]
    pub id: Option<IdValue>,
    /// Legacy fallback
    #[serde(default, rename = "movieId")]
    pub movie_id: Option<IdValue>,
}

/// List-membership entry in any of the recognized shapes
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawListItem {
    /// Bare string id
    Str(String),
    /// Bare numeric id
    Num(i64),
    /// Object carrying the id under an alternate field name
    Entry(ListEntry),
}

impl RawListItem {
    /// Coerce to a string id, preferring `crossoverId` over `id` over
    /// `movieId`. Entries with no recognized id yield `None`.
    pub fn into_id(self) -> Option<String> {
        match self {
            RawListItem::Str(s) if s.is_empty() => None,
            RawListItem::Str(s) => Some(s),
            RawListItem::Num(n) => Some(n.to_string()),
            RawListItem::Entry(entry) => entry
                .crossover_id
                .and_then(IdValue::into_string)
                .or_else(|| entry.id.and_then(IdValue::into_string))
                .or_else(|| entry.movie_id.and_then(IdValue::into_string)),
        }
    }
}

/// Coerce every recognized entry to a string id, dropping the rest.
/// Order follows the backend response.
pub fn normalize_ids(items: Vec<RawListItem>) -> Vec<String> {
    items.into_iter().filter_map(RawListItem::into_id).collect()
}

/// Normalized ids in display order: most-recently-added first, i.e. the
/// reverse of the backend response order.
pub fn display_ids(items: Vec<RawListItem>) -> Vec<String> {
    let mut ids = normalize_ids(items);
    ids.reverse();
    ids
}

/// De-duplicate by identity, preserving first-seen order. Detail lookups
/// are issued once per distinct id.
pub fn dedup_ids(ids: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_items(json: &str) -> Vec<RawListItem> {
        let envelope: ListEnvelope<RawListItem> =
            serde_json::from_str(json).expect("envelope should parse");
        envelope.into_items()
    }

    #[test]
    fn all_envelope_shapes_normalize_identically() {
        let bare = parse_items(r#"["5", "7"]"#);
        let named = parse_items(r#"{"favorites": ["5", "7"]}"#);
        let data = parse_items(r#"{"data": ["5", "7"]}"#);

        let expected = vec!["5".to_string(), "7".to_string()];
        assert_eq!(normalize_ids(bare), expected);
        assert_eq!(normalize_ids(named), expected);
        assert_eq!(normalize_ids(data), expected);
    }

    #[test]
    fn mixed_entry_shapes_coerce_to_string_ids() {
        let items = parse_items(
            r#"[
                "12",
                34,
                {"crossoverId": 56},
                {"id": "78"},
                {"movieId": 90},
                {"note": "no id here"}
            ]"#,
        );
        assert_eq!(normalize_ids(items), vec!["12", "34", "56", "78", "90"]);
    }

    #[test]
    fn crossover_id_wins_over_id_over_movie_id() {
        let items = parse_items(r#"[{"crossoverId": "1", "id": "2", "movieId": "3"}]"#);
        assert_eq!(normalize_ids(items), vec!["1"]);

        let items = parse_items(r#"[{"id": "2", "movieId": "3"}]"#);
        assert_eq!(normalize_ids(items), vec!["2"]);

        // An empty preferred field falls through to the next candidate
        let items = parse_items(r#"[{"crossoverId": "", "id": "2"}]"#);
        assert_eq!(normalize_ids(items), vec!["2"]);
    }

    #[test]
    fn display_order_is_most_recent_first() {
        let items = parse_items(r#"["1", "2", "3"]"#);
        assert_eq!(display_ids(items), vec!["3", "2", "1"]);
    }

    #[test]
    fn dedup_preserves_first_seen_order() {
        let ids = vec!["5".to_string(), "5".to_string(), "7".to_string()];
        assert_eq!(dedup_ids(&ids), vec!["5", "7"]);
    }
}
