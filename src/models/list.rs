use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::object::{ApiObject, Kind};

// ---------------------------------------------------------------------------
// ListPage — kind "list"
// ---------------------------------------------------------------------------

/// One page of a list-shaped response.
///
/// `data` is kept as raw values; the paginated iterator converts elements
/// to their typed objects lazily. Collection responses share this kind and
/// carry `not_found` instead of a continuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage {
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default)]
    pub has_more: bool,
    pub next_page: Option<String>,
    pub total_cards: Option<u64>,
    pub not_found: Option<Vec<Value>>,
    pub warnings: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ApiObject for ListPage {
    const KIND: Kind = Kind::List;
}

impl ListPage {
    /// An empty in-memory page with no continuation.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            has_more: false,
            next_page: None,
            total_cards: None,
            not_found: None,
            warnings: None,
            extra: serde_json::Map::new(),
        }
    }
}
