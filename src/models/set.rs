use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::object::{ApiObject, Kind};

// ---------------------------------------------------------------------------
// Set — kind "set"
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    pub code: String,
    pub name: String,
    pub id: Option<String>,
    pub set_type: Option<String>,
    pub released_at: Option<String>,
    pub card_count: Option<u64>,
    pub parent_set_code: Option<String>,
    pub digital: Option<bool>,
    pub scryfall_uri: Option<String>,
    pub icon_svg_uri: Option<String>,
    pub search_uri: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ApiObject for Set {
    const KIND: Kind = Kind::Set;
}
