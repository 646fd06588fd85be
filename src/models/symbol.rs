use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mana::Color;
use crate::object::{ApiObject, Kind};

// ---------------------------------------------------------------------------
// CardSymbol — kind "card_symbol"
// ---------------------------------------------------------------------------

/// One entry of the symbology listing, e.g. `{W}` or `{2/U}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSymbol {
    pub symbol: String,
    pub english: Option<String>,
    pub loose_variant: Option<String>,
    #[serde(default)]
    pub represents_mana: bool,
    /// Contribution to the converted mana cost. The API used to call this
    /// field `cmc`.
    #[serde(alias = "cmc")]
    pub mana_value: Option<f64>,
    #[serde(default)]
    pub colors: Vec<Color>,
    pub svg_uri: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ApiObject for CardSymbol {
    const KIND: Kind = Kind::CardSymbol;
}

// ---------------------------------------------------------------------------
// ManaCostInfo — kind "mana_cost"
// ---------------------------------------------------------------------------

/// Server-side mana cost analysis from `/symbology/parse-mana`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManaCostInfo {
    pub cost: String,
    pub cmc: Option<f64>,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub colorless: bool,
    #[serde(default)]
    pub monocolored: bool,
    #[serde(default)]
    pub multicolored: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ApiObject for ManaCostInfo {
    const KIND: Kind = Kind::ManaCost;
}
