use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mana::{Color, Mana, SymbolTable};
use crate::object::{ApiObject, Kind};
use crate::Result;

// ---------------------------------------------------------------------------
// Card — kind "card"
// ---------------------------------------------------------------------------

/// A card, typed for the fields the SDK reads. Everything else the API
/// sends lands in `extra` for fidelity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub id: Option<String>,
    pub lang: Option<String>,
    pub layout: Option<String>,
    pub type_line: Option<String>,
    pub mana_cost: Option<String>,
    pub cmc: Option<f64>,
    pub colors: Option<Vec<Color>>,
    pub card_faces: Option<Vec<CardFace>>,
    pub all_parts: Option<Vec<RelatedCard>>,
    pub set: Option<String>,
    pub set_name: Option<String>,
    pub collector_number: Option<String>,
    pub image_uris: Option<BTreeMap<String, String>>,
    pub scryfall_uri: Option<String>,
    pub prints_search_uri: Option<String>,
    pub rulings_uri: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ApiObject for Card {
    const KIND: Kind = Kind::Card;
}

impl Card {
    /// The face used for type/mana/color lookups.
    ///
    /// Multi-faced cards resolve to their first face, except the split
    /// layout, where the card itself is its own front.
    pub fn front(&self) -> Front<'_> {
        match &self.card_faces {
            Some(faces) if !faces.is_empty() && self.layout.as_deref() != Some("split") => {
                Front::Face(&faces[0])
            }
            _ => Front::Whole(self),
        }
    }

    /// Frame rank orders cards the way sets are laid out:
    ///  0. colorless, 1-5. mono W/U/B/R/G, 6. multicolored,
    ///  7. colorless artifact, 8. land, 9. emblem, 10. card back / dungeon.
    pub fn frame_rank(&self) -> u8 {
        let front = self.front();
        let type_line = front.type_line().unwrap_or_default();

        if type_line == "Card" || type_line == "Dungeon" {
            return 10;
        }
        if type_line.contains("Emblem") {
            return 9;
        }
        if type_line.contains("Land") {
            return 8;
        }

        // Adventure faces record no colors of their own, so fall back to
        // the card's top-level colors when the front has none.
        let colors = front
            .colors()
            .or(self.colors.as_deref())
            .unwrap_or_default();
        match colors.len() {
            1 => 1 + colors[0].rank() as u8,
            n if n > 1 => 6,
            _ if type_line.contains("Artifact") => 7,
            _ => 0,
        }
    }

    /// Parse this card's own mana cost string.
    pub fn mana(&self, table: &SymbolTable) -> Result<Mana> {
        Mana::parse(self.mana_cost.as_deref().unwrap_or_default(), table)
    }

    /// The converted mana cost, or positive infinity when the front face
    /// has no mana symbols at all, so costless cards sort last.
    pub fn cmc_or_inf(&self, table: &SymbolTable) -> Result<f64> {
        let front_mana = Mana::parse(self.front().mana_cost().unwrap_or_default(), table)?;
        if front_mana.symbols.is_empty() {
            Ok(f64::INFINITY)
        } else {
            Ok(self.cmc.unwrap_or(0.0))
        }
    }
}

// ---------------------------------------------------------------------------
// Front
// ---------------------------------------------------------------------------

/// Borrowing view of a card's front: either the whole card or its first face.
#[derive(Debug, Clone, Copy)]
pub enum Front<'a> {
    Whole(&'a Card),
    Face(&'a CardFace),
}

impl<'a> Front<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Front::Whole(card) => &card.name,
            Front::Face(face) => &face.name,
        }
    }

    pub fn type_line(&self) -> Option<&'a str> {
        match self {
            Front::Whole(card) => card.type_line.as_deref(),
            Front::Face(face) => face.type_line.as_deref(),
        }
    }

    pub fn colors(&self) -> Option<&'a [Color]> {
        match self {
            Front::Whole(card) => card.colors.as_deref(),
            Front::Face(face) => face.colors.as_deref(),
        }
    }

    pub fn mana_cost(&self) -> Option<&'a str> {
        match self {
            Front::Whole(card) => card.mana_cost.as_deref(),
            Front::Face(face) => face.mana_cost.as_deref(),
        }
    }

    pub fn mana(&self, table: &SymbolTable) -> Result<Mana> {
        Mana::parse(self.mana_cost().unwrap_or_default(), table)
    }
}

// ---------------------------------------------------------------------------
// CardFace — kind "card_face"
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardFace {
    pub name: String,
    pub type_line: Option<String>,
    pub mana_cost: Option<String>,
    pub colors: Option<Vec<Color>>,
    pub image_uris: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ApiObject for CardFace {
    const KIND: Kind = Kind::CardFace;
}

impl CardFace {
    pub fn mana(&self, table: &SymbolTable) -> Result<Mana> {
        Mana::parse(self.mana_cost.as_deref().unwrap_or_default(), table)
    }
}

// ---------------------------------------------------------------------------
// RelatedCard — kind "related_card"
// ---------------------------------------------------------------------------

/// A token, meld part, or combo piece referenced from a card's `all_parts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedCard {
    pub id: Option<String>,
    pub component: Option<String>,
    pub name: Option<String>,
    pub type_line: Option<String>,
    pub uri: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ApiObject for RelatedCard {
    const KIND: Kind = Kind::RelatedCard;
}
