//! Kind registry and discriminator dispatch for API objects.
//!
//! Every Scryfall payload carries an `object` string naming its shape. The
//! closed set of shapes this SDK understands is the [`Kind`] enum; the
//! [`Object`] factory switches on the tag and builds the matching typed
//! struct. Constructing a specific type from a payload with a different tag
//! fails with [`ScryfallError::TypeMismatch`]; an unregistered tag fails
//! with [`ScryfallError::UnknownKind`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, ScryfallError};
use crate::models::{
    ApiError, BulkData, Card, CardFace, CardSymbol, Catalog, ListPage, ManaCostInfo, Migration,
    RelatedCard, Ruling, Set,
};

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// The registered object kinds, one per wire discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Card,
    CardFace,
    Set,
    List,
    CardSymbol,
    Error,
    Ruling,
    Catalog,
    BulkData,
    Migration,
    ManaCost,
    RelatedCard,
}

impl Kind {
    pub const ALL: [Kind; 12] = [
        Kind::Card,
        Kind::CardFace,
        Kind::Set,
        Kind::List,
        Kind::CardSymbol,
        Kind::Error,
        Kind::Ruling,
        Kind::Catalog,
        Kind::BulkData,
        Kind::Migration,
        Kind::ManaCost,
        Kind::RelatedCard,
    ];

    /// The wire discriminator this kind is registered under.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Card => "card",
            Kind::CardFace => "card_face",
            Kind::Set => "set",
            Kind::List => "list",
            Kind::CardSymbol => "card_symbol",
            Kind::Error => "error",
            Kind::Ruling => "ruling",
            Kind::Catalog => "catalog",
            Kind::BulkData => "bulk_data",
            Kind::Migration => "migration",
            Kind::ManaCost => "mana_cost",
            Kind::RelatedCard => "related_card",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Kind> {
        Kind::ALL.iter().copied().find(|kind| kind.as_str() == tag)
    }
}

// ---------------------------------------------------------------------------
// ApiObject
// ---------------------------------------------------------------------------

/// A typed view over one registered object kind.
pub trait ApiObject: DeserializeOwned {
    const KIND: Kind;

    /// Build the typed object, validating the payload's declared kind first.
    fn from_value(value: Value) -> Result<Self> {
        expect_kind(&value, Self::KIND)?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Check a payload's `object` tag against the kind being constructed.
pub fn expect_kind(value: &Value, expected: Kind) -> Result<()> {
    let found = value
        .get("object")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if found == expected.as_str() {
        Ok(())
    } else {
        Err(ScryfallError::TypeMismatch {
            expected: expected.as_str(),
            found: found.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Object
// ---------------------------------------------------------------------------

/// Any registered object, built by switching on the wire discriminator.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Card(Card),
    CardFace(CardFace),
    Set(Set),
    List(ListPage),
    CardSymbol(CardSymbol),
    Error(ApiError),
    Ruling(Ruling),
    Catalog(Catalog),
    BulkData(BulkData),
    Migration(Migration),
    ManaCost(ManaCostInfo),
    RelatedCard(RelatedCard),
}

impl Object {
    /// The single factory: dispatch a JSON payload to its registered type.
    pub fn from_value(value: Value) -> Result<Object> {
        let tag = value
            .get("object")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let kind = Kind::from_tag(&tag).ok_or(ScryfallError::UnknownKind(tag))?;
        Ok(match kind {
            Kind::Card => Object::Card(Card::from_value(value)?),
            Kind::CardFace => Object::CardFace(CardFace::from_value(value)?),
            Kind::Set => Object::Set(Set::from_value(value)?),
            Kind::List => Object::List(ListPage::from_value(value)?),
            Kind::CardSymbol => Object::CardSymbol(CardSymbol::from_value(value)?),
            Kind::Error => Object::Error(ApiError::from_value(value)?),
            Kind::Ruling => Object::Ruling(Ruling::from_value(value)?),
            Kind::Catalog => Object::Catalog(Catalog::from_value(value)?),
            Kind::BulkData => Object::BulkData(BulkData::from_value(value)?),
            Kind::Migration => Object::Migration(Migration::from_value(value)?),
            Kind::ManaCost => Object::ManaCost(ManaCostInfo::from_value(value)?),
            Kind::RelatedCard => Object::RelatedCard(RelatedCard::from_value(value)?),
        })
    }

    pub fn kind(&self) -> Kind {
        match self {
            Object::Card(_) => Kind::Card,
            Object::CardFace(_) => Kind::CardFace,
            Object::Set(_) => Kind::Set,
            Object::List(_) => Kind::List,
            Object::CardSymbol(_) => Kind::CardSymbol,
            Object::Error(_) => Kind::Error,
            Object::Ruling(_) => Kind::Ruling,
            Object::Catalog(_) => Kind::Catalog,
            Object::BulkData(_) => Kind::BulkData,
            Object::Migration(_) => Kind::Migration,
            Object::ManaCost(_) => Kind::ManaCost,
            Object::RelatedCard(_) => Kind::RelatedCard,
        }
    }
}
