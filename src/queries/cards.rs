//! Card lookups: search, named, random, id schemes, and the chunked
//! collection lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Card, Catalog};
use crate::pagination::Paginated;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// Identifier
// ---------------------------------------------------------------------------

/// One criterion for the bulk `/cards/collection` lookup.
///
/// Serializes to the wire maps the endpoint accepts (`{"id": ...}`,
/// `{"name": ..., "set"?: ...}`, `{"set": ..., "collector_number": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    CollectorNumber {
        set: String,
        collector_number: String,
    },
    Id {
        id: String,
    },
    Name {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        set: Option<String>,
    },
}

impl Identifier {
    pub fn id(id: impl Into<String>) -> Self {
        Identifier::Id { id: id.into() }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Identifier::Name {
            name: name.into(),
            set: None,
        }
    }

    pub fn name_in_set(name: impl Into<String>, set: impl Into<String>) -> Self {
        Identifier::Name {
            name: name.into(),
            set: Some(set.into()),
        }
    }

    pub fn collector_number(set: impl Into<String>, number: impl Into<String>) -> Self {
        Identifier::CollectorNumber {
            set: set.into(),
            collector_number: number.into(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Id { id } => write!(f, "{}", id),
            Identifier::Name { name, set: None } => write!(f, "{}", name),
            Identifier::Name {
                name,
                set: Some(set),
            } => write!(f, "{} ({})", name, set),
            Identifier::CollectorNumber {
                set,
                collector_number,
            } => write!(f, "({}) {}", set, collector_number),
        }
    }
}

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface for cards.
pub struct CardQuery<'a> {
    transport: &'a Transport,
}

impl<'a> CardQuery<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    // -- Listings ----------------------------------------------------------

    /// Full-text search; iterate the result to walk every page lazily.
    pub fn search(&self, q: &str) -> Result<Paginated<'a, Card>> {
        let page = self
            .transport
            .get_object("/cards/search", &[("q".to_string(), q.to_string())])?;
        Ok(Paginated::from_page(self.transport, page))
    }

    /// Bulk lookup of up to arbitrarily many identifiers, chunked into
    /// POSTs of at most 75. All-or-nothing: any unresolved identifier
    /// fails the whole lookup.
    pub fn collection(&self, identifiers: Vec<Identifier>) -> Result<Paginated<'a, Card>> {
        Paginated::collection(self.transport, identifiers)
    }

    // -- Name lookup -------------------------------------------------------

    /// Exact-name lookup, optionally scoped to a set.
    pub fn named_exact(&self, name: &str, set: Option<&str>) -> Result<Card> {
        self.named("exact", name, set)
    }

    /// Fuzzy-name lookup, optionally scoped to a set.
    pub fn named_fuzzy(&self, name: &str, set: Option<&str>) -> Result<Card> {
        self.named("fuzzy", name, set)
    }

    fn named(&self, mode: &str, name: &str, set: Option<&str>) -> Result<Card> {
        let mut query = vec![(mode.to_string(), name.to_string())];
        if let Some(set) = set {
            query.push(("set".to_string(), set.to_string()));
        }
        self.transport.get_object("/cards/named", &query)
    }

    /// Name completions for a partial query.
    pub fn autocomplete(&self, q: &str) -> Result<Catalog> {
        self.transport
            .get_object("/cards/autocomplete", &[("q".to_string(), q.to_string())])
    }

    /// A random card, optionally filtered by a search query.
    pub fn random(&self, q: Option<&str>) -> Result<Card> {
        let query: Vec<(String, String)> = q
            .map(|q| vec![("q".to_string(), q.to_string())])
            .unwrap_or_default();
        self.transport.get_object("/cards/random", &query)
    }

    // -- Direct lookups ----------------------------------------------------

    /// A specific printing by set code and collector number, optionally in
    /// a given language.
    pub fn by_collector_number(
        &self,
        set: &str,
        number: &str,
        lang: Option<&str>,
    ) -> Result<Card> {
        let mut uri = format!("/cards/{}/{}", set, number);
        if let Some(lang) = lang {
            uri.push('/');
            uri.push_str(lang);
        }
        self.transport.get_object(&uri, &[])
    }

    pub fn by_id(&self, id: &str) -> Result<Card> {
        self.transport.get_object(&format!("/cards/{}", id), &[])
    }

    pub fn by_multiverse_id(&self, multiverse_id: u64) -> Result<Card> {
        self.transport
            .get_object(&format!("/cards/multiverse/{}", multiverse_id), &[])
    }

    pub fn by_mtgo_id(&self, mtgo_id: u64) -> Result<Card> {
        self.transport
            .get_object(&format!("/cards/mtgo/{}", mtgo_id), &[])
    }

    pub fn by_arena_id(&self, arena_id: u64) -> Result<Card> {
        self.transport
            .get_object(&format!("/cards/arena/{}", arena_id), &[])
    }

    pub fn by_tcgplayer_id(&self, tcgplayer_id: u64) -> Result<Card> {
        self.transport
            .get_object(&format!("/cards/tcgplayer/{}", tcgplayer_id), &[])
    }

    pub fn by_cardmarket_id(&self, cardmarket_id: u64) -> Result<Card> {
        self.transport
            .get_object(&format!("/cards/cardmarket/{}", cardmarket_id), &[])
    }
}
