//! The `/catalog/*` string listings.

use crate::error::Result;
use crate::models::Catalog;
use crate::transport::Transport;

pub struct CatalogQuery<'a> {
    transport: &'a Transport,
}

impl<'a> CatalogQuery<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    fn get(&self, name: &str) -> Result<Catalog> {
        self.transport.get_object(&format!("/catalog/{}", name), &[])
    }

    pub fn card_names(&self) -> Result<Catalog> {
        self.get("card-names")
    }

    pub fn artist_names(&self) -> Result<Catalog> {
        self.get("artist-names")
    }

    pub fn word_bank(&self) -> Result<Catalog> {
        self.get("word-bank")
    }

    pub fn creature_types(&self) -> Result<Catalog> {
        self.get("creature-types")
    }

    pub fn planeswalker_types(&self) -> Result<Catalog> {
        self.get("planeswalker-types")
    }

    pub fn land_types(&self) -> Result<Catalog> {
        self.get("land-types")
    }

    pub fn artifact_types(&self) -> Result<Catalog> {
        self.get("artifact-types")
    }

    pub fn enchantment_types(&self) -> Result<Catalog> {
        self.get("enchantment-types")
    }

    pub fn spell_types(&self) -> Result<Catalog> {
        self.get("spell-types")
    }

    pub fn powers(&self) -> Result<Catalog> {
        self.get("powers")
    }

    pub fn toughnesses(&self) -> Result<Catalog> {
        self.get("toughnesses")
    }

    pub fn loyalties(&self) -> Result<Catalog> {
        self.get("loyalties")
    }

    pub fn watermarks(&self) -> Result<Catalog> {
        self.get("watermarks")
    }

    pub fn keyword_abilities(&self) -> Result<Catalog> {
        self.get("keyword-abilities")
    }

    pub fn keyword_actions(&self) -> Result<Catalog> {
        self.get("keyword-actions")
    }

    pub fn ability_words(&self) -> Result<Catalog> {
        self.get("ability-words")
    }
}
