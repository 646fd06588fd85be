//! Ruling lookups, keyed by the same id schemes as cards.

use crate::error::Result;
use crate::models::Ruling;
use crate::pagination::Paginated;
use crate::transport::Transport;

pub struct RulingQuery<'a> {
    transport: &'a Transport,
}

impl<'a> RulingQuery<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    fn list(&self, uri: &str) -> Result<Paginated<'a, Ruling>> {
        let page = self.transport.get_object(uri, &[])?;
        Ok(Paginated::from_page(self.transport, page))
    }

    pub fn by_card_id(&self, id: &str) -> Result<Paginated<'a, Ruling>> {
        self.list(&format!("/cards/{}/rulings", id))
    }

    pub fn by_multiverse_id(&self, multiverse_id: u64) -> Result<Paginated<'a, Ruling>> {
        self.list(&format!("/cards/multiverse/{}/rulings", multiverse_id))
    }

    pub fn by_mtgo_id(&self, mtgo_id: u64) -> Result<Paginated<'a, Ruling>> {
        self.list(&format!("/cards/mtgo/{}/rulings", mtgo_id))
    }

    pub fn by_arena_id(&self, arena_id: u64) -> Result<Paginated<'a, Ruling>> {
        self.list(&format!("/cards/arena/{}/rulings", arena_id))
    }

    pub fn by_collector_number(&self, set: &str, number: &str) -> Result<Paginated<'a, Ruling>> {
        self.list(&format!("/cards/{}/{}/rulings", set, number))
    }
}
