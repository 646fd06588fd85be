//! Set lookups and icon caching.

use std::path::PathBuf;

use crate::error::{Result, ScryfallError};
use crate::images::ImageStore;
use crate::models::Set;
use crate::pagination::Paginated;
use crate::transport::Transport;

pub struct SetQuery<'a> {
    transport: &'a Transport,
    images: &'a ImageStore,
}

impl<'a> SetQuery<'a> {
    pub fn new(transport: &'a Transport, images: &'a ImageStore) -> Self {
        Self { transport, images }
    }

    /// Every set, newest first, as a lazy paginated sequence.
    pub fn list(&self) -> Result<Paginated<'a, Set>> {
        let page = self.transport.get_object("/sets", &[])?;
        Ok(Paginated::from_page(self.transport, page))
    }

    pub fn by_code(&self, code: &str) -> Result<Set> {
        self.transport.get_object(&format!("/sets/{}", code), &[])
    }

    pub fn by_id(&self, id: &str) -> Result<Set> {
        self.transport.get_object(&format!("/sets/{}", id), &[])
    }

    pub fn by_tcgplayer_id(&self, tcgplayer_id: u64) -> Result<Set> {
        self.transport
            .get_object(&format!("/sets/tcgplayer/{}", tcgplayer_id), &[])
    }

    /// Cache the set's SVG icon locally, returning its path.
    pub fn fetch_icon(&self, set: &Set) -> Result<PathBuf> {
        let uri = set.icon_svg_uri.as_deref().ok_or_else(|| {
            ScryfallError::InvalidArgument(format!("set {} has no icon URI", set.code))
        })?;
        self.images.fetch(self.transport, uri)
    }
}
