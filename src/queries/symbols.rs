//! Symbology lookups and glyph caching.

use std::path::PathBuf;

use crate::error::{Result, ScryfallError};
use crate::images::ImageStore;
use crate::models::{CardSymbol, ManaCostInfo};
use crate::pagination::Paginated;
use crate::transport::Transport;

pub struct SymbolQuery<'a> {
    transport: &'a Transport,
    images: &'a ImageStore,
}

impl<'a> SymbolQuery<'a> {
    pub fn new(transport: &'a Transport, images: &'a ImageStore) -> Self {
        Self { transport, images }
    }

    /// The full symbology listing.
    pub fn list(&self) -> Result<Paginated<'a, CardSymbol>> {
        let page = self.transport.get_object("/symbology", &[])?;
        Ok(Paginated::from_page(self.transport, page))
    }

    /// Server-side mana cost analysis of an arbitrary cost string.
    pub fn parse_mana(&self, cost: &str) -> Result<ManaCostInfo> {
        self.transport.get_object(
            "/symbology/parse-mana",
            &[("cost".to_string(), cost.to_string())],
        )
    }

    /// Cache the symbol's SVG glyph locally, returning its path.
    pub fn fetch_glyph(&self, symbol: &CardSymbol) -> Result<PathBuf> {
        let uri = symbol.svg_uri.as_deref().ok_or_else(|| {
            ScryfallError::InvalidArgument(format!("symbol {} has no glyph URI", symbol.symbol))
        })?;
        self.images.fetch(self.transport, uri)
    }
}
