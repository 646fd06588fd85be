//! Lazy forward-only iteration over list-shaped responses.
//!
//! At most one page is buffered at a time. When the buffer runs out the
//! iterator follows the page's continuation: a server-supplied `next_page`
//! URI for native lists, or the explicit remaining-identifier batches for
//! synthetic collection pages. `/cards/collection` has no continuation of
//! its own, so collection lookups stitch one on by slicing the identifier
//! list into batches of at most 75 and chaining POSTs.

use std::marker::PhantomData;
use std::mem;

use serde_json::{json, Value};

use crate::config;
use crate::error::{Result, ScryfallError};
use crate::models::ListPage;
use crate::object::ApiObject;
use crate::queries::cards::Identifier;
use crate::transport::Transport;

/// Where the next page comes from, if anywhere.
enum PageCursor {
    Done,
    Next(String),
    Batches(Vec<Identifier>),
}

/// Single-pass iterator over every element of a paginated listing.
///
/// Yields `Result<T>` per element; a failed page fetch is yielded once and
/// the sequence terminates.
pub struct Paginated<'a, T> {
    transport: &'a Transport,
    buffer: std::vec::IntoIter<Value>,
    cursor: PageCursor,
    total_cards: Option<u64>,
    _item: PhantomData<fn() -> T>,
}

impl<'a, T: ApiObject> Paginated<'a, T> {
    pub(crate) fn from_page(transport: &'a Transport, page: ListPage) -> Self {
        let mut paginated = Self {
            transport,
            buffer: Vec::new().into_iter(),
            cursor: PageCursor::Done,
            total_cards: None,
            _item: PhantomData,
        };
        paginated.install(page);
        paginated
    }

    /// Chunked bulk lookup: all-or-nothing across every batch.
    ///
    /// Zero identifiers yield one empty page without issuing any request.
    pub(crate) fn collection(
        transport: &'a Transport,
        mut identifiers: Vec<Identifier>,
    ) -> Result<Self> {
        if identifiers.is_empty() {
            return Ok(Self::from_page(transport, ListPage::empty()));
        }
        let rest =
            identifiers.split_off(identifiers.len().min(config::COLLECTION_PAGE_SIZE));
        let page = collection_page(transport, &identifiers)?;
        let mut paginated = Self::from_page(transport, page);
        if !rest.is_empty() {
            paginated.cursor = PageCursor::Batches(rest);
        }
        Ok(paginated)
    }

    /// The server-reported element count, when the listing carries one.
    pub fn total_cards(&self) -> Option<u64> {
        self.total_cards
    }

    fn install(&mut self, page: ListPage) {
        self.buffer = page.data.into_iter();
        self.cursor = match (page.has_more, page.next_page) {
            (true, Some(uri)) => PageCursor::Next(uri),
            _ => PageCursor::Done,
        };
        if self.total_cards.is_none() {
            self.total_cards = page.total_cards;
        }
    }

    /// Fetch and install the next page. `Ok(false)` means exhaustion.
    fn advance(&mut self) -> Result<bool> {
        match mem::replace(&mut self.cursor, PageCursor::Done) {
            PageCursor::Done => Ok(false),
            PageCursor::Next(uri) => {
                let page: ListPage = self.transport.get_object(&uri, &[])?;
                self.install(page);
                Ok(true)
            }
            PageCursor::Batches(mut batch) => {
                let rest = batch.split_off(batch.len().min(config::COLLECTION_PAGE_SIZE));
                let page = collection_page(self.transport, &batch)?;
                self.buffer = page.data.into_iter();
                if !rest.is_empty() {
                    self.cursor = PageCursor::Batches(rest);
                }
                Ok(true)
            }
        }
    }
}

impl<'a, T: ApiObject> Iterator for Paginated<'a, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        loop {
            if let Some(value) = self.buffer.next() {
                return Some(T::from_value(value));
            }
            match self.advance() {
                Ok(true) => continue,
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buffer.len(), None)
    }
}

/// POST one collection batch and validate it resolved completely.
fn collection_page(transport: &Transport, batch: &[Identifier]) -> Result<ListPage> {
    let body = json!({ "identifiers": batch });
    let page: ListPage = transport.post_object(config::COLLECTION_PATH, &body)?;
    if let Some(not_found) = &page.not_found {
        if !not_found.is_empty() {
            let unresolved = not_found
                .iter()
                .map(|value| serde_json::from_value(value.clone()))
                .collect::<std::result::Result<Vec<Identifier>, _>>()?;
            return Err(ScryfallError::UnresolvedIdentifiers(unresolved));
        }
    }
    Ok(page)
}
