//! Scryfall SDK for Rust.
//!
//! A blocking client for the Scryfall card-data API. JSON payloads are
//! dispatched by their `object` discriminator into typed structs, list
//! responses iterate lazily across pages, bulk collection lookups are
//! chunked transparently, and set icons / symbol glyphs are cached to a
//! local directory.
//!
//! # Quick start
//!
//! ```no_run
//! use scryfall_sdk::ScryfallSdk;
//!
//! let sdk = ScryfallSdk::builder().build().unwrap();
//!
//! // Single card lookup
//! let bolt = sdk.cards().named_exact("Lightning Bolt", None).unwrap();
//! println!("{} ranks {}", bolt.name, bolt.frame_rank());
//!
//! // Lazy search over every page
//! for card in sdk.cards().search("t:dragon c:r").unwrap() {
//!     println!("{}", card.unwrap().name);
//! }
//! ```

pub mod config;
pub mod decklist;
pub mod error;
pub mod images;
pub mod mana;
pub mod models;
pub mod object;
pub mod pagination;
pub mod queries;
pub mod transport;

pub use error::{Result, ScryfallError};
pub use images::ImageStore;
pub use mana::{Color, Mana, SymbolTable};
pub use object::{ApiObject, Kind, Object};
pub use pagination::Paginated;
pub use queries::Identifier;
pub use transport::{Fetcher, HttpFetcher, Transport};

use std::cell::OnceCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use models::CardSymbol;

// ---------------------------------------------------------------------------
// ScryfallSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`ScryfallSdk`] instance.
pub struct ScryfallSdkBuilder {
    base_url: String,
    delay: Duration,
    timeout: Duration,
    image_dir: Option<PathBuf>,
    fetcher: Option<Box<dyn Fetcher>>,
}

impl Default for ScryfallSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            delay: config::REQUEST_DELAY,
            timeout: config::DEFAULT_TIMEOUT,
            image_dir: None,
            fetcher: None,
        }
    }
}

impl ScryfallSdkBuilder {
    /// Point the SDK at a different API host.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the courtesy delay applied before each API-host request.
    /// Defaults to 100 ms; `Duration::ZERO` disables throttling.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the directory images are cached in. Defaults to the
    /// platform-appropriate cache directory.
    pub fn image_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.image_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Replace the HTTP layer with a custom [`Fetcher`]. The integration
    /// tests use this to run against canned responses.
    pub fn fetcher(mut self, fetcher: Box<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Build the SDK. Fails only if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ScryfallSdk> {
        let fetcher = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Box::new(HttpFetcher::new(self.timeout)?),
        };
        let transport = Transport::new(self.base_url, self.delay, fetcher);
        let images = ImageStore::new(self.image_dir.unwrap_or_else(config::default_image_dir));
        Ok(ScryfallSdk {
            transport,
            images,
            symbol_cache: OnceCell::new(),
        })
    }
}

// ---------------------------------------------------------------------------
// ScryfallSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Scryfall SDK.
///
/// Owns the [`Transport`], the [`ImageStore`], and the process-wide mana
/// [`SymbolTable`] cache, and hands out lightweight borrowing query
/// interfaces per domain. Created via [`ScryfallSdk::builder()`].
pub struct ScryfallSdk {
    transport: Transport,
    images: ImageStore,
    symbol_cache: OnceCell<SymbolTable>,
}

impl ScryfallSdk {
    pub fn builder() -> ScryfallSdkBuilder {
        ScryfallSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    pub fn cards(&self) -> queries::CardQuery<'_> {
        queries::CardQuery::new(&self.transport)
    }

    pub fn sets(&self) -> queries::SetQuery<'_> {
        queries::SetQuery::new(&self.transport, &self.images)
    }

    pub fn symbols(&self) -> queries::SymbolQuery<'_> {
        queries::SymbolQuery::new(&self.transport, &self.images)
    }

    pub fn rulings(&self) -> queries::RulingQuery<'_> {
        queries::RulingQuery::new(&self.transport)
    }

    pub fn catalogs(&self) -> queries::CatalogQuery<'_> {
        queries::CatalogQuery::new(&self.transport)
    }

    pub fn bulk_data(&self) -> queries::BulkDataQuery<'_> {
        queries::BulkDataQuery::new(&self.transport)
    }

    pub fn migrations(&self) -> queries::MigrationQuery<'_> {
        queries::MigrationQuery::new(&self.transport)
    }

    // -- Mana --------------------------------------------------------------

    /// The mana symbol table, fetched from the symbology listing on first
    /// use and cached for the life of the SDK.
    pub fn symbol_table(&self) -> Result<&SymbolTable> {
        if let Some(table) = self.symbol_cache.get() {
            return Ok(table);
        }
        let symbols = self
            .symbols()
            .list()?
            .collect::<Result<Vec<CardSymbol>>>()?;
        let table = SymbolTable::from_symbols(symbols);
        Ok(self.symbol_cache.get_or_init(|| table))
    }

    /// Parse a mana cost string against the cached symbol table.
    pub fn mana(&self, cost: &str) -> Result<Mana> {
        Mana::parse(cost, self.symbol_table()?)
    }

    // -- Escape hatches ----------------------------------------------------

    /// The underlying transport, for endpoints not covered by the query
    /// interfaces.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn images(&self) -> &ImageStore {
        &self.images
    }
}

impl fmt::Display for ScryfallSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScryfallSdk(base={}, image_dir={}, symbols_loaded={})",
            self.transport.base(),
            self.images.dir().display(),
            self.symbol_cache.get().is_some()
        )
    }
}
