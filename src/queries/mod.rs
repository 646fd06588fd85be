//! Query modules for the Scryfall SDK.
//!
//! Each module provides a query struct that borrows the SDK's
//! [`Transport`](crate::transport::Transport) (and
//! [`ImageStore`](crate::images::ImageStore) where assets are cached) and
//! exposes methods returning `Result<T>` with typed payloads.

pub mod bulk;
pub mod cards;
pub mod catalogs;
pub mod migrations;
pub mod rulings;
pub mod sets;
pub mod symbols;

pub use bulk::BulkDataQuery;
pub use cards::{CardQuery, Identifier};
pub use catalogs::CatalogQuery;
pub use migrations::MigrationQuery;
pub use rulings::RulingQuery;
pub use sets::SetQuery;
pub use symbols::SymbolQuery;
