use std::path::PathBuf;
use std::time::Duration;

pub const API_BASE: &str = "https://api.scryfall.com";

/// Courtesy delay applied before every request to the API host.
pub const REQUEST_DELAY: Duration = Duration::from_millis(100);

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of identifiers `/cards/collection` accepts per POST.
pub const COLLECTION_PAGE_SIZE: usize = 75;

pub const COLLECTION_PATH: &str = "/cards/collection";

pub fn default_image_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("scryfall-sdk").join("img")
    } else {
        PathBuf::from("img")
    }
}
