//! Set lookups and icon/glyph caching.

mod common;

use common::{list_page, sdk_with_images, symbol, MockFetcher};
use scryfall_sdk::models::{CardSymbol, Set};
use scryfall_sdk::{ApiObject, ScryfallError};
use serde_json::json;

const ICON_URL: &str = "https://svgs.scryfall.io/sets/mh2.svg?1700000000";

fn mh2(icon: Option<&str>) -> Set {
    let mut value = json!({
        "object": "set",
        "code": "mh2",
        "name": "Modern Horizons 2",
        "set_type": "draft_innovation",
    });
    if let Some(icon) = icon {
        value["icon_svg_uri"] = json!(icon);
    }
    Set::from_value(value).unwrap()
}

#[test]
fn by_code_resolves_the_set_path() {
    let fetcher = MockFetcher::new();
    fetcher.route(
        "https://api.scryfall.com/sets/mh2",
        json!({"object": "set", "code": "mh2", "name": "Modern Horizons 2"}),
    );
    let tmp = tempfile::tempdir().unwrap();
    let sdk = sdk_with_images(&fetcher, tmp.path());

    let set = sdk.sets().by_code("mh2").unwrap();
    assert_eq!(set.name, "Modern Horizons 2");
}

#[test]
fn fetch_icon_writes_the_file_once_and_strips_the_query_string() {
    let fetcher = MockFetcher::new();
    fetcher.route_raw(ICON_URL, b"<svg/>".to_vec());
    let tmp = tempfile::tempdir().unwrap();
    let sdk = sdk_with_images(&fetcher, tmp.path());

    let set = mh2(Some(ICON_URL));

    let path = sdk.sets().fetch_icon(&set).unwrap();
    assert_eq!(path.file_name().unwrap(), "mh2.svg");
    assert_eq!(std::fs::read(&path).unwrap(), b"<svg/>");
    assert_eq!(fetcher.request_count(), 1);

    // the file already exists, so the second fetch is a no-op
    let again = sdk.sets().fetch_icon(&set).unwrap();
    assert_eq!(again, path);
    assert_eq!(fetcher.request_count(), 1);
}

#[test]
fn fetch_icon_without_an_icon_uri_fails() {
    let fetcher = MockFetcher::new();
    let tmp = tempfile::tempdir().unwrap();
    let sdk = sdk_with_images(&fetcher, tmp.path());

    assert!(matches!(
        sdk.sets().fetch_icon(&mh2(None)),
        Err(ScryfallError::InvalidArgument(_))
    ));
}

#[test]
fn fetch_glyph_caches_a_symbol_svg() {
    let fetcher = MockFetcher::new();
    fetcher.route_raw("https://svgs.scryfall.io/card-symbols/W.svg", b"<svg/>".to_vec());
    let tmp = tempfile::tempdir().unwrap();
    let sdk = sdk_with_images(&fetcher, tmp.path());

    let mut value = symbol("{W}", 1.0, &["W"]);
    value["svg_uri"] = json!("https://svgs.scryfall.io/card-symbols/W.svg");
    let card_symbol = CardSymbol::from_value(value).unwrap();

    let path = sdk.symbols().fetch_glyph(&card_symbol).unwrap();
    assert_eq!(path.file_name().unwrap(), "W.svg");
    assert!(path.exists());
}

#[test]
fn set_listing_paginates_lazily() {
    let fetcher = MockFetcher::new();
    fetcher.route(
        "https://api.scryfall.com/sets",
        list_page(
            vec![json!({"object": "set", "code": "mh2", "name": "Modern Horizons 2"})],
            Some("https://api.scryfall.com/sets?page=2"),
            None,
        ),
    );
    fetcher.route(
        "https://api.scryfall.com/sets?page=2",
        list_page(
            vec![json!({"object": "set", "code": "a25", "name": "Masters 25"})],
            None,
            None,
        ),
    );
    let tmp = tempfile::tempdir().unwrap();
    let sdk = sdk_with_images(&fetcher, tmp.path());

    let codes: Vec<String> = sdk
        .sets()
        .list()
        .unwrap()
        .map(|set| set.unwrap().code)
        .collect();
    assert_eq!(codes, vec!["mh2", "a25"]);
    assert_eq!(fetcher.request_count(), 2);
}
