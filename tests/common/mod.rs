//! Shared test fixtures for the Scryfall SDK integration tests.
//!
//! Provides [`MockFetcher`], a canned-response HTTP layer injected through
//! the SDK builder, plus JSON builders for the payload shapes the tests
//! exercise. Responses are routed by URL prefix; multiple responses queued
//! on one prefix are served in order, with the last one sticky.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use scryfall_sdk::{Fetcher, Result, ScryfallError, ScryfallSdk};
use serde_json::{json, Value};

pub const BASE: &str = "https://api.scryfall.com";

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Get {
        url: String,
        query: Vec<(String, String)>,
    },
    Post {
        url: String,
        body: Value,
    },
}

impl Request {
    pub fn url(&self) -> &str {
        match self {
            Request::Get { url, .. } => url,
            Request::Post { url, .. } => url,
        }
    }
}

#[derive(Default)]
pub struct MockFetcher {
    routes: RefCell<Vec<(String, VecDeque<Vec<u8>>)>>,
    log: RefCell<Vec<Request>>,
}

impl MockFetcher {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Queue a JSON response for requests whose URL starts with `prefix`.
    pub fn route(&self, prefix: &str, response: Value) {
        self.route_raw(prefix, serde_json::to_vec(&response).unwrap());
    }

    /// Queue a raw byte response (image downloads).
    pub fn route_raw(&self, prefix: &str, response: Vec<u8>) {
        let mut routes = self.routes.borrow_mut();
        if let Some((_, queue)) = routes.iter_mut().find(|(p, _)| p == prefix) {
            queue.push_back(response);
        } else {
            routes.push((prefix.to_string(), VecDeque::from([response])));
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.log.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.log.borrow().len()
    }

    fn respond(&self, url: &str) -> Result<Vec<u8>> {
        let mut routes = self.routes.borrow_mut();
        let entry = routes
            .iter_mut()
            .filter(|(prefix, _)| url.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len());
        match entry {
            Some((_, queue)) => {
                let response = if queue.len() > 1 {
                    queue.pop_front().unwrap()
                } else {
                    queue.front().cloned().unwrap()
                };
                Ok(response)
            }
            None => Err(ScryfallError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

/// Cloneable handle so tests can keep inspecting the log after handing the
/// fetcher to the SDK.
pub struct SharedFetcher(pub Rc<MockFetcher>);

impl Fetcher for SharedFetcher {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<Vec<u8>> {
        self.0.log.borrow_mut().push(Request::Get {
            url: url.to_string(),
            query: query.to_vec(),
        });
        self.0.respond(url)
    }

    fn post(&self, url: &str, body: &Value) -> Result<Vec<u8>> {
        self.0.log.borrow_mut().push(Request::Post {
            url: url.to_string(),
            body: body.clone(),
        });
        self.0.respond(url)
    }
}

// ---------------------------------------------------------------------------
// SDK constructors
// ---------------------------------------------------------------------------

pub fn sdk_with(fetcher: &Rc<MockFetcher>) -> ScryfallSdk {
    ScryfallSdk::builder()
        .delay(Duration::ZERO)
        .fetcher(Box::new(SharedFetcher(fetcher.clone())))
        .build()
        .unwrap()
}

pub fn sdk_with_images(fetcher: &Rc<MockFetcher>, image_dir: &Path) -> ScryfallSdk {
    ScryfallSdk::builder()
        .delay(Duration::ZERO)
        .fetcher(Box::new(SharedFetcher(fetcher.clone())))
        .image_dir(image_dir)
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Payload builders
// ---------------------------------------------------------------------------

/// A list page; `next` controls `has_more`/`next_page`.
pub fn list_page(data: Vec<Value>, next: Option<&str>, total: Option<u64>) -> Value {
    let mut page = json!({
        "object": "list",
        "data": data,
        "has_more": next.is_some(),
    });
    if let Some(next) = next {
        page["next_page"] = json!(next);
    }
    if let Some(total) = total {
        page["total_cards"] = json!(total);
    }
    page
}

/// A collection response: a list page carrying `not_found`.
pub fn collection_page(data: Vec<Value>, not_found: Vec<Value>) -> Value {
    json!({
        "object": "list",
        "data": data,
        "not_found": not_found,
    })
}

pub fn card(name: &str) -> Value {
    json!({ "object": "card", "name": name })
}

pub fn symbol(code: &str, mana_value: f64, colors: &[&str]) -> Value {
    json!({
        "object": "card_symbol",
        "symbol": code,
        "represents_mana": true,
        "mana_value": mana_value,
        "colors": colors,
    })
}

/// The symbology listing the mana tests run against:
/// `{W}`/`{U}`/`{B}`/`{R}`/`{G}` at cost 1, generic `{1}` and `{2}`, and
/// the tap symbol, which does not represent mana.
pub fn symbology() -> Value {
    list_page(
        vec![
            symbol("{W}", 1.0, &["W"]),
            symbol("{U}", 1.0, &["U"]),
            symbol("{B}", 1.0, &["B"]),
            symbol("{R}", 1.0, &["R"]),
            symbol("{G}", 1.0, &["G"]),
            symbol("{1}", 1.0, &[]),
            symbol("{2}", 2.0, &[]),
            json!({
                "object": "card_symbol",
                "symbol": "{T}",
                "represents_mana": false,
                "colors": [],
            }),
        ],
        None,
        None,
    )
}
