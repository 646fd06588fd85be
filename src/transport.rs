//! Blocking HTTP transport with base-host resolution and rate-limit courtesy.
//!
//! Relative paths (leading `/`) resolve against the configured API host;
//! absolute URIs (pagination continuations, image hosts) pass through
//! unchanged. Requests to the API host are preceded by a fixed delay;
//! other hosts are not throttled.

use std::thread;
use std::time::Duration;

use serde_json::Value;

use crate::error::{Result, ScryfallError};
use crate::object::ApiObject;

// ---------------------------------------------------------------------------
// Fetcher
// ---------------------------------------------------------------------------

/// Raw HTTP seam below the transport.
///
/// The production implementation is [`HttpFetcher`]; tests inject their own
/// via [`ScryfallSdkBuilder::fetcher`](crate::ScryfallSdkBuilder::fetcher).
/// Implementations must fail with [`ScryfallError::Status`] on a non-success
/// HTTP status.
pub trait Fetcher {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<Vec<u8>>;
    fn post(&self, url: &str, body: &Value) -> Result<Vec<u8>>;
}

/// `reqwest`-backed [`Fetcher`].
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }

    fn read_body(response: reqwest::blocking::Response) -> Result<Vec<u8>> {
        let status = response.status();
        if !status.is_success() {
            return Err(ScryfallError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response.bytes()?.to_vec())
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<Vec<u8>> {
        let response = self.client.get(url).query(query).send()?;
        Self::read_body(response)
    }

    fn post(&self, url: &str, body: &Value) -> Result<Vec<u8>> {
        let response = self.client.post(url).json(body).send()?;
        Self::read_body(response)
    }
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Thin request wrapper over a [`Fetcher`].
pub struct Transport {
    base: String,
    delay: Duration,
    fetcher: Box<dyn Fetcher>,
}

impl Transport {
    pub fn new(base: String, delay: Duration, fetcher: Box<dyn Fetcher>) -> Self {
        Self {
            base,
            delay,
            fetcher,
        }
    }

    /// The API host this transport resolves relative paths against.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolve a relative path against the API host; absolute URIs pass through.
    pub fn resolve(&self, uri: &str) -> String {
        if uri.starts_with('/') {
            format!("{}{}", self.base, uri)
        } else {
            uri.to_string()
        }
    }

    fn throttle(&self, url: &str) {
        if url.starts_with(&self.base) && !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    /// GET a URI and decode the JSON body.
    pub fn get_value(&self, uri: &str, query: &[(String, String)]) -> Result<Value> {
        let url = self.resolve(uri);
        self.throttle(&url);
        eprintln!("GET {}", url);
        let body = self.fetcher.get(&url, query)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// POST a JSON body to a URI and decode the JSON response.
    pub fn post_value(&self, uri: &str, body: &Value) -> Result<Value> {
        let url = self.resolve(uri);
        self.throttle(&url);
        eprintln!("POST {}", url);
        let response = self.fetcher.post(&url, body)?;
        Ok(serde_json::from_slice(&response)?)
    }

    /// GET a URI and return the raw response body (image downloads).
    pub fn get_bytes(&self, uri: &str) -> Result<Vec<u8>> {
        let url = self.resolve(uri);
        self.throttle(&url);
        eprintln!("GET {}", url);
        self.fetcher.get(&url, &[])
    }

    /// GET a URI and construct the typed object for it.
    pub fn get_object<T: ApiObject>(&self, uri: &str, query: &[(String, String)]) -> Result<T> {
        T::from_value(self.get_value(uri, query)?)
    }

    /// POST to a URI and construct the typed object from the response.
    pub fn post_object<T: ApiObject>(&self, uri: &str, body: &Value) -> Result<T> {
        T::from_value(self.post_value(uri, body)?)
    }
}
