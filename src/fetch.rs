// src/fetch.rs
// Page retrieval seam. The lookup runner only sees `PageFetcher`, so tests
// can feed canned pages without touching the network.

use std::time::Duration;

use crate::config::consts::{MAX_REDIRECTS, NET_TIMEOUT_SECS, USER_AGENT};

pub use crate::core::net::FetchError;

pub trait PageFetcher: Send + Sync {
    /// Body text of the page at a fully-formed URL.
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP + HTTPS fetcher (rustls). Follows redirects across schemes,
/// which the dictionary needs: its `http://` links answer with a 301 to TLS.
pub struct WebFetcher {
    client: reqwest::blocking::Client,
}

impl WebFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::from_builder(Self::client_builder())
    }

    /// Client settings used by `new`: user agent, timeout, redirect limit.
    pub fn client_builder() -> reqwest::blocking::ClientBuilder {
        reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(NET_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
    }

    pub fn from_builder(builder: reqwest::blocking::ClientBuilder) -> Result<Self, FetchError> {
        Ok(Self { client: builder.build()? })
    }
}

impl PageFetcher for WebFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        logd!("fetch: GET {url}");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { code: status.as_u16(), url: resp.url().to_string() });
        }
        if resp.url().as_str() != url {
            logd!("fetch: {url} ended at {}", resp.url());
        }
        Ok(resp.text()?)
    }
}

/// Plain-HTTP fetcher backed by `core::net`. No TLS.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpFetcher;

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        logd!("fetch: GET {url} (plain)");
        crate::core::net::http_get(url)
    }
}
