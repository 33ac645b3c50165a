//! Loading text from a location: HTTP(S) with a one-time scheme swap, or the local filesystem.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::errors::{Error, Result};

/// Something that can fetch the text body behind a network URL.
#[async_trait]
pub trait TextFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

#[async_trait]
impl<T> TextFetcher for &T
where
    T: TextFetcher + Sync + ?Sized,
{
    async fn fetch_text(&self, url: &str) -> Result<String> {
        (**self).fetch_text(url).await
    }
}

/// Fetches over HTTP(S) with reqwest.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TextFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let text = response.text().await?;
        Ok(text)
    }
}

/// Loads the text at `location`.
///
/// `http://` and `https://` locations go through `fetcher`. If that attempt fails, the
/// location is tried once more with the other scheme; if both fail the error carries both
/// failure messages. Any other location is read from the local filesystem.
pub async fn load_text<F>(fetcher: &F, location: &str) -> Result<String>
where
    F: TextFetcher + ?Sized + Sync,
{
    let Some(alternate) = alternate_scheme(location) else {
        tracing::debug!("Reading {} from the local filesystem", location);
        return tokio::fs::read_to_string(location)
            .await
            .map_err(|e| Error::io(location, e));
    };

    let first = match fetcher.fetch_text(location).await {
        Ok(text) => return Ok(text),
        Err(e) => e,
    };

    tracing::warn!("Fetching {} failed ({}), retrying as {}", location, first, alternate);
    fetcher
        .fetch_text(&alternate)
        .await
        .map_err(|second| Error::SchemeFallback {
            location: location.to_string(),
            first: first.to_string(),
            second: second.to_string(),
        })
}

/// `location` with `http` and `https` swapped, or `None` if it is not a network URL.
fn alternate_scheme(location: &str) -> Option<String> {
    let url = Url::parse(location).ok()?;
    let swapped = match url.scheme() {
        "http" => "https",
        "https" => "http",
        _ => return None,
    };
    // the parsed scheme is lowercased but has the same length as the original prefix
    let rest = location.trim_start().get(url.scheme().len()..)?;
    Some(format!("{swapped}{rest}"))
}
