//! In-memory fetcher and persister for testing
//!
//! `MockFetcher` serves predefined bodies by exact URL and records every URL it was
//! asked for. `MemoryPersister` keeps written text in a map instead of on disk.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::{Error, Result};
use crate::fetch::TextFetcher;
use crate::persist::TextPersister;

/// Mock fetcher for testing
pub struct MockFetcher {
    /// Map of URL to response body. Unknown URLs fail.
    responses: HashMap<String, String>,
    /// Every URL requested, in order.
    calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    /// Create a fetcher that fails for every URL
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a fetcher that serves `body` for exactly `url`
    pub fn with_response(url: &str, body: &str) -> Self {
        let mut fetcher = Self::new();
        fetcher.add_response(url, body);
        fetcher
    }

    /// Create a fetcher with multiple configured responses
    pub fn with_responses(responses: Vec<(&str, &str)>) -> Self {
        let mut fetcher = Self::new();
        for (url, body) in responses {
            fetcher.add_response(url, body);
        }
        fetcher
    }

    /// Add a response mapping to this fetcher
    pub fn add_response(&mut self, url: &str, body: &str) {
        self.responses.insert(url.to_string(), body.to_string());
    }

    /// URLs requested so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextFetcher for MockFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(url.to_string());

        self.responses.get(url).cloned().ok_or_else(|| Error::Transport {
            location: url.to_string(),
            message: "mock fetcher has no response configured for this URL".to_string(),
        })
    }
}

/// Persister that keeps everything in memory
#[derive(Default)]
pub struct MemoryPersister {
    written: Mutex<HashMap<String, String>>,
}

impl MemoryPersister {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text written to `location`, if any.
    pub fn get(&self, location: &str) -> Option<String> {
        self.written
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(location)
            .cloned()
    }
}

#[async_trait]
impl TextPersister for MemoryPersister {
    async fn persist_text(&self, location: &str, text: &str) -> Result<()> {
        self.written
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(location.to_string(), text.to_string());
        Ok(())
    }
}

//
// Test Fixtures
//

/// Two-page sitemap: `page-one` at priority 0.8, `page-two` at 0.4.
pub fn sample_sitemap_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://example.com/page-one</loc>
    <lastmod>2024-01-01</lastmod>
    <priority>0.8</priority>
  </url>
  <url>
    <loc>https://example.com/page-two</loc>
    <priority>0.4</priority>
  </url>
</urlset>
"#
}

/// Sample llms.txt content that passes validation
pub fn sample_valid_llms_txt() -> &'static str {
    r#"# Test Site
> A test description

## Core Content
- [Page One](https://example.com/page-one)

## Optional
- [Extra Resource](https://example.com/extra)
"#
}
