//! Configuration options for an llms.txt generation run.

use std::time::Duration;

use crate::errors::{Error, Result};
use crate::model::ContentItem;
use crate::sitemap::DEFAULT_PRIORITY;

/// Environment variable consulted for the default priority threshold.
pub const THRESHOLD_ENV_VAR: &str = "LTX_PRIORITY_THRESHOLD";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration options for a generation run.
#[derive(Debug, Clone)]
pub struct ManifestOptions {
    /// Sitemap entries with a priority at or above this become core content (default: 0.5)
    pub threshold: f64,
    /// Manifest title
    pub title: Option<String>,
    /// Manifest description
    pub description: Option<String>,
    /// Items for the `## Optional` section
    pub optional_items: Vec<ContentItem>,
    /// Per-request timeout of the HTTP fetcher (default: 30s)
    pub request_timeout: Duration,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_PRIORITY,
            title: None,
            description: None,
            optional_items: Vec::new(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ManifestOptions {
    /// Creates a new builder for ManifestOptions.
    pub fn builder() -> ManifestOptionsBuilder {
        ManifestOptionsBuilder::default()
    }
}

/// Builder for ManifestOptions.
#[derive(Debug, Clone, Default)]
pub struct ManifestOptionsBuilder {
    threshold: Option<f64>,
    title: Option<String>,
    description: Option<String>,
    optional_items: Vec<ContentItem>,
    request_timeout: Option<Duration>,
}

impl ManifestOptionsBuilder {
    /// Sets the priority threshold for core content.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Sets the manifest title.
    pub fn title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the manifest description.
    pub fn description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// Adds an item to the optional section.
    pub fn optional_item(mut self, item: ContentItem) -> Self {
        self.optional_items.push(item);
        self
    }

    /// Adds multiple items to the optional section.
    pub fn optional_items(mut self, items: Vec<ContentItem>) -> Self {
        self.optional_items.extend(items);
        self
    }

    /// Sets the HTTP request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Builds the ManifestOptions.
    pub fn build(self) -> ManifestOptions {
        ManifestOptions {
            threshold: self.threshold.unwrap_or(DEFAULT_PRIORITY),
            title: self.title,
            description: self.description,
            optional_items: self.optional_items,
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_TIMEOUT),
        }
    }
}

/// Reads a priority threshold from the environment variable, falling back to `default`
/// when it is unset. A set value must be a number in `[0, 1]`.
pub fn threshold_from_env(env_var_name: &str, default: f64) -> Result<f64> {
    match std::env::var(env_var_name) {
        Ok(v) => parse_threshold(&v),
        Err(_) => Ok(default),
    }
}

/// Parses a priority threshold, which must be a number in `[0, 1]`.
pub fn parse_threshold(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(t) if (0.0..=1.0).contains(&t) => Ok(t),
        _ => Err(Error::Validation(format!(
            "threshold must be a number between 0 and 1, got: '{}'",
            raw
        ))),
    }
}
