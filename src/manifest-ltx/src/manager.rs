//! Sequences a full run: load a sitemap, build the content model, render, validate, save.

use crate::config::ManifestOptions;
use crate::errors::{Error, Result};
use crate::fetch::{HttpFetcher, TextFetcher, load_text};
use crate::model::{ContentItem, ContentModel};
use crate::parse::{ParsedManifest, parse};
use crate::persist::{FsPersister, TextPersister};
use crate::render::render;
use crate::sitemap::{SitemapEntry, extract};
use crate::validate::validate_and_correct;

/// Owns one content model plus the sitemap entries it is generated from.
///
/// Every boundary operation takes `&mut self` or finishes before returning, so a single
/// manager never has more than one fetch or write in flight.
pub struct ManifestManager<F, P> {
    fetcher: F,
    persister: P,
    entries: Vec<SitemapEntry>,
    model: ContentModel,
}

impl ManifestManager<HttpFetcher, FsPersister> {
    /// Manager backed by reqwest and the local filesystem.
    pub fn with_defaults(options: &ManifestOptions) -> Result<Self> {
        Ok(Self::new(HttpFetcher::new(options.request_timeout)?, FsPersister))
    }
}

impl<F, P> ManifestManager<F, P>
where
    F: TextFetcher + Sync,
    P: TextPersister + Sync,
{
    pub fn new(fetcher: F, persister: P) -> Self {
        Self {
            fetcher,
            persister,
            entries: Vec::new(),
            model: ContentModel::new(),
        }
    }

    /// Fetches and extracts the sitemap at `location`, replacing previously loaded entries.
    /// On failure the previous entries are kept. Returns the number of entries.
    pub async fn load_sitemap(&mut self, location: &str) -> Result<usize> {
        let xml = load_text(&self.fetcher, location).await?;
        let entries = extract(&xml)?;
        tracing::info!("Loaded {} sitemap entries from {}", entries.len(), location);
        self.entries = entries;
        Ok(self.entries.len())
    }

    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    pub fn model(&self) -> &ContentModel {
        &self.model
    }

    pub fn set_metadata(&mut self, title: &str, description: &str) -> Result<()> {
        self.model.set_metadata(title, description)
    }

    pub fn add_core_content(&mut self, items: &[ContentItem]) -> Result<()> {
        self.model.add_core_content(items)
    }

    pub fn add_optional_content(&mut self, items: &[ContentItem]) -> Result<()> {
        self.model.add_optional_content(items)
    }

    /// Turns loaded sitemap entries at or above `threshold` into core content.
    pub fn auto_generate_core_content(&mut self, threshold: f64) -> Result<Vec<ContentItem>> {
        let generated = self.model.auto_generate_core_content(threshold, &self.entries)?;
        tracing::debug!(
            "{} of {} sitemap entries met threshold {}",
            generated.len(),
            self.entries.len(),
            threshold
        );
        Ok(generated)
    }

    /// Renders the current model.
    ///
    /// # Errors
    ///
    /// [`Error::Data`] when no metadata has been set.
    pub fn generate(&self) -> Result<String> {
        if self.model.metadata().is_none() {
            return Err(Error::Data("metadata not set: call set_metadata first".to_string()));
        }
        Ok(render(&self.model))
    }

    /// Renders the model and runs the result through [`validate_and_correct`].
    pub fn generate_validated(&self) -> Result<String> {
        let text = self.generate()?;
        let metadata = self
            .model
            .metadata()
            .ok_or_else(|| Error::Data("metadata not set: call set_metadata first".to_string()))?;
        validate_and_correct(&text, metadata)
    }

    /// Renders the model and writes it to `location`. Returns the written text.
    pub async fn save(&self, location: &str) -> Result<String> {
        let text = self.generate()?;
        self.write(location, text).await
    }

    /// Like [`Self::save`], but the text is validated and corrected before writing.
    pub async fn save_validated(&self, location: &str) -> Result<String> {
        let text = self.generate_validated()?;
        self.write(location, text).await
    }

    /// Loads an existing llms.txt from `location` and parses it.
    pub async fn load_manifest(&self, location: &str) -> Result<ParsedManifest> {
        let text = load_text(&self.fetcher, location).await?;
        parse(&text)
    }

    /// Runs the whole pipeline for `sitemap_location` with `options` and returns the rendered text.
    pub async fn run(&mut self, sitemap_location: &str, options: &ManifestOptions) -> Result<String> {
        let (Some(title), Some(description)) = (&options.title, &options.description) else {
            return Err(Error::Validation("a title and a description are required".to_string()));
        };
        self.set_metadata(title, description)?;
        self.load_sitemap(sitemap_location).await?;
        self.auto_generate_core_content(options.threshold)?;
        self.add_optional_content(&options.optional_items)?;
        self.generate()
    }

    async fn write(&self, location: &str, text: String) -> Result<String> {
        self.persister.persist_text(location, &text).await?;
        tracing::info!("Wrote {} bytes of llms.txt to {}", text.len(), location);
        Ok(text)
    }
}
