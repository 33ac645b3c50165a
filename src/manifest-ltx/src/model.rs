//! The content model: metadata plus the core and optional link lists of an llms.txt.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::sitemap::SitemapEntry;
use crate::title::derive_title;

/// One linked entry of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub title: String,
    pub url: String,
}

impl ContentItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Trimmed copy of this item, or an error if the title or URL is blank or spans lines.
    fn validated(&self, index: usize) -> Result<ContentItem> {
        let title = self.title.trim();
        let url = self.url.trim();
        if title.is_empty() || url.is_empty() {
            return Err(Error::Validation(format!(
                "item {index} needs a non-empty title and url, got title: '{}', url: '{}'",
                self.title, self.url
            )));
        }
        single_line(&format!("item {index} title"), title)?;
        single_line(&format!("item {index} url"), url)?;
        Ok(ContentItem::new(title, url))
    }
}

/// Title and description of the manifest. Both are trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestMetadata {
    title: String,
    description: String,
}

impl ManifestMetadata {
    /// Validates and trims the title and description.
    pub fn new(title: &str, description: &str) -> Result<Self> {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() {
            return Err(Error::Validation("title must be a non-empty string".to_string()));
        }
        if description.is_empty() {
            return Err(Error::Validation("description must be a non-empty string".to_string()));
        }
        single_line("title", title)?;
        single_line("description", description)?;
        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Construction buffer for a manifest. Lists only ever grow.
#[derive(Debug, Clone, Default)]
pub struct ContentModel {
    metadata: Option<ManifestMetadata>,
    core: Vec<ContentItem>,
    optional: Vec<ContentItem>,
}

impl ContentModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or replaces) the title and description.
    pub fn set_metadata(&mut self, title: &str, description: &str) -> Result<()> {
        self.metadata = Some(ManifestMetadata::new(title, description)?);
        Ok(())
    }

    pub fn metadata(&self) -> Option<&ManifestMetadata> {
        self.metadata.as_ref()
    }

    pub fn core_content(&self) -> &[ContentItem] {
        &self.core
    }

    pub fn optional_content(&self) -> &[ContentItem] {
        &self.optional
    }

    /// Appends items to the core list. Nothing is added if any item is invalid.
    pub fn add_core_content(&mut self, items: &[ContentItem]) -> Result<()> {
        let accepted = validate_all(items)?;
        self.core.extend(accepted);
        Ok(())
    }

    /// Appends items to the optional list. Nothing is added if any item is invalid.
    pub fn add_optional_content(&mut self, items: &[ContentItem]) -> Result<()> {
        let accepted = validate_all(items)?;
        self.optional.extend(accepted);
        Ok(())
    }

    /// Appends one core item per sitemap entry with `priority >= threshold`, titled
    /// from its URL. Returns the generated items.
    pub fn auto_generate_core_content(&mut self, threshold: f64, entries: &[SitemapEntry]) -> Result<Vec<ContentItem>> {
        let generated = generate_items(threshold, entries)?;
        self.core.extend(generated.iter().cloned());
        Ok(generated)
    }
}

/// Sitemap entries at or above the threshold, as content items in sitemap order.
pub fn generate_items(threshold: f64, entries: &[SitemapEntry]) -> Result<Vec<ContentItem>> {
    if entries.is_empty() {
        return Err(Error::Data("sitemap not loaded: no entries to generate content from".to_string()));
    }

    Ok(entries
        .iter()
        .filter(|entry| entry.priority >= threshold)
        .map(|entry| {
            let title = derive_title(&entry.loc);
            let title = if title.trim().is_empty() { entry.loc.clone() } else { title };
            ContentItem::new(title, entry.loc.clone())
        })
        .collect())
}

/// Every manifest field renders onto exactly one line.
fn single_line(field: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(Error::Validation(format!("{field} must not contain line breaks: {value:?}")));
    }
    Ok(())
}

fn validate_all(items: &[ContentItem]) -> Result<Vec<ContentItem>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| item.validated(i))
        .collect()
}
