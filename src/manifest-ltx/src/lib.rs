//! # llms.txt from sitemaps
//!
//! Builds a curated llms.txt manifest from a website's sitemap, and reads one back.
//!
//! - [`extract`] pulls `(loc, priority)` entries out of sitemap text
//! - [`ContentModel`] collects metadata plus core and optional links
//! - [`render`] writes the model as llms.txt markdown
//! - [`validate_and_correct`] normalizes arbitrary markdown into the dialect, or rejects it
//! - [`parse`] reads llms.txt markdown into a [`ParsedManifest`]
//! - [`ManifestManager`] drives the whole run against a fetcher and a persister
//!
//! ## Example
//!
//! ```no_run
//! use manifest_ltx::{ContentItem, ManifestManager, ManifestOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = ManifestOptions::builder()
//!         .title("Example".to_string())
//!         .description("Docs for example.com".to_string())
//!         .threshold(0.6)
//!         .optional_item(ContentItem::new("Changelog", "https://example.com/changelog"))
//!         .build();
//!
//!     let mut manager = ManifestManager::with_defaults(&options)?;
//!     manager.run("https://example.com/sitemap.xml", &options).await?;
//!     manager.save("llms.txt").await?;
//!     Ok(())
//! }
//! ```

pub mod config;
mod errors;
pub mod fetch;
pub mod grammar;
pub mod logging;
mod manager;
pub mod mock;
mod model;
mod parse;
pub mod persist;
mod render;
mod sitemap;
mod title;
mod validate;

pub use config::{ManifestOptions, ManifestOptionsBuilder};
pub use errors::{Error, Result};
pub use fetch::{HttpFetcher, TextFetcher, load_text};
pub use manager::ManifestManager;
pub use model::{ContentItem, ContentModel, ManifestMetadata, generate_items};
pub use parse::{ParsedManifest, parse};
pub use persist::{FsPersister, TextPersister};
pub use render::render;
pub use sitemap::{DEFAULT_PRIORITY, SitemapEntry, extract};
pub use title::derive_title;
pub use validate::validate_and_correct;
