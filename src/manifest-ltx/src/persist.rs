//! Writing rendered text to a location.

use async_trait::async_trait;

use crate::errors::{Error, Result};

/// Something that can store text at a location, replacing what was there.
#[async_trait]
pub trait TextPersister {
    async fn persist_text(&self, location: &str, text: &str) -> Result<()>;
}

#[async_trait]
impl<T> TextPersister for &T
where
    T: TextPersister + Sync + ?Sized,
{
    async fn persist_text(&self, location: &str, text: &str) -> Result<()> {
        (**self).persist_text(location, text).await
    }
}

/// Writes to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPersister;

#[async_trait]
impl TextPersister for FsPersister {
    async fn persist_text(&self, location: &str, text: &str) -> Result<()> {
        tokio::fs::write(location, text)
            .await
            .map_err(|e| Error::io(location, e))
    }
}
