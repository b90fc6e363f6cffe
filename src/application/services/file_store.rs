use std::pin::Pin;

use async_trait::async_trait;
use tokio::io::AsyncRead;

use crate::domain::models::StoredFile;

/// Byte stream of one uploaded file, read straight from the request body.
pub type FileReader = Pin<Box<dyn AsyncRead + Send>>;

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Streams `reader` into storage under a freshly generated name.
    async fn save(&self, original_name: String, reader: FileReader) -> anyhow::Result<StoredFile>;

    async fn remove(&self, file: &StoredFile) -> anyhow::Result<()>;
}
