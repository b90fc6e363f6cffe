use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use tokio::{fs::File, io::AsyncWriteExt};
use uuid::Uuid;

use crate::{
    application::services::file_store::{FileReader, FileStore},
    domain::models::StoredFile,
};

/// Writes uploads into a single flat directory. Stored names are 32 random
/// hex digits with no extension, so client-supplied names never touch the
/// filesystem.
#[derive(Debug, Clone)]
pub struct LocalDiskStore {
    root: PathBuf,
}

impl LocalDiskStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn ensure_root(&self) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("failed to create upload directory {}", self.root.display()))
    }

    fn generate_name() -> String {
        Uuid::new_v4().simple().to_string()
    }

    async fn write(path: &Path, mut reader: FileReader) -> std::io::Result<u64> {
        let mut file = File::create(path).await?;
        let bytes = tokio::io::copy(&mut reader, &mut file).await?;
        file.flush().await?;
        Ok(bytes)
    }
}

#[async_trait]
impl FileStore for LocalDiskStore {
    async fn save(&self, original_name: String, reader: FileReader) -> anyhow::Result<StoredFile> {
        let saved_as = Self::generate_name();
        let path = self.root.join(&saved_as);

        let bytes = match Self::write(&path, reader).await {
            Ok(bytes) => bytes,
            Err(err) => {
                // Drop whatever was written before the failure.
                if let Err(cleanup) = tokio::fs::remove_file(&path).await {
                    tracing::warn!(path = %path.display(), error = %cleanup, "failed to remove partial upload");
                }
                return Err(err).with_context(|| format!("failed to write upload {}", path.display()));
            }
        };

        tracing::debug!(
            original = %original_name,
            saved_as = %saved_as,
            bytes,
            "upload stored"
        );

        Ok(StoredFile {
            original_name,
            saved_as,
        })
    }

    async fn remove(&self, file: &StoredFile) -> anyhow::Result<()> {
        let path = self.root.join(&file.saved_as);
        tokio::fs::remove_file(&path)
            .await
            .with_context(|| format!("failed to remove upload {}", path.display()))
    }
}
