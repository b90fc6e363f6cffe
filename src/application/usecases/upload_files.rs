use std::sync::Arc;

use tracing::warn;

use crate::{
    application::services::file_store::{FileReader, FileStore},
    domain::{errors::DomainError, models::StoredFile},
};

pub const MAX_FILES_PER_REQUEST: usize = 10;
pub const UNEXPECTED_FIELD_MESSAGE: &str = "Unexpected field";

pub struct UploadFilesUseCase {
    store: Arc<dyn FileStore>,
    max_files: usize,
}

impl UploadFilesUseCase {
    pub fn new(store: Arc<dyn FileStore>) -> Self {
        Self {
            store,
            max_files: MAX_FILES_PER_REQUEST,
        }
    }

    /// Rejected when the caller sent a file part it should not have.
    pub fn unexpected_field() -> DomainError {
        DomainError::Validation(UNEXPECTED_FIELD_MESSAGE.to_string())
    }

    /// Starts collecting the files of one request.
    pub fn begin(&self) -> UploadBatch<'_> {
        UploadBatch {
            store: self.store.as_ref(),
            max_files: self.max_files,
            stored: Vec::new(),
        }
    }
}

/// Files of a single request, streamed to the store one at a time. A batch
/// either finishes with every file kept or is aborted with none of them kept.
pub struct UploadBatch<'a> {
    store: &'a dyn FileStore,
    max_files: usize,
    stored: Vec<StoredFile>,
}

impl UploadBatch<'_> {
    pub async fn push(&mut self, original_name: String, reader: FileReader) -> Result<(), DomainError> {
        if self.stored.len() == self.max_files {
            return Err(UploadFilesUseCase::unexpected_field());
        }

        let file = self.store.save(original_name, reader).await?;
        self.stored.push(file);
        Ok(())
    }

    /// Removes everything stored so far and hands `err` back.
    pub async fn abort(self, err: DomainError) -> DomainError {
        for file in &self.stored {
            if let Err(cleanup) = self.store.remove(file).await {
                warn!(saved_as = %file.saved_as, error = %cleanup, "failed to remove rejected upload");
            }
        }
        err
    }

    pub fn finish(self) -> Vec<StoredFile> {
        self.stored
    }
}
