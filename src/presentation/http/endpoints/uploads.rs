use std::sync::Arc;

use poem::web::Multipart;
use poem_openapi::{OpenApi, payload::Json};
use tracing::{debug, error};

use crate::{
    application::{services::file_store::FileReader, usecases::upload_files::UploadFilesUseCase},
    domain::{errors::DomainError, models::StoredFile},
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_stored_file,
        requests::UPLOAD_FIELD,
        responses::{ErrorDto, UploadEnvelopeDto, UploadResponse},
    },
};

#[derive(Clone)]
pub struct UploadEndpoints {
    state: Arc<ApiState>,
}

impl UploadEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UploadEndpoints {
    /// Stores up to ten files sent in the multipart field `files`.
    #[oai(path = "/api/upload", method = "post", tag = EndpointsTags::Uploads)]
    pub async fn upload(&self, multipart: poem::Result<Multipart>) -> UploadResponse {
        // A body that is not multipart simply carries no files.
        let multipart = match multipart {
            Ok(multipart) => multipart,
            Err(err) => {
                debug!(error = %err, "upload without multipart body");
                return upload_ok(Vec::new());
            }
        };

        match store_files(&self.state.upload_usecase, multipart).await {
            Ok(stored) => upload_ok(stored),
            Err(err) => upload_error(err),
        }
    }
}

/// Streams every file part of `multipart` to the store. Text parts are
/// skipped. A file part under any other field name, or one past the limit,
/// rejects the request and removes the files already written.
async fn store_files(
    usecase: &UploadFilesUseCase,
    mut multipart: Multipart,
) -> Result<Vec<StoredFile>, DomainError> {
    let mut batch = usecase.begin();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                return Err(batch.abort(DomainError::Validation(err.to_string())).await);
            }
        };

        let Some(original_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        if field.name() != Some(UPLOAD_FIELD) {
            return Err(batch.abort(UploadFilesUseCase::unexpected_field()).await);
        }

        let reader: FileReader = Box::pin(field.into_async_read());
        if let Err(err) = batch.push(original_name, reader).await {
            return Err(batch.abort(err).await);
        }
    }

    Ok(batch.finish())
}

fn upload_ok(stored: Vec<StoredFile>) -> UploadResponse {
    UploadResponse::Ok(Json(UploadEnvelopeDto {
        ok: true,
        files: stored.iter().map(map_stored_file).collect(),
    }))
}

fn upload_error(err: DomainError) -> UploadResponse {
    match err {
        DomainError::Other(source) => {
            error!(error = %source, "failed to store upload");
            UploadResponse::InternalError(ErrorDto::json(source.to_string()))
        }
        err => UploadResponse::BadRequest(ErrorDto::json(err.to_string())),
    }
}
