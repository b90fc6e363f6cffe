use std::{sync::Arc, time::Instant};

use poem::{Endpoint, IntoResponse, Request, Response};
use tracing::{info, warn};

/// Logs the method and URI of every request together with the outcome.
pub async fn log_request<E: Endpoint>(ep: Arc<E>, req: Request) -> poem::Result<Response> {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();

    match ep.call(req).await {
        Ok(output) => {
            let response = output.into_response();
            info!(
                %method,
                %uri,
                status = response.status().as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "request"
            );
            Ok(response)
        }
        Err(err) => {
            warn!(
                %method,
                %uri,
                status = err.status().as_u16(),
                error = %err,
                "request failed"
            );
            Err(err)
        }
    }
}
