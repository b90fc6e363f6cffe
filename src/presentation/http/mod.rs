use std::sync::Arc;

use poem::{EndpointExt, Route, endpoint::BoxEndpoint, middleware::Cors};
use poem_openapi::OpenApiService;

use crate::{
    config::AllowedOrigins,
    presentation::http::endpoints::{
        auth::AuthEndpoints,
        donations::DonationEndpoints,
        root::{ApiState, Endpoints},
        uploads::UploadEndpoints,
    },
};

pub mod endpoints;
pub mod mappers;
pub mod middleware;
pub mod requests;
pub mod responses;

pub const API_TITLE: &str = "Thapar Backend API";

/// Assembles every route behind CORS and request logging.
pub fn build_app(state: Arc<ApiState>, origins: &AllowedOrigins) -> BoxEndpoint<'static> {
    let api_service = OpenApiService::new(
        (
            Endpoints,
            AuthEndpoints::new(state.clone()),
            UploadEndpoints::new(state.clone()),
            DonationEndpoints::new(state),
        ),
        API_TITLE,
        env!("CARGO_PKG_VERSION"),
    );
    let ui = api_service.swagger_ui();
    let openapi_json = api_service.spec_endpoint();

    Route::new()
        .nest("/docs", ui)
        .at("/openapi.json", openapi_json)
        .nest("/", api_service)
        .with(cors(origins))
        .around(middleware::log_request)
        .boxed()
}

fn cors(origins: &AllowedOrigins) -> Cors {
    let cors = Cors::new().allow_credentials(true);
    match origins {
        AllowedOrigins::Any => cors,
        AllowedOrigins::List(list) => list
            .iter()
            .fold(cors, |cors, origin| cors.allow_origin(origin.as_str())),
    }
}
