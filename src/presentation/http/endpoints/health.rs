use poem_openapi::{
    OpenApi,
    payload::{Json, PlainText},
};

use crate::presentation::http::{
    endpoints::root::{Endpoints, EndpointsTags},
    responses::HealthDto,
};

#[OpenApi]
impl Endpoints {
    #[oai(path = "/", method = "get", tag = EndpointsTags::Health)]
    pub async fn root(&self) -> PlainText<&'static str> {
        PlainText("OK")
    }

    #[oai(path = "/health", method = "get", tag = EndpointsTags::Health)]
    pub async fn health(&self) -> Json<HealthDto> {
        Json(HealthDto { ok: true })
    }
}
