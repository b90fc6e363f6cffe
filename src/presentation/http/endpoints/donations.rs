use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};
use tracing::warn;

use crate::{
    application::usecases::create_donation::DonationRequest,
    domain::errors::DomainError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_donation,
        requests::DonatePayload,
        responses::{DonateResponse, DonationEnvelopeDto, ErrorDto},
    },
};

#[derive(Clone)]
pub struct DonationEndpoints {
    state: Arc<ApiState>,
}

impl DonationEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl DonationEndpoints {
    /// Records a donation. Payment confirmation is currently a placeholder
    /// that always succeeds.
    #[oai(path = "/api/donate", method = "post", tag = EndpointsTags::Donations)]
    pub async fn donate(&self, request: DonatePayload) -> DonateResponse {
        let request = request.into_inner();
        let payload = DonationRequest {
            amount: request.numeric_amount(),
            user_email: request.user_email,
        };

        match self.state.donation_usecase.execute(payload).await {
            Ok(donation) => DonateResponse::Ok(Json(DonationEnvelopeDto {
                ok: true,
                donation: map_donation(&donation),
            })),
            Err(err) => {
                if let DomainError::Other(source) = &err {
                    warn!(error = %source, "failed to record donation");
                }
                DonateResponse::BadRequest(ErrorDto::json(err.to_string()))
            }
        }
    }
}
