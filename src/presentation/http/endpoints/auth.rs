use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};
use tracing::warn;

use crate::{
    application::usecases::{login_user::LoginRequest, register_user::RegisterRequest},
    domain::errors::DomainError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_user,
        requests::{LoginPayload, RegisterPayload},
        responses::{ErrorDto, LoginResponse, RegisterResponse, UserEnvelopeDto},
    },
};

#[derive(Clone)]
pub struct AuthEndpoints {
    state: Arc<ApiState>,
}

impl AuthEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl AuthEndpoints {
    /// Creates the user for an institute email, or updates its name.
    #[oai(path = "/api/register", method = "post", tag = EndpointsTags::Auth)]
    pub async fn register(&self, request: RegisterPayload) -> RegisterResponse {
        let request = request.into_inner();
        let payload = RegisterRequest {
            email: request.email,
            name: request.name,
        };

        match self.state.register_usecase.execute(payload).await {
            Ok(user) => RegisterResponse::Created(Json(UserEnvelopeDto {
                ok: true,
                user: map_user(&user),
            })),
            Err(err) => {
                log_failure("register", &err);
                RegisterResponse::BadRequest(ErrorDto::json(err.to_string()))
            }
        }
    }

    /// Looks a user up by email. No credentials are checked.
    #[oai(path = "/api/login", method = "post", tag = EndpointsTags::Auth)]
    pub async fn login(&self, request: LoginPayload) -> LoginResponse {
        let payload = LoginRequest {
            email: request.into_inner().email,
        };

        match self.state.login_usecase.execute(payload).await {
            Ok(user) => LoginResponse::Ok(Json(UserEnvelopeDto {
                ok: true,
                user: map_user(&user),
            })),
            Err(err @ DomainError::NotFound(_)) => {
                LoginResponse::NotFound(ErrorDto::json(err.to_string()))
            }
            Err(err) => {
                log_failure("login", &err);
                LoginResponse::BadRequest(ErrorDto::json(err.to_string()))
            }
        }
    }
}

fn log_failure(operation: &str, err: &DomainError) {
    if let DomainError::Other(source) = err {
        warn!(operation, error = %source, "database operation failed");
    }
}
