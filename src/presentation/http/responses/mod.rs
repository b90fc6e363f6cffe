use poem_openapi::{ApiResponse, Object, payload::Json};

use crate::presentation::models::DonationStatusDto;

#[derive(Object)]
pub struct ErrorDto {
    pub error: String,
}

impl ErrorDto {
    pub fn json(message: impl Into<String>) -> Json<ErrorDto> {
        Json(ErrorDto {
            error: message.into(),
        })
    }
}

#[derive(Object)]
pub struct HealthDto {
    pub ok: bool,
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub created_at: String,
}

#[derive(Object)]
pub struct UserEnvelopeDto {
    pub ok: bool,
    pub user: UserDto,
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct DonationDto {
    pub id: String,
    pub amount: f64,
    pub user_email: Option<String>,
    pub status: DonationStatusDto,
    pub created_at: String,
}

#[derive(Object)]
pub struct DonationEnvelopeDto {
    pub ok: bool,
    pub donation: DonationDto,
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct StoredFileDto {
    pub original: String,
    pub saved_as: String,
}

#[derive(Object)]
pub struct UploadEnvelopeDto {
    pub ok: bool,
    pub files: Vec<StoredFileDto>,
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "register_bad_request")]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<UserEnvelopeDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
}

fn register_bad_request(err: poem::Error) -> RegisterResponse {
    RegisterResponse::BadRequest(ErrorDto::json(err.to_string()))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "login_bad_request")]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<UserEnvelopeDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),
}

fn login_bad_request(err: poem::Error) -> LoginResponse {
    LoginResponse::BadRequest(ErrorDto::json(err.to_string()))
}

#[derive(ApiResponse)]
pub enum UploadResponse {
    #[oai(status = 200)]
    Ok(Json<UploadEnvelopeDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "donate_bad_request")]
pub enum DonateResponse {
    #[oai(status = 200)]
    Ok(Json<DonationEnvelopeDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
}

fn donate_bad_request(err: poem::Error) -> DonateResponse {
    DonateResponse::BadRequest(ErrorDto::json(err.to_string()))
}
