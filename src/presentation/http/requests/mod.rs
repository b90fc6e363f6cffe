use poem_openapi::{
    ApiRequest, Object,
    payload::{Form, Json},
};
use serde::Deserialize;
use serde_json::Value;

/// Multipart field the upload endpoint reads file parts from.
pub const UPLOAD_FIELD: &str = "files";

#[derive(Object, Deserialize, Debug)]
pub struct RegisterRequestDto {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Object, Deserialize, Debug)]
pub struct LoginRequestDto {
    pub email: Option<String>,
}

#[derive(Object, Deserialize, Debug)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct DonateRequestDto {
    /// A number, or a string holding one.
    pub amount: Option<Value>,
    pub user_email: Option<String>,
}

impl DonateRequestDto {
    /// Numeric reading of `amount`. Anything that is not a number or a
    /// numeric string reads as absent.
    pub fn numeric_amount(&self) -> Option<f64> {
        match self.amount.as_ref()? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

/// Bodies are accepted as JSON or as an urlencoded form.
#[derive(ApiRequest)]
pub enum RegisterPayload {
    Json(Json<RegisterRequestDto>),
    Form(Form<RegisterRequestDto>),
}

impl RegisterPayload {
    pub fn into_inner(self) -> RegisterRequestDto {
        match self {
            RegisterPayload::Json(Json(dto)) => dto,
            RegisterPayload::Form(Form(dto)) => dto,
        }
    }
}

#[derive(ApiRequest)]
pub enum LoginPayload {
    Json(Json<LoginRequestDto>),
    Form(Form<LoginRequestDto>),
}

impl LoginPayload {
    pub fn into_inner(self) -> LoginRequestDto {
        match self {
            LoginPayload::Json(Json(dto)) => dto,
            LoginPayload::Form(Form(dto)) => dto,
        }
    }
}

#[derive(ApiRequest)]
pub enum DonatePayload {
    Json(Json<DonateRequestDto>),
    Form(Form<DonateRequestDto>),
}

impl DonatePayload {
    pub fn into_inner(self) -> DonateRequestDto {
        match self {
            DonatePayload::Json(Json(dto)) => dto,
            DonatePayload::Form(Form(dto)) => dto,
        }
    }
}
