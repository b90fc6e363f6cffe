use poem_openapi::Enum;

use crate::domain::models::DonationStatus;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum DonationStatusDto {
    #[oai(rename = "created")]
    Created,
    #[oai(rename = "success")]
    Success,
}

impl From<DonationStatus> for DonationStatusDto {
    fn from(value: DonationStatus) -> Self {
        match value {
            DonationStatus::Created => DonationStatusDto::Created,
            DonationStatus::Success => DonationStatusDto::Success,
        }
    }
}
