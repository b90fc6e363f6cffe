use crate::{
    domain::models::{Donation, StoredFile, User},
    presentation::http::responses::{DonationDto, StoredFileDto, UserDto},
};

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: user.id.clone(),
        email: user.email.clone(),
        name: user.name.clone(),
        created_at: user.created_at.to_rfc3339(),
    }
}

pub fn map_donation(donation: &Donation) -> DonationDto {
    DonationDto {
        id: donation.id.clone(),
        amount: donation.amount,
        user_email: donation.user_email.clone(),
        status: donation.status.into(),
        created_at: donation.created_at.to_rfc3339(),
    }
}

pub fn map_stored_file(file: &StoredFile) -> StoredFileDto {
    StoredFileDto {
        original: file.original_name.clone(),
        saved_as: file.saved_as.clone(),
    }
}
