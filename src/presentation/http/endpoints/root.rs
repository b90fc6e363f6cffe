use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::{
    services::{file_store::FileStore, payment::PaymentGateway},
    usecases::{
        create_donation::CreateDonationUseCase, login_user::LoginUserUseCase,
        register_user::RegisterUserUseCase, upload_files::UploadFilesUseCase,
    },
};
use crate::domain::repositories::{DonationRepository, UserRepository};

#[derive(Clone)]
pub struct ApiState {
    pub register_usecase: Arc<RegisterUserUseCase>,
    pub login_usecase: Arc<LoginUserUseCase>,
    pub upload_usecase: Arc<UploadFilesUseCase>,
    pub donation_usecase: Arc<CreateDonationUseCase>,
}

impl ApiState {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        donation_repo: Arc<dyn DonationRepository>,
        payments: Arc<dyn PaymentGateway>,
        file_store: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            register_usecase: Arc::new(RegisterUserUseCase::new(user_repo.clone())),
            login_usecase: Arc::new(LoginUserUseCase::new(user_repo)),
            upload_usecase: Arc::new(UploadFilesUseCase::new(file_store)),
            donation_usecase: Arc::new(CreateDonationUseCase::new(donation_repo, payments)),
        }
    }
}

/// Liveness endpoints; they carry no state.
pub struct Endpoints;

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Auth,
    Uploads,
    Donations,
}
