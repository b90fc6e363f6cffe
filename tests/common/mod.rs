#![allow(dead_code)]

use std::sync::Arc;

use poem::{endpoint::BoxEndpoint, test::TestClient};
use tempfile::TempDir;
use thapar_backend::{
    ApiState,
    application::services::payment::OptimisticPaymentGateway,
    build_app,
    config::AllowedOrigins,
    infrastructure::{
        repositories::in_memory::{InMemoryDonationRepository, InMemoryUserRepository},
        storage::LocalDiskStore,
    },
};

pub struct TestApp {
    pub client: TestClient<BoxEndpoint<'static>>,
    pub users: Arc<InMemoryUserRepository>,
    pub donations: Arc<InMemoryDonationRepository>,
    pub upload_dir: TempDir,
}

pub fn test_app() -> TestApp {
    test_app_with_origins(AllowedOrigins::Any)
}

pub fn test_app_with_origins(origins: AllowedOrigins) -> TestApp {
    let users = Arc::new(InMemoryUserRepository::new());
    let donations = Arc::new(InMemoryDonationRepository::new());
    let upload_dir = tempfile::tempdir().unwrap();

    let state = Arc::new(ApiState::new(
        users.clone(),
        donations.clone(),
        Arc::new(OptimisticPaymentGateway::new()),
        Arc::new(LocalDiskStore::new(upload_dir.path())),
    ));

    TestApp {
        client: TestClient::new(build_app(state, &origins)),
        users,
        donations,
        upload_dir,
    }
}

impl TestApp {
    pub fn stored_upload_count(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path()).unwrap().count()
    }
}
