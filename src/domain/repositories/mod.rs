use async_trait::async_trait;

use crate::domain::{
    models::{Donation, NewDonation, User},
    value_objects::InstituteEmail,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    /// Creates the user if no record exists for `email`, otherwise updates it.
    /// `name` is only written when present; `created_at` only on insert.
    async fn upsert_by_email(
        &self,
        email: &InstituteEmail,
        name: Option<&str>,
    ) -> anyhow::Result<User>;

    async fn count_by_email(&self, email: &str) -> anyhow::Result<u64>;
}

#[async_trait]
pub trait DonationRepository: Send + Sync {
    async fn insert(&self, donation: NewDonation) -> anyhow::Result<Donation>;

    async fn count(&self) -> anyhow::Result<u64>;
}
