use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    models::{Donation, NewDonation, User},
    repositories::{DonationRepository, UserRepository},
    value_objects::InstituteEmail,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn upsert_by_email(
        &self,
        email: &InstituteEmail,
        name: Option<&str>,
    ) -> anyhow::Result<User> {
        let mut users = self.users.write().await;
        let user = users
            .entry(email.as_str().to_string())
            .or_insert_with(|| User {
                id: Uuid::new_v4().simple().to_string(),
                email: email.as_str().to_string(),
                name: None,
                created_at: Utc::now(),
            });

        if let Some(name) = name {
            user.name = Some(name.to_string());
        }
        Ok(user.clone())
    }

    async fn count_by_email(&self, email: &str) -> anyhow::Result<u64> {
        let users = self.users.read().await;
        Ok(users.values().filter(|u| u.email == email).count() as u64)
    }
}

#[derive(Default)]
pub struct InMemoryDonationRepository {
    donations: Arc<RwLock<HashMap<String, Donation>>>,
}

impl InMemoryDonationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Donation> {
        let donations = self.donations.read().await;
        donations.values().cloned().collect()
    }
}

#[async_trait]
impl DonationRepository for InMemoryDonationRepository {
    async fn insert(&self, donation: NewDonation) -> anyhow::Result<Donation> {
        let entry = Donation::from_new(Uuid::new_v4().simple().to_string(), donation);
        let mut donations = self.donations.write().await;
        donations.insert(entry.id.clone(), entry.clone());
        Ok(entry)
    }

    async fn count(&self) -> anyhow::Result<u64> {
        let donations = self.donations.read().await;
        Ok(donations.len() as u64)
    }
}
