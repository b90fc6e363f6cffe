use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{
    Collection, Database, IndexModel,
    bson::{DateTime as BsonDateTime, doc, oid::ObjectId},
    options::{IndexOptions, ReturnDocument},
};
use serde::{Deserialize, Serialize};

use crate::domain::{
    models::{Donation, DonationStatus, NewDonation, User},
    repositories::{DonationRepository, UserRepository},
    value_objects::InstituteEmail,
};

pub const USERS_COLLECTION: &str = "users";
pub const DONATIONS_COLLECTION: &str = "donations";

#[derive(Clone)]
pub struct MongoUserRepository {
    users: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Arc<Self> {
        Arc::new(Self {
            users: db.collection(USERS_COLLECTION),
        })
    }

    /// Creates the unique index that backs the one-user-per-email rule.
    pub async fn ensure_indexes(&self) -> anyhow::Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.users.create_index(index).await?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let record = self.users.find_one(doc! { "email": email }).await?;
        Ok(record.map(User::from))
    }

    async fn upsert_by_email(
        &self,
        email: &InstituteEmail,
        name: Option<&str>,
    ) -> anyhow::Result<User> {
        let mut update = doc! {
            "$setOnInsert": { "createdAt": BsonDateTime::now() },
        };
        if let Some(name) = name {
            update.insert("$set", doc! { "name": name });
        }

        let record = self
            .users
            .find_one_and_update(doc! { "email": email.as_str() }, update)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| anyhow!("upsert for {email} returned no document"))?;

        Ok(record.into())
    }

    async fn count_by_email(&self, email: &str) -> anyhow::Result<u64> {
        Ok(self.users.count_documents(doc! { "email": email }).await?)
    }
}

#[derive(Clone)]
pub struct MongoDonationRepository {
    donations: Collection<DonationDocument>,
}

impl MongoDonationRepository {
    pub fn new(db: &Database) -> Arc<Self> {
        Arc::new(Self {
            donations: db.collection(DONATIONS_COLLECTION),
        })
    }
}

#[async_trait]
impl DonationRepository for MongoDonationRepository {
    async fn insert(&self, donation: NewDonation) -> anyhow::Result<Donation> {
        let record = DonationDocument::from(donation);
        self.donations.insert_one(&record).await?;

        Ok(record.into())
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(self.donations.count_documents(doc! {}).await?)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    email: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "createdAt")]
    created_at: BsonDateTime,
}

impl From<UserDocument> for User {
    fn from(value: UserDocument) -> Self {
        Self {
            id: value.id.to_hex(),
            email: value.email,
            name: value.name,
            created_at: to_chrono(value.created_at),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct DonationDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    amount: f64,
    #[serde(rename = "userEmail", default, skip_serializing_if = "Option::is_none")]
    user_email: Option<String>,
    status: DonationStatus,
    #[serde(rename = "createdAt")]
    created_at: BsonDateTime,
}

impl From<NewDonation> for DonationDocument {
    fn from(value: NewDonation) -> Self {
        Self {
            id: ObjectId::new(),
            amount: value.amount.value(),
            user_email: value.user_email,
            status: value.status,
            created_at: to_bson(value.created_at),
        }
    }
}

impl From<DonationDocument> for Donation {
    fn from(value: DonationDocument) -> Self {
        Self {
            id: value.id.to_hex(),
            amount: value.amount,
            user_email: value.user_email,
            status: value.status,
            created_at: to_chrono(value.created_at),
        }
    }
}

fn to_bson(value: DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_millis(value.timestamp_millis())
}

fn to_chrono(value: BsonDateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}
