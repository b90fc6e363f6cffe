use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DonationAmount;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    #[default]
    Created,
    Success,
}

impl DonationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Created => "created",
            DonationStatus::Success => "success",
        }
    }
}

/// A donation that has passed validation but is not persisted yet.
#[derive(Debug, Clone)]
pub struct NewDonation {
    pub amount: DonationAmount,
    pub user_email: Option<String>,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
}

impl NewDonation {
    pub fn new(amount: DonationAmount, user_email: Option<String>) -> Self {
        Self {
            amount,
            user_email,
            status: DonationStatus::default(),
            created_at: Utc::now(),
        }
    }

    pub fn with_status(mut self, status: DonationStatus) -> Self {
        self.status = status;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Donation {
    pub id: String,
    pub amount: f64,
    pub user_email: Option<String>,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
}

impl Donation {
    pub fn from_new(id: String, donation: NewDonation) -> Self {
        Self {
            id,
            amount: donation.amount.value(),
            user_email: donation.user_email,
            status: donation.status,
            created_at: donation.created_at,
        }
    }
}
