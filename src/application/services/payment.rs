use async_trait::async_trait;

use crate::domain::models::{DonationStatus, NewDonation};

/// Confirms the money movement behind a donation before it is recorded.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn confirm(&self, donation: &NewDonation) -> anyhow::Result<DonationStatus>;
}

/// Stand-in used until a real payment provider is wired in: every donation is
/// reported as successful without contacting anyone.
#[derive(Debug, Default, Clone)]
pub struct OptimisticPaymentGateway;

impl OptimisticPaymentGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentGateway for OptimisticPaymentGateway {
    async fn confirm(&self, _donation: &NewDonation) -> anyhow::Result<DonationStatus> {
        Ok(DonationStatus::Success)
    }
}
