use std::sync::Arc;

use crate::{
    application::services::payment::PaymentGateway,
    domain::{
        errors::DomainError,
        models::{Donation, NewDonation},
        repositories::DonationRepository,
        value_objects::DonationAmount,
    },
};

pub struct CreateDonationUseCase {
    donation_repo: Arc<dyn DonationRepository>,
    payments: Arc<dyn PaymentGateway>,
}

pub struct DonationRequest {
    pub amount: Option<f64>,
    pub user_email: Option<String>,
}

impl CreateDonationUseCase {
    pub fn new(
        donation_repo: Arc<dyn DonationRepository>,
        payments: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            donation_repo,
            payments,
        }
    }

    pub async fn execute(&self, request: DonationRequest) -> Result<Donation, DomainError> {
        let amount = DonationAmount::parse(request.amount)?;
        let pending = NewDonation::new(amount, request.user_email);

        let status = self.payments.confirm(&pending).await?;
        let donation = self.donation_repo.insert(pending.with_status(status)).await?;

        tracing::info!(
            donation_id = %donation.id,
            amount = donation.amount,
            status = donation.status.as_str(),
            "donation recorded"
        );
        Ok(donation)
    }
}
