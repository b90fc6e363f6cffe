use std::sync::Arc;

use crate::domain::{
    errors::DomainError, models::User, repositories::UserRepository,
    value_objects::InstituteEmail,
};

pub struct RegisterUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

pub struct RegisterRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl RegisterUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, request: RegisterRequest) -> Result<User, DomainError> {
        let email = InstituteEmail::parse(request.email.as_deref())?;
        let user = self
            .user_repo
            .upsert_by_email(&email, request.name.as_deref())
            .await?;

        tracing::debug!(email = %email, user_id = %user.id, "user registered");
        Ok(user)
    }
}
