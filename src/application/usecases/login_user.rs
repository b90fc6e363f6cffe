use std::sync::Arc;

use crate::domain::{errors::DomainError, models::User, repositories::UserRepository};

pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Identity lookup only: there is no password or token involved.
pub struct LoginUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

pub struct LoginRequest {
    pub email: Option<String>,
}

impl LoginUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, request: LoginRequest) -> Result<User, DomainError> {
        let Some(email) = request.email else {
            return Err(DomainError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()));
        };

        self.user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| DomainError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::value_objects::InstituteEmail,
        infrastructure::repositories::in_memory::InMemoryUserRepository,
    };

    #[tokio::test]
    async fn returns_registered_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let email = InstituteEmail::parse(Some("a@thapar.edu")).unwrap();
        let stored = repo.upsert_by_email(&email, Some("A")).await.unwrap();

        let usecase = LoginUserUseCase::new(repo);
        let user = usecase
            .execute(LoginRequest {
                email: Some("a@thapar.edu".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(user, stored);
    }

    #[tokio::test]
    async fn unknown_or_missing_email_is_not_found() {
        let usecase = LoginUserUseCase::new(Arc::new(InMemoryUserRepository::new()));

        for email in [Some("ghost@thapar.edu".to_string()), None] {
            let err = usecase.execute(LoginRequest { email }).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound(_)));
            assert_eq!(err.to_string(), USER_NOT_FOUND_MESSAGE);
        }
    }
}
