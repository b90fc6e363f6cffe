use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::domain::errors::DomainError;

pub const INVALID_EMAIL_MESSAGE: &str = "Only @thapar.edu emails allowed";
pub const INVALID_AMOUNT_MESSAGE: &str = "Invalid amount";

static INSTITUTE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@thapar\.edu$").unwrap());

/// An email address on the institute's domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstituteEmail(String);

impl InstituteEmail {
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw {
            Some(email) if INSTITUTE_EMAIL.is_match(email) => Ok(Self(email.to_string())),
            _ => Err(DomainError::Validation(INVALID_EMAIL_MESSAGE.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstituteEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A strictly positive, finite donation amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DonationAmount(f64);

impl DonationAmount {
    pub fn parse(raw: Option<f64>) -> Result<Self, DomainError> {
        match raw {
            Some(amount) if amount.is_finite() && amount > 0.0 => Ok(Self(amount)),
            _ => Err(DomainError::Validation(INVALID_AMOUNT_MESSAGE.to_string())),
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
