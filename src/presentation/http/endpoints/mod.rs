pub mod auth;
pub mod donations;
pub mod health;
pub mod root;
pub mod uploads;
