pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod telemetry;

pub use presentation::http::{build_app, endpoints::root::ApiState};
