use std::{env::var, path::PathBuf};

use dotenvy::dotenv;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Origins permitted to make cross-origin requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parses a comma-separated allow-list. An empty list or a `*` entry
    /// permits every origin.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }
}

pub struct Config {
    pub mongodb_uri: String,
    pub mongodb_database: Option<String>,
    pub host: String,
    pub port: u16,
    pub allow_origin: AllowedOrigins,
    pub upload_dir: PathBuf,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Self::from_lookup(|key| var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Config, &'static str> {
        let mongodb_uri = lookup("MONGODB_URI")
            .filter(|uri| !uri.is_empty())
            .ok_or("Missing MONGODB_URI env var")?;

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            mongodb_uri,
            mongodb_database: lookup("MONGODB_DATABASE").filter(|name| !name.is_empty()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            allow_origin: lookup("ALLOW_ORIGIN")
                .map(|raw| AllowedOrigins::parse(&raw))
                .unwrap_or(AllowedOrigins::Any),
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
