use anyhow::Context;
use mongodb::{Client, Database, bson::doc};
use tracing::info;

/// Database used when neither the configuration nor the URI names one.
pub const DEFAULT_DATABASE: &str = "test";

/// Opens the shared client and makes sure the server answers before any
/// traffic is accepted.
pub async fn connect(uri: &str, database: Option<&str>) -> anyhow::Result<Database> {
    let client = Client::with_uri_str(uri)
        .await
        .context("failed to parse MongoDB connection string")?;

    let db = match database {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
    };

    db.run_command(doc! { "ping": 1 })
        .await
        .context("failed to reach MongoDB")?;

    info!(database = db.name(), "MongoDB connected");
    Ok(db)
}
