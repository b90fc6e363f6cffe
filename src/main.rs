use std::{process::ExitCode, sync::Arc, time::Duration};

use poem::{Server, listener::TcpListener};
use tokio::{main, signal};
use tracing::{error, info};

use thapar_backend::{
    ApiState,
    application::services::payment::OptimisticPaymentGateway,
    build_app,
    config::Config,
    infrastructure::{
        database,
        repositories::mongo::{MongoDonationRepository, MongoUserRepository},
        storage::LocalDiskStore,
    },
    telemetry,
};

#[main]
async fn main() -> ExitCode {
    telemetry::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::try_parse().map_err(anyhow::Error::msg)?;

    let db = database::connect(&config.mongodb_uri, config.mongodb_database.as_deref()).await?;

    let user_repo = MongoUserRepository::new(&db);
    user_repo.ensure_indexes().await?;
    let donation_repo = MongoDonationRepository::new(&db);

    let file_store = LocalDiskStore::new(&config.upload_dir);
    file_store.ensure_root().await?;

    let state = Arc::new(ApiState::new(
        user_repo,
        donation_repo,
        Arc::new(OptimisticPaymentGateway::new()),
        Arc::new(file_store),
    ));
    let app = build_app(state, &config.allow_origin);

    let address = config.bind_address();
    info!("Backend running on {address}");

    Server::new(TcpListener::bind(address))
        .run_with_graceful_shutdown(app, shutdown_signal(), Some(Duration::from_secs(10)))
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(err) => {
                error!("failed to install Ctrl+C handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                error!("failed to install terminate handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
