use home_api::{bind_listener, config::Config, errors::StartupError, http::handlers, logging, serve};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    logging::init_logging();

    run()
        .await
        .inspect_err(|err| error!(error = %err, "server terminated"))
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;
    let bind_socket = config.bind_socket()?;
    let listener = bind_listener(bind_socket).await?;

    info!(
        bind_addr = %config.bind_addr,
        bind_port = config.bind_port,
        route = handlers::HOME_PATH,
        "server starting"
    );

    serve(listener, shutdown_signal()).await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal");
}
