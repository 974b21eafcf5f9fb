mod config;
mod routes;

use config::Config;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "provisionhub failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    config::load_dotenv();
    let config = Config::from_env()?;
    tracing::info!(env = %config.env, "config loaded");

    let app = routes::app().map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;

    tracing::info!(port = config.port, "provisionhub listening");
    axum::serve(listener, app).await?;
    Ok(())
}
