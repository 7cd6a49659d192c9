//! Main entry point for the ConfOps backend.
//!
//! This file loads configuration, sets up logging, reads the user directory, and starts
//! the Axum web server with the session and navigation state it serves.

use clap::Parser;
use confops_adapters::{DirectoryAdapter, JsonFileDirectory, SeedDirectory};
use confops_backend::api;
use confops_backend::auth::{Identity, Session};
use confops_backend::config::{Args, Config};
use confops_backend::errors::AppError;
use confops_backend::services::navigation::NavigationStack;
use confops_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load(Args::parse())?;

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .init();

    run(config).await?;
    Ok(())
}

async fn run(config: Config) -> Result<(), AppError> {
    let directory: Box<dyn DirectoryAdapter> = match &config.users {
        Some(path) => {
            let directory = JsonFileDirectory::new(path);
            tracing::info!(path = %directory.path().display(), "reading user directory file");
            Box::new(directory)
        }
        None => Box::new(SeedDirectory::new()),
    };
    let records = directory.load().await?;
    tracing::info!(directory = directory.name(), users = records.len(), "loaded user directory");

    let mut session = Session::new(records.into_iter().map(Identity::from));
    if !session.switch_user(&config.default_user) {
        tracing::warn!(
            id = %config.default_user,
            "default user not in directory, starting signed out"
        );
    }

    let state = AppState::new(session, NavigationStack::new(config.history_limit));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "listening");
    axum::serve(listener, api::app(state)).await?;
    Ok(())
}
