mod bot;
mod config;
mod error;
mod model;
mod service;
mod state;
mod util;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::service::catalog::EquipCatalog;
use crate::service::session::SessionRegistry;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let catalog = EquipCatalog::builtin();
    tracing::info!("Loaded {} equips", catalog.len());

    let state = AppState::new(catalog, SessionRegistry::new(), &config);

    bot::start::start_bot(&config, state).await
}
