mod config;
mod leptos_app;
mod web;

use anyhow::Result;
use tracing::info;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = Config::from_env();
    info!(api_url = %config.api_url, "bookings ui starting");
    web::start_web(config).await
}
