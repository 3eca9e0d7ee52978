pub(crate) mod api_proxy;
pub(crate) mod error;

use std::sync::Arc;

use axum::{extract::FromRef, http::StatusCode, routing::get, Router};
use leptos::config::{get_configuration, LeptosOptions};

use crate::{config::Config, leptos_app::create_leptos_app};

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) config: Arc<Config>,
    pub(crate) client: reqwest::Client,
    pub(crate) leptos_options: LeptosOptions,
}

impl FromRef<WebState> for LeptosOptions {
    fn from_ref(input: &WebState) -> Self {
        input.leptos_options.clone()
    }
}

pub(crate) async fn start_web(config: Config) -> anyhow::Result<()> {
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let state = WebState {
        config: Arc::new(config),
        client: reqwest::Client::new(),
        leptos_options,
    };
    let app = Router::new()
        .route("/api/{*path}", get(api_proxy::proxy))
        .merge(create_leptos_app(&state))
        .fallback(fallback)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
