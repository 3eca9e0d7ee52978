//! Bookings UI server routes: server renders `App` and serves the wasm bundle built by cargo-leptos.
use axum::Router;
use bookings_app::{api::ApiOrigin, shell, App};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::services::ServeDir;

use crate::web::WebState;

pub(crate) fn create_leptos_app(state: &WebState) -> Router<WebState> {
    let leptos_options = &state.leptos_options;
    let site_root = &leptos_options.site_root;
    let pkg_dir = &leptos_options.site_pkg_dir;

    // The URL path of the generated JS/WASM bundle from cargo-leptos
    let bundle_path = format!("/{pkg_dir}");
    // The filesystem path of the generated JS/WASM bundle from cargo-leptos
    let bundle_filepath = format!("./{site_root}/{pkg_dir}");
    tracing::info!("Serving pkg dir: {bundle_filepath}");

    let routes = generate_route_list(App);
    let api_origin = ApiOrigin(state.config.api_url.clone());
    let shell_options = leptos_options.clone();

    Router::new()
        .nest_service(&bundle_path, ServeDir::new(&bundle_filepath))
        .leptos_routes_with_context(
            state,
            routes,
            move || provide_context(api_origin.clone()),
            move || shell(shell_options.clone()),
        )
}
