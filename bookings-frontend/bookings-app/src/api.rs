use std::future::Future;

use bookings_api_types::{user_data::UserData, EventType};
use serde::de::DeserializeOwned;

use crate::error::AppResult;

/// Origin used to reach the bookings API while rendering on the server.
/// Provided by the server through context, the browser always uses relative paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOrigin(pub String);

/// This is okay because the client will send our login cookie
pub(crate) fn get_login() -> impl Future<Output = AppResult<UserData>> + Send + 'static {
    fetch_api("/api/v1/current_user")
}

pub(crate) fn get_event_types_with_team(
) -> impl Future<Output = AppResult<Vec<EventType>>> + Send + 'static {
    fetch_api("/api/v1/event_types/list_with_team")
}

#[cfg(not(feature = "ssr"))]
pub(crate) fn fetch_api<T>(path: &str) -> impl Future<Output = AppResult<T>> + Send + 'static
where
    T: DeserializeOwned + 'static,
{
    use crate::error::AppError;
    use leptos::prelude::on_cleanup;
    use send_wrapper::SendWrapper;

    let path = path.to_string();
    let abort_controller = web_sys::AbortController::new().ok();
    let abort_signal = abort_controller.as_ref().map(|a| a.signal());

    // abort in-flight requests if the owner is disposed
    // i.e., if we've navigated away from this page
    let cleanup_controller = SendWrapper::new(abort_controller);
    on_cleanup(move || {
        if let Some(abort_controller) = cleanup_controller.take() {
            abort_controller.abort()
        }
    });

    SendWrapper::new(async move {
        let response = gloo_net::http::Request::get(&path)
            .abort_signal(abort_signal.as_ref())
            .send()
            .await
            .inspect_err(|e| log::error!("{path} {e}"))?;
        if !response.ok() {
            return Err(AppError::BadStatus {
                path,
                status: response.status(),
            });
        }
        let json = response.text().await?;
        serde_json::from_str(&json).map_err(|e| {
            log::error!("{e} {path} returned: json text {json}");
            AppError::from(e)
        })
    })
}

#[cfg(feature = "ssr")]
pub(crate) fn fetch_api<T>(path: &str) -> impl Future<Output = AppResult<T>> + Send + 'static
where
    T: DeserializeOwned + 'static,
{
    use crate::error::AppError;
    use axum::http::request::Parts;
    use leptos::prelude::use_context;
    use reqwest::header::ACCEPT_ENCODING;

    // use the original headers of the request so the session cookie is forwarded
    let headers = use_context::<Parts>().map(|parts| parts.headers);
    let origin = use_context::<ApiOrigin>();
    let path = path.to_string();
    async move {
        let (Some(mut headers), Some(ApiOrigin(origin))) = (headers, origin) else {
            log::error!("no request context for {path}");
            return Err(AppError::MissingRequestContext);
        };
        let url = format!("{}{path}", origin.trim_end_matches('/'));
        headers.remove(ACCEPT_ENCODING);
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .inspect_err(|e| log::error!("Response {e}. {url}"))?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::BadStatus {
                path,
                status: status.as_u16(),
            });
        }
        let json = response.text().await?;
        serde_json::from_str(&json).map_err(|e| {
            log::error!("{e} {url} returned: json text {json}");
            AppError::from(e)
        })
    }
}
