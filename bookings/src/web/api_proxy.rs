use axum::{
    body::Body,
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap},
    response::Response,
};
use tracing::instrument;

use super::{error::WebError, WebState};

/// Request headers forwarded upstream so the API sees the caller's session.
const FORWARDED_HEADERS: [header::HeaderName; 3] =
    [header::COOKIE, header::AUTHORIZATION, header::ACCEPT_LANGUAGE];

pub(crate) fn upstream_url(api_url: &str, path: &str, query: Option<&str>) -> String {
    let api_url = api_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{api_url}/api/{path}?{query}"),
        None => format!("{api_url}/api/{path}"),
    }
}

#[instrument(skip(state, headers))]
pub(crate) async fn proxy(
    State(state): State<WebState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let url = upstream_url(&state.config.api_url, &path, query.as_deref());
    let mut request = state.client.get(&url);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    let response = request.send().await?;
    let status = response.status();
    tracing::debug!(%status, "upstream responded");
    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
    let body = response.bytes().await?;
    let mut builder = Response::builder().status(status);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    Ok(builder.body(Body::from(body))?)
}

#[cfg(test)]
mod tests {
    use super::upstream_url;

    #[test]
    fn builds_upstream_urls() {
        assert_eq!(
            upstream_url("http://localhost:3000", "v1/current_user", None),
            "http://localhost:3000/api/v1/current_user"
        );
        assert_eq!(
            upstream_url("http://localhost:3000/", "/v1/event_types/list_with_team", Some("")),
            "http://localhost:3000/api/v1/event_types/list_with_team"
        );
        assert_eq!(
            upstream_url("http://api", "v1/bookings", Some("eventTypeIds=1,2")),
            "http://api/api/v1/bookings?eventTypeIds=1,2"
        );
    }
}
