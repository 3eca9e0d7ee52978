const API_URL_VAR: &str = "BOOKINGS_API_URL";
const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Server settings read from the environment. Leptos' own options (site address, pkg dir) come
/// from the `[[workspace.metadata.leptos]]` block or the `LEPTOS_*` variables instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    /// Origin of the bookings API that `/api` requests are forwarded to.
    pub(crate) api_url: String,
}

impl Config {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup(API_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { api_url }
    }
}
