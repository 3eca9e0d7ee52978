pub(crate) mod authentication_state;
pub mod filter_query;
pub mod locale;
