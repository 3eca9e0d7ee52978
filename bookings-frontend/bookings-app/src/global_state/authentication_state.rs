use bookings_api_types::user_data::UserData;
use leptos::prelude::*;

use crate::api::get_login;

/// The logged in user, if any. Other resources key off [`AuthenticationState::is_logged_in`].
#[derive(Clone, Copy)]
pub(crate) struct AuthenticationState(pub(crate) Resource<Option<UserData>>);

impl AuthenticationState {
    pub(crate) fn new() -> Self {
        let resource = Resource::new(
            || (),
            |_| {
                let login = get_login();
                async move {
                    login
                        .await
                        .inspect_err(|e| log::info!("no session: {e}"))
                        .ok()
                }
            },
        );
        Self(resource)
    }

    pub(crate) fn is_logged_in(&self) -> Signal<bool> {
        let resource = self.0;
        Signal::derive(move || resource.get().flatten().is_some())
    }
}

pub(crate) fn provide_authentication_context() {
    provide_context(AuthenticationState::new());
}

pub(crate) fn use_authentication() -> AuthenticationState {
    use_context::<AuthenticationState>()
        .expect("AuthenticationState should be provided by the App")
}
