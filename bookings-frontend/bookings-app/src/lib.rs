pub mod api;
pub mod components;
pub(crate) mod error;
pub mod event_type_groups;
pub mod global_state;
pub mod routes;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::{
    global_state::{
        authentication_state::provide_authentication_context,
        locale::{provide_locale_context, Locale},
    },
    routes::{bookings::BookingsPage, not_found::NotFound},
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_locale_context(Locale::default());
    provide_authentication_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/bookings.css" />
        <Title text="Bookings" />
        <Router>
            <main class="min-h-screen bg-[color:var(--color-background)]">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=BookingsPage />
                    <Route path=path!("/bookings") view=BookingsPage />
                    <Route path=path!("/bookings/:status") view=BookingsPage />
                </Routes>
            </main>
        </Router>
    }
}
