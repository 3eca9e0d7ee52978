use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::event_type_filter::EventTypeFilter;

#[component]
pub fn BookingsPage() -> impl IntoView {
    let params = use_params_map();
    let status = move || {
        params
            .with(|p| p.get("status"))
            .unwrap_or_else(|| "upcoming".to_string())
    };
    view! {
        <Title text=move || format!("Bookings - {}", status()) />
        <div class="flex flex-col gap-4 p-6">
            <h1 class="text-2xl font-bold capitalize text-[color:var(--color-text)]">{status}</h1>
            <div class="flex flex-row flex-wrap items-center gap-2">
                <EventTypeFilter />
            </div>
        </div>
    }
}
