use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-2 p-12 text-[color:var(--color-text-muted)]">
            <h1 class="text-3xl font-bold text-[color:var(--color-text)]">"404"</h1>
            <p>"This page doesn't exist."</p>
            <a class="underline" href="/bookings">"Back to bookings"</a>
        </div>
    }
}
