use icondata as i;
use leptos::{html::Div, prelude::*};
use leptos_icons::*;

/// A button labelled `prefix` + `text` that opens a panel holding `children` underneath it.
/// The panel closes on Escape, on the button being pressed again, or on a click outside of it.
#[component]
pub fn AnimatedPopover(
    #[prop(into)] text: Signal<String>,
    #[prop(into)] prefix: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let container = NodeRef::<Div>::new();
    #[cfg(feature = "hydrate")]
    let _ = leptos_use::on_click_outside(container, move |_| set_open(false));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            set_open(false);
        }
    };

    view! {
        <div node_ref=container class="relative inline-block" on:keydown=on_keydown>
            <button
                type="button"
                class="flex items-center gap-2 rounded-lg border border-[color:var(--separator-color)] px-3 py-2 text-sm
                bg-[color:var(--surface-color)] hover:bg-[color:var(--surface-color-hover)] transition-colors"
                aria-haspopup="true"
                aria-expanded=move || open().to_string()
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                <span class="text-[color:var(--color-text-muted)]">{prefix}</span>
                <span class="font-medium text-[color:var(--color-text)]">{text}</span>
                <span class="transition-transform duration-200" class:rotate-180=open>
                    <Icon icon=i::AiDownOutlined />
                </span>
            </button>
            {move || {
                open()
                    .then(|| {
                        view! {
                            <div class="absolute left-0 z-40 mt-2 min-w-64 panel rounded-xl shadow-xl animate-fade-in">
                                {children()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
