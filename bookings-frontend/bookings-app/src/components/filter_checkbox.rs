use icondata as i;
use leptos::{ev, html::Input, prelude::*};
use leptos_icons::*;

#[component]
pub fn FilterCheckboxFieldsContainer(children: Children) -> impl IntoView {
    view! { <div class="flex flex-col max-h-96 overflow-y-auto py-1">{children()}</div> }
}

/// A labelled checkbox row. `on_change` receives the new checked state.
///
/// The input is controlled: `checked` is the only source of truth. A click that doesn't change
/// the state leaves the box as `checked` says.
#[component]
pub fn FilterCheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional)] icon: Option<i::Icon>,
    #[prop(into, optional)] id: Option<String>,
) -> impl IntoView {
    let input = NodeRef::<Input>::new();
    let toggle = move |_: ev::Event| {
        let was_checked = checked.get_untracked();
        on_change.run(!was_checked);
        if let Some(input) = input.get_untracked() {
            input.set_checked(checked.get_untracked());
        }
    };
    view! {
        <label class="flex items-center justify-between gap-4 px-4 py-2 cursor-pointer text-sm
            hover:bg-[color:var(--surface-color-hover)] text-[color:var(--color-text)]">
            <span class="flex items-center gap-2 truncate">
                {icon.map(|icon| view! { <Icon icon=icon /> })}
                <span class="truncate">{label}</span>
            </span>
            <input
                node_ref=input
                id=id
                type="checkbox"
                class="h-4 w-4 rounded accent-[color:var(--brand-fg)]"
                prop:checked=checked
                on:change=toggle
            />
        </label>
    }
}

#[component]
pub fn FilterSearchField(
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] set_value: SignalSetter<String>,
) -> impl IntoView {
    view! {
        <div class="relative px-3 py-2">
            <div class="absolute left-5 top-1/2 -translate-y-1/2 text-[color:var(--color-text-muted)]">
                <Icon icon=i::AiSearchOutlined />
            </div>
            <input
                type="text"
                class="input w-full pl-8 text-sm"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn Divider() -> impl IntoView {
    view! { <hr class="my-1 border-[color:var(--separator-color)]" /> }
}
