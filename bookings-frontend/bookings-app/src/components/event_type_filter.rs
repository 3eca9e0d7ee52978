use icondata as i;
use leptos::prelude::*;

use crate::{
    api::get_event_types_with_team,
    components::{
        filter_checkbox::{
            Divider, FilterCheckboxField, FilterCheckboxFieldsContainer, FilterSearchField,
        },
        popover::AnimatedPopover,
    },
    event_type_groups::{
        all_option_request, derive_filter_view, group_header, summary_text, toggle_request,
        FilterContent, GroupedEventTypes,
    },
    global_state::{
        authentication_state::use_authentication,
        filter_query::{FilterQueryStore, EVENT_TYPE_IDS},
        locale::use_locale,
    },
};

/// Popover filtering the bookings view by event type. Renders nothing until the user's event
/// types have loaded.
#[component]
pub fn EventTypeFilter() -> impl IntoView {
    let locale = use_locale();
    let logged_in = use_authentication().is_logged_in();
    let store = FilterQueryStore::new(EVENT_TYPE_IDS);
    let selection = store.selection();
    let (search, set_search) = signal(String::new());

    let event_types = Resource::new(
        move || logged_in.get(),
        |logged_in| {
            // only ask for event types once there is a session to ask with
            let request = logged_in.then(get_event_types_with_team);
            async move {
                match request {
                    Some(request) => request
                        .await
                        .inspect_err(|e| log::error!("unable to load event types: {e}"))
                        .ok(),
                    None => None,
                }
            }
        },
    );

    let summary = Signal::derive(move || summary_text(&selection.get(), locale));
    let prefix = format!("{}: ", locale.t("event_type"));

    view! {
        <Suspense fallback=|| ()>
            {move || {
                let event_types = event_types.get().flatten();
                match FilterContent::new(event_types.as_deref()) {
                    FilterContent::Loading => None,
                    FilterContent::Empty => Some(
                        view! {
                            <AnimatedPopover text=summary prefix=prefix.clone()>
                                <h2 class="px-4 py-2 text-sm font-medium text-[color:var(--color-text)]">
                                    {locale.t("no_options_available")}
                                </h2>
                            </AnimatedPopover>
                        }
                        .into_any(),
                    ),
                    FilterContent::Options(grouped) => Some(
                        view! {
                            <AnimatedPopover text=summary prefix=prefix.clone()>
                                <EventTypeOptions
                                    grouped=grouped.clone()
                                    store=store
                                    search=search
                                    set_search=set_search
                                />
                            </AnimatedPopover>
                        }
                        .into_any(),
                    ),
                }
            }}
        </Suspense>
    }
}

#[component]
fn EventTypeOptions(
    grouped: GroupedEventTypes,
    store: FilterQueryStore,
    search: ReadSignal<String>,
    set_search: WriteSignal<String>,
) -> impl IntoView {
    let locale = use_locale();
    let selection = store.selection();
    let filter_view = Memo::new(move |_| {
        selection.with(|selection| {
            search.with(|search| derive_filter_view(&grouped, search, selection))
        })
    });
    let all_checked = Signal::derive(move || filter_view.with(|view| view.all_checked));

    view! {
        <FilterCheckboxFieldsContainer>
            <FilterSearchField placeholder=locale.t("search") value=search set_value=set_search />
            <FilterCheckboxField
                id="all"
                icon=i::AiLinkOutlined
                checked=all_checked
                on_change=Callback::new(move |_| store.dispatch(all_option_request()))
                label=locale.t("all_event_types_filter_label")
            />
            <Divider />
            {move || {
                filter_view
                    .get()
                    .groups
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="px-4 py-2 text-xs font-medium uppercase leading-none text-[color:var(--color-text-muted)]">
                                {group_header(&group.key, locale)}
                            </div>
                            {group
                                .options
                                .into_iter()
                                .map(|option| {
                                    let id = option.id;
                                    view! {
                                        <FilterCheckboxField
                                            checked=option.checked
                                            on_change=Callback::new(move |checked| {
                                                store.dispatch(toggle_request(EVENT_TYPE_IDS, id, checked))
                                            })
                                            label=option.title
                                        />
                                    }
                                })
                                .collect_view()}
                        }
                    })
                    .collect_view()
            }}
        </FilterCheckboxFieldsContainer>
    }
}
