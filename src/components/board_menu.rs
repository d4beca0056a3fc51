use leptos::*;
use crate::dispatch::Intent;

static SORT_ENTRIES: [(Intent, &str); 3] = [
    (Intent::SortDefault, "Default"),
    (Intent::SortTopRating, "Top Rating"),
    (Intent::SortMostRecent, "Most Recent"),
];

static FILTER_ENTRIES: [(Intent, &str); 4] = [
    (Intent::FilterAtLeast5, "5 Stars"),
    (Intent::FilterAtLeast4_5, "4.5 Stars & Up"),
    (Intent::FilterAtLeast4, "4 Stars & Up"),
    (Intent::FilterAtMost4, "Lower Than 4 Stars"),
];

/// Action names and labels for a menu, in display order.
fn menu_items(entries: &'static [(Intent, &'static str)]) -> Vec<(&'static str, &'static str)> {
    entries
        .iter()
        .filter_map(|(intent, label)| intent.action().map(|action| (action, *label)))
        .collect()
}

/// Sort and filter dropdowns. Each entry reports its action name.
#[component]
pub fn BoardMenu(
    on_action: Callback<String>,
    #[prop(into)] hidden: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="dropdowns" class:hidden=move || hidden.get()>
            <Dropdown label="Sort" kind="sort" items=menu_items(&SORT_ENTRIES) on_action=on_action />
            <Dropdown label="Filter" kind="filter" items=menu_items(&FILTER_ENTRIES) on_action=on_action />
        </div>
    }
}

#[component]
fn Dropdown(
    label: &'static str,
    kind: &'static str,
    items: Vec<(&'static str, &'static str)>,
    on_action: Callback<String>,
) -> impl IntoView {
    let (open, set_open) = create_signal(false);

    view! {
        <div class="dropdown">
            <button
                class=format!("dropdown-btn dropdown-btn-{kind}")
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                {label}
            </button>
            <ul class=format!("dropdown-menu dropdown-menu-{kind}") class:closed=move || !open.get()>
                {items.into_iter().map(|(action, text)| view! {
                    <li>
                        <button class=action on:click=move |_| on_action.call(action.to_string())>
                            {text}
                        </button>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
