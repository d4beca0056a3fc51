/// Main application entry point for the review board.
/// Owns the review store and turns UI events into dispatched intents.
use chrono::Locale;
use leptos::*;
use leptos::logging::{error, log};
use leptos_meta::*;
use wasm_bindgen_futures::spawn_local;
use crate::api::fetch_country_flag;
use crate::components::{
    board_menu::BoardMenu,
    rating_summary::{RatingBreakdown, RatingSummary},
    review_form::{FormPanel, ReviewForm},
    reviews_list::ReviewsList,
};
use crate::config::BoardConfig;
use crate::dispatch::{dispatch, dispatch_action, Intent, Outcome};
use crate::models::review::ReviewDraft;
use crate::storage::{BrowserStorage, KeyValueStorage, MemoryStorage};
use crate::store::{ReviewStore, SystemClock};
use crate::utils::dates::{locale_from_tag, DEFAULT_LOCALE};

type BoardStore = ReviewStore<Box<dyn KeyValueStorage>, SystemClock>;

fn open_store(config: BoardConfig) -> BoardStore {
    let storage: Box<dyn KeyValueStorage> = match BrowserStorage::new() {
        Ok(storage) => Box::new(storage),
        Err(err) => {
            error!("[APP] Local storage unavailable, reviews will not be saved: {}", err);
            Box::new(MemoryStorage::new())
        }
    };
    let mut store = ReviewStore::new(storage, SystemClock, config);
    store.load();
    store
}

// The browser's preferred language, or the default outside a browser.
fn browser_locale() -> Locale {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .map(|tag| locale_from_tag(&tag))
        .unwrap_or(DEFAULT_LOCALE)
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = BoardConfig::default()
        .with_locale(browser_locale())
        .with_geolocation_key(option_env!("REVIEWBOARD_GEO_API_KEY").map(str::to_string));

    let store = store_value(open_store(config));
    let placeholder_name = store.with_value(|s| s.config().placeholder_name.clone());
    let locale = store.with_value(|s| s.config().locale);
    let geolocation = store.with_value(|s| s.config().geolocation.clone());

    let (visible, set_visible) = create_signal(store.with_value(|s| s.all().to_vec()));
    let (stats, set_stats) = create_signal(store.with_value(|s| s.stats().clone()));
    let panel = create_rw_signal(FormPanel::default());
    let show_form = Signal::derive(move || panel.with(|p| p.open));
    let form_error = Signal::derive(move || panel.with(|p| p.error.clone()));
    let (flag, set_flag) = create_signal(None::<String>);

    // The flag is decoration only; reviews render without waiting for it.
    spawn_local(async move {
        set_flag.set(fetch_country_flag(&geolocation).await);
    });

    // Pushes an outcome to the view. Returns true when a review was stored.
    let apply = move |outcome: Outcome| -> bool {
        match outcome {
            Outcome::Projected { directive, reviews } => {
                log!("[APP] Showing {} reviews for {:?}", reviews.len(), directive);
                set_visible.set(reviews);
                false
            }
            Outcome::Submitted { reviews, .. } => {
                set_visible.set(reviews);
                set_stats.set(store.with_value(|s| s.stats().clone()));
                panel.update(FormPanel::close);
                true
            }
            Outcome::Rejected(err) => {
                panel.update(|p| p.reject(err.to_string()));
                false
            }
            Outcome::Ignored => false,
        }
    };

    let on_action = Callback::new(move |action: String| {
        let mut outcome = Outcome::Ignored;
        store.update_value(|s| outcome = dispatch_action(s, &action));
        apply(outcome);
    });

    let on_submit = Callback::new(move |draft: ReviewDraft| -> bool {
        let mut outcome = Outcome::Ignored;
        store.update_value(|s| outcome = dispatch(s, Intent::SubmitReview(draft)));
        apply(outcome)
    });

    let on_close = Callback::new(move |_: ()| panel.update(FormPanel::close));

    view! {
        <Title text="Reviews" />
        <main class="review-board">
            <header class="board-header">
                <RatingSummary stats=stats />
                <button
                    class="write-review-btn"
                    on:click=move |_| panel.update(FormPanel::toggle)
                >
                    { "Write a review" }
                </button>
            </header>
            <BoardMenu on_action=on_action hidden=show_form />
            <Show
                when=move || show_form.get()
                fallback=move || view! {
                    <RatingBreakdown stats=stats />
                    <ReviewsList
                        reviews=visible
                        flag=flag
                        placeholder_name=placeholder_name.clone()
                        locale=locale
                    />
                }
            >
                <ReviewForm on_submit=on_submit on_close=on_close error=form_error />
            </Show>
        </main>
    }
}
