use leptos::*;
use crate::components::star_rating::StarRating;
use crate::stats::{format_percentage, BoardStats};

/// Average stars and review count.
#[component]
pub fn RatingSummary(#[prop(into)] stats: Signal<BoardStats>) -> impl IntoView {
    let average = Signal::derive(move || stats.get().average.unwrap_or(0.0));

    view! {
        <div class="summary">
            <div class="stars-average">
                <StarRating rating=average />
            </div>
            <div class="all-reviews">
                <span class="all-reviews-count">{move || stats.get().total}</span>
                { " reviews" }
            </div>
        </div>
    }
}

/// One row per star value, 5 down to 1, with the share of reviews.
#[component]
pub fn RatingBreakdown(#[prop(into)] stats: Signal<BoardStats>) -> impl IntoView {
    view! {
        <div class="stats">
            {move || stats.get().distribution.rows().into_iter().map(|(star, share)| view! {
                <div class="stat">
                    <div class="stars-val">{star}</div>
                    <StarRating rating=f64::from(star) />
                    <div class=format!("rating-percentage percentage-{star}")>
                        {format_percentage(share)}
                    </div>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}
