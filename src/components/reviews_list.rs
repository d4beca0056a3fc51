use chrono::Locale;
use leptos::*;
use crate::components::star_rating::StarRating;
use crate::models::review::Review;
use crate::store::{Clock, SystemClock};
use crate::utils::dates::format_relative;

#[component]
pub fn ReviewsList(
    #[prop(into)] reviews: Signal<Vec<Review>>,
    #[prop(into)] flag: Signal<Option<String>>,
    placeholder_name: String,
    locale: Locale,
) -> impl IntoView {
    view! {
        <div class="reviews">
            {move || {
                let now = SystemClock.now_millis();
                reviews.get().into_iter().map(|review| view! {
                    <ReviewCard
                        review=review
                        flag=flag
                        now=now
                        placeholder_name=placeholder_name.clone()
                        locale=locale
                    />
                }).collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn ReviewCard(
    review: Review,
    flag: Signal<Option<String>>,
    now: i64,
    placeholder_name: String,
    locale: Locale,
) -> impl IntoView {
    let name = review.display_name(&placeholder_name).to_string();
    let created = format_relative(review.created_at, now, locale);

    view! {
        <div class="review" data-id=review.id.clone()>
            {review.image_url.clone().map(|src| view! {
                <img src=src alt="" class="user-img" />
            })}
            <div class="created-at">
                <div class="cur-date">{created}</div>
                {move || flag.get().map(|src| view! {
                    <div>{ "from" }</div>
                    <img src=src alt="" class="country-flag" />
                })}
            </div>
            <div class="user">
                <div class="full-name">{name}</div>
                {review.verified.then(|| view! {
                    <ion-icon name="checkmark-circle" class="icon-verified"></ion-icon>
                })}
            </div>
            <StarRating rating=review.stars />
            <div class="review-text">{review.text.clone()}</div>
        </div>
    }
}
