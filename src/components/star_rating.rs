use leptos::*;
use crate::utils::stars::render_stars;

/// Five star icons for a rating.
#[component]
pub fn StarRating(#[prop(into)] rating: MaybeSignal<f64>) -> impl IntoView {
    view! {
        <div class="stars">
            {move || render_stars(rating.get()).into_iter().map(|glyph| view! {
                <ion-icon
                    name=glyph.icon_name()
                    class=format!("icon star {}", glyph.css_class())
                ></ion-icon>
            }).collect::<Vec<_>>()}
        </div>
    }
}
