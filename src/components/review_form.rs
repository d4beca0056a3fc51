use leptos::*;
use leptos::ev::SubmitEvent;
use crate::models::review::ReviewDraft;

/// The "write a review" form. `on_submit` returns whether the review was
/// accepted; the fields are only cleared when it was.
#[component]
pub fn ReviewForm(
    on_submit: Callback<ReviewDraft, bool>,
    on_close: Callback<()>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let (img_url, set_img_url) = create_signal(String::new());
    let (full_name, set_full_name) = create_signal(String::new());
    let (nb_stars, set_nb_stars) = create_signal(String::new());
    let (review_text, set_review_text) = create_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ReviewDraft {
            img_url: img_url.get_untracked(),
            full_name: full_name.get_untracked(),
            nb_stars: nb_stars.get_untracked(),
            review_text: review_text.get_untracked(),
        };
        if on_submit.call(draft) {
            // Reset values
            set_img_url.set(String::new());
            set_full_name.set(String::new());
            set_nb_stars.set(String::new());
            set_review_text.set(String::new());
        }
    };

    view! {
        <form class="form grid" on:submit=handle_submit>
            <button type="button" class="close-form-btn" on:click=move |_| on_close.call(())>
                { "Close" }
            </button>
            <input
                type="url"
                name="img_url"
                placeholder="Image URL"
                prop:value=img_url
                on:input=move |e| set_img_url.set(event_target_value(&e))
            />
            <input
                type="text"
                name="full_name"
                placeholder="Full name"
                prop:value=full_name
                on:input=move |e| set_full_name.set(event_target_value(&e))
            />
            <input
                type="number"
                name="nb_stars"
                min="0"
                max="5"
                step="0.5"
                placeholder="Rating (0-5)"
                prop:value=nb_stars
                on:input=move |e| set_nb_stars.set(event_target_value(&e))
            />
            <textarea
                name="review_text"
                placeholder="Write your review here"
                prop:value=review_text
                on:input=move |e| set_review_text.set(event_target_value(&e))
            ></textarea>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <button type="submit">{ "Submit Review" }</button>
        </form>
    }
}

/// Whether the form is showing, and the message from the last rejected
/// submission. Opening or closing the form always drops a stale message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPanel {
    pub open: bool,
    pub error: Option<String>,
}

impl FormPanel {
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.error = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.error = None;
    }

    pub fn reject(&mut self, message: String) {
        self.error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_clears_rejection_message() {
        let mut panel = FormPanel::default();
        panel.toggle();
        panel.reject("review text is required".into());
        assert!(panel.open);

        panel.toggle();
        assert_eq!(panel, FormPanel::default());

        panel.toggle();
        assert!(panel.open);
        assert_eq!(panel.error, None);
    }

    #[test]
    fn test_close_clears_rejection_message() {
        let mut panel = FormPanel { open: true, error: Some("a star rating is required".into()) };
        panel.close();
        assert_eq!(panel, FormPanel::default());
    }
}
