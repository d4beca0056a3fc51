//! Routes UI intents onto the store and the projections.
use crate::error::ValidationError;
use crate::models::review::{Review, ReviewDraft};
use crate::projection::{project, Directive};
use crate::storage::KeyValueStorage;
use crate::store::{Clock, ReviewStore};
use leptos::logging::{log, warn};

/// Everything the board UI can ask for.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SubmitReview(ReviewDraft),
    SortDefault,
    SortTopRating,
    SortMostRecent,
    FilterAtLeast5,
    FilterAtLeast4_5,
    FilterAtLeast4,
    FilterAtMost4,
}

impl Intent {
    /// Menu intents by their action name. `None` for anything unknown.
    pub fn from_action(action: &str) -> Option<Intent> {
        let intent = match action {
            "btn-top-default" => Intent::SortDefault,
            "btn-top-rating" => Intent::SortTopRating,
            "btn-most-recent" => Intent::SortMostRecent,
            "btn-filter-by-5" => Intent::FilterAtLeast5,
            "btn-filter-by-4-half-up" => Intent::FilterAtLeast4_5,
            "btn-filter-by-4-up" => Intent::FilterAtLeast4,
            "btn-filter-by-lower-than-4" => Intent::FilterAtMost4,
            _ => return None,
        };
        Some(intent)
    }

    pub fn action(&self) -> Option<&'static str> {
        let action = match self {
            Intent::SubmitReview(_) => return None,
            Intent::SortDefault => "btn-top-default",
            Intent::SortTopRating => "btn-top-rating",
            Intent::SortMostRecent => "btn-most-recent",
            Intent::FilterAtLeast5 => "btn-filter-by-5",
            Intent::FilterAtLeast4_5 => "btn-filter-by-4-half-up",
            Intent::FilterAtLeast4 => "btn-filter-by-4-up",
            Intent::FilterAtMost4 => "btn-filter-by-lower-than-4",
        };
        Some(action)
    }

    pub fn directive(&self) -> Option<Directive> {
        let directive = match self {
            Intent::SubmitReview(_) => return None,
            Intent::SortDefault => Directive::Default,
            Intent::SortTopRating => Directive::TopRating,
            Intent::SortMostRecent => Directive::MostRecent,
            Intent::FilterAtLeast5 => Directive::FilterAtLeast(5.0),
            Intent::FilterAtLeast4_5 => Directive::FilterAtLeast(4.5),
            Intent::FilterAtLeast4 => Directive::FilterAtLeast(4.0),
            Intent::FilterAtMost4 => Directive::FilterAtMost(4.0),
        };
        Some(directive)
    }
}

/// What the view should do after an intent was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Show `reviews`, produced by `directive`.
    Projected {
        directive: Directive,
        reviews: Vec<Review>,
    },
    /// A review was stored; `reviews` is the refreshed default view.
    Submitted { review: Review, reviews: Vec<Review> },
    /// The submission was refused and nothing changed.
    Rejected(ValidationError),
    Ignored,
}

pub fn dispatch<S, C>(store: &mut ReviewStore<S, C>, intent: Intent) -> Outcome
where
    S: KeyValueStorage,
    C: Clock,
{
    match intent {
        Intent::SubmitReview(draft) => match store.add(draft) {
            Ok(review) => Outcome::Submitted {
                review,
                reviews: project(store.all(), Directive::Default),
            },
            Err(err) => {
                warn!("[DISPATCH] Review rejected: {}", err);
                Outcome::Rejected(err)
            }
        },
        other => match other.directive() {
            Some(directive) => Outcome::Projected {
                directive,
                reviews: project(store.all(), directive),
            },
            None => Outcome::Ignored,
        },
    }
}

/// Dispatches a menu action by name; unknown names are no-ops.
pub fn dispatch_action<S, C>(store: &mut ReviewStore<S, C>, action: &str) -> Outcome
where
    S: KeyValueStorage,
    C: Clock,
{
    match Intent::from_action(action) {
        Some(intent) => dispatch(store, intent),
        None => {
            log!("[DISPATCH] Ignoring unknown action '{}'", action);
            Outcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::storage::MemoryStorage;

    const MENU: [Intent; 7] = [
        Intent::SortDefault,
        Intent::SortTopRating,
        Intent::SortMostRecent,
        Intent::FilterAtLeast5,
        Intent::FilterAtLeast4_5,
        Intent::FilterAtLeast4,
        Intent::FilterAtMost4,
    ];

    fn store_with<'a>(
        storage: &'a MemoryStorage,
        ratings: &[&str],
    ) -> ReviewStore<&'a MemoryStorage, fn() -> i64> {
        fn clock() -> i64 {
            1_000
        }
        let mut store = ReviewStore::new(storage, clock as fn() -> i64, BoardConfig::default());
        for (i, stars) in ratings.iter().enumerate() {
            store
                .add(ReviewDraft::new(*stars, format!("review {i}")))
                .unwrap();
        }
        store
    }

    fn texts(reviews: &[Review]) -> Vec<&str> {
        reviews.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn test_action_names_round_trip() {
        for intent in MENU {
            let action = intent.action().unwrap();
            assert_eq!(Intent::from_action(action), Some(intent));
        }
        assert_eq!(Intent::from_action("btn-unknown"), None);
        assert_eq!(Intent::SubmitReview(ReviewDraft::default()).action(), None);
    }

    #[test]
    fn test_menu_intents_project() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage, &["3", "5", "4.5", "4"]);

        match dispatch(&mut store, Intent::SortTopRating) {
            Outcome::Projected { directive, reviews } => {
                assert_eq!(directive, Directive::TopRating);
                assert_eq!(texts(&reviews), ["review 1", "review 2", "review 3", "review 0"]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        match dispatch(&mut store, Intent::FilterAtLeast4_5) {
            Outcome::Projected { reviews, .. } => {
                assert_eq!(texts(&reviews), ["review 1", "review 2"]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        match dispatch_action(&mut store, "btn-filter-by-lower-than-4") {
            Outcome::Projected { reviews, .. } => {
                assert_eq!(texts(&reviews), ["review 0", "review 3"]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_sorting_is_not_sticky() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage, &["1", "5"]);
        dispatch(&mut store, Intent::SortTopRating);

        match dispatch(&mut store, Intent::SortDefault) {
            Outcome::Projected { reviews, .. } => {
                assert_eq!(texts(&reviews), ["review 0", "review 1"]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(texts(store.all()), ["review 0", "review 1"]);
    }

    #[test]
    fn test_submit_routes_to_store() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage, &["2"]);

        let outcome = dispatch(&mut store, Intent::SubmitReview(ReviewDraft::new("5", "New")));
        match outcome {
            Outcome::Submitted { review, reviews } => {
                assert_eq!(review.text, "New");
                assert_eq!(texts(&reviews), ["review 0", "New"]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_rejected_submit_changes_nothing() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage, &["2"]);
        let saved = storage.get("reviews");

        let outcome = dispatch(&mut store, Intent::SubmitReview(ReviewDraft::new("5", " ")));
        assert_eq!(outcome, Outcome::Rejected(ValidationError::MissingText));
        assert_eq!(store.len(), 1);
        assert_eq!(storage.get("reviews"), saved);
    }

    #[test]
    fn test_unknown_action_is_ignored() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage, &["2"]);
        assert_eq!(dispatch_action(&mut store, "btn-close-form"), Outcome::Ignored);
        assert_eq!(store.len(), 1);
    }
}
