//! The review store: sole owner of the review collection.
use crate::config::BoardConfig;
use crate::error::ValidationError;
use crate::models::review::{new_review_id, Review, ReviewDraft};
use crate::stats::BoardStats;
use crate::storage::{decode_reviews, encode_reviews, KeyValueStorage};
use crate::utils::stars::MAX_STARS;
use leptos::logging::{error, log, warn};

/// Source of "now" for review timestamps.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

impl<F: Fn() -> i64> Clock for F {
    fn now_millis(&self) -> i64 {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Empty,
    Populated,
}

pub struct ReviewStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    config: BoardConfig,
    reviews: Vec<Review>,
    stats: BoardStats,
}

impl<S: KeyValueStorage, C: Clock> ReviewStore<S, C> {
    /// An empty store. Call [`ReviewStore::load`] to pick up saved reviews.
    pub fn new(storage: S, clock: C, config: BoardConfig) -> Self {
        Self {
            storage,
            clock,
            config,
            reviews: Vec::new(),
            stats: BoardStats::default(),
        }
    }

    /// Replaces the in-memory collection with the persisted one. Missing or
    /// unreadable data leaves the store empty.
    pub fn load(&mut self) {
        let key = &self.config.storage_key;
        self.reviews = match self.storage.load(key) {
            Ok(Some(raw)) => match decode_reviews(&raw) {
                Ok(reviews) => {
                    log!("[STORE] Loaded {} reviews from '{}'", reviews.len(), key);
                    reviews
                }
                Err(err) => {
                    warn!("[STORE] Ignoring malformed data under '{}': {}", key, err);
                    Vec::new()
                }
            },
            Ok(None) => {
                log!("[STORE] No saved reviews under '{}'", key);
                Vec::new()
            }
            Err(err) => {
                error!("[STORE] Failed to read '{}': {}", key, err);
                Vec::new()
            }
        };
        self.refresh_stats();
    }

    /// Validates a form submission, appends it and persists the collection.
    pub fn add(&mut self, draft: ReviewDraft) -> Result<Review, ValidationError> {
        let stars = parse_rating(&draft.nb_stars)?;
        let text = draft.review_text.trim();
        if text.is_empty() {
            return Err(ValidationError::MissingText);
        }

        let image_url = Some(draft.img_url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string);
        let review = Review {
            id: new_review_id(),
            image_url,
            full_name: draft.full_name.trim().to_string(),
            stars,
            text: text.to_string(),
            created_at: self.clock.now_millis(),
            verified: true,
        };

        self.reviews.push(review.clone());
        self.refresh_stats();
        self.persist();
        log!("[STORE] Added review {} ({} stars)", review.id, review.stars);
        Ok(review)
    }

    pub fn all(&self) -> &[Review] {
        &self.reviews
    }

    pub fn stats(&self) -> &BoardStats {
        &self.stats
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn state(&self) -> StoreState {
        if self.reviews.is_empty() {
            StoreState::Empty
        } else {
            StoreState::Populated
        }
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    fn refresh_stats(&mut self) {
        self.stats = BoardStats::compute(&self.reviews);
    }

    // A failed write keeps the review in memory; the board stays usable for
    // the rest of the session.
    fn persist(&self) {
        let key = &self.config.storage_key;
        let result = encode_reviews(&self.reviews).and_then(|raw| self.storage.save(key, &raw));
        if let Err(err) = result {
            error!("[STORE] Failed to persist {} reviews: {}", self.reviews.len(), err);
        }
    }
}

fn parse_rating(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingRating);
    }
    let stars: f64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidRating(raw.to_string()))?;
    if !stars.is_finite() || !(0.0..=MAX_STARS as f64).contains(&stars) {
        return Err(ValidationError::RatingOutOfRange(stars));
    }
    Ok(stars)
}
