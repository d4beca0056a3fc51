//! Sort and filter views over the review collection.
use crate::models::review::Review;

/// A sort or filter the user picked from the board menus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Directive {
    /// Insertion order.
    Default,
    /// Highest rating first; equal ratings keep insertion order.
    TopRating,
    /// Ordered by creation time, oldest first.
    // NOTE: ascending order is what the board has always shown under
    // "Most Recent"; flip the comparison once the intended order is settled.
    MostRecent,
    FilterAtLeast(f64),
    FilterAtMost(f64),
}

/// Builds the list to display. The input is never reordered.
pub fn project(reviews: &[Review], directive: Directive) -> Vec<Review> {
    let mut view = match directive {
        Directive::FilterAtLeast(threshold) => reviews
            .iter()
            .filter(|r| r.stars >= threshold)
            .cloned()
            .collect(),
        Directive::FilterAtMost(threshold) => reviews
            .iter()
            .filter(|r| r.stars <= threshold)
            .cloned()
            .collect(),
        _ => reviews.to_vec(),
    };

    // `sort_by` is stable, which TopRating relies on for ties.
    match directive {
        Directive::TopRating => view.sort_by(|a, b| b.stars.total_cmp(&a.stars)),
        Directive::MostRecent => view.sort_by_key(|r| r.created_at),
        _ => {}
    }
    view
}
