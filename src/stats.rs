//! Aggregate rating figures derived from the review collection.
use crate::models::review::Review;
use crate::utils::stars::MAX_STARS;

/// Mean star rating, or `None` for an empty collection.
pub fn average(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: f64 = reviews.iter().map(|r| r.stars).sum();
    Some(sum / reviews.len() as f64)
}

/// Fraction of reviews rated exactly `star_value`, in `0.0..=1.0`.
pub fn percentage(reviews: &[Review], star_value: f64) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let matching = reviews.iter().filter(|r| r.stars == star_value).count();
    matching as f64 / reviews.len() as f64
}

/// Share of reviews at each whole star value 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingDistribution {
    shares: [f64; MAX_STARS],
}

impl RatingDistribution {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut shares = [0.0; MAX_STARS];
        for (i, share) in shares.iter_mut().enumerate() {
            *share = percentage(reviews, (i + 1) as f64);
        }
        Self { shares }
    }

    /// Share for a star value; zero for anything outside 1..=5.
    pub fn get(&self, star: u8) -> f64 {
        match star {
            1..=5 => self.shares[usize::from(star) - 1],
            _ => 0.0,
        }
    }

    /// Rows for the breakdown table, 5 stars first.
    pub fn rows(&self) -> Vec<(u8, f64)> {
        (1..=MAX_STARS as u8)
            .rev()
            .map(|star| (star, self.get(star)))
            .collect()
    }
}

/// Everything the summary header and breakdown table display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardStats {
    pub total: usize,
    pub average: Option<f64>,
    pub distribution: RatingDistribution,
}

impl BoardStats {
    pub fn compute(reviews: &[Review]) -> Self {
        Self {
            total: reviews.len(),
            average: average(reviews),
            distribution: RatingDistribution::from_reviews(reviews),
        }
    }
}

/// Whole-percent label for a share. The share is first rounded to one
/// decimal place by its exact binary value, so 2/3 reads as "70%" and 0.15
/// (stored just below 0.15) reads as "10%".
pub fn format_percentage(fraction: f64) -> String {
    format!("{}%", round_to_tenths(fraction) * 10)
}

fn round_to_tenths(fraction: f64) -> i64 {
    // A share lies exactly halfway between two tenths only when it is an odd
    // number of quarters; those round up.
    let quarters = fraction * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (fraction * 10.0).round() as i64;
    }
    format!("{fraction:.1}")
        .parse::<f64>()
        .map(|rounded| (rounded * 10.0).round() as i64)
        .unwrap_or(0)
}
