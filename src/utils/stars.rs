/// One position in a five-star rating display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarGlyph {
    Full,
    Half,
    Empty,
}

impl StarGlyph {
    /// Ionicons name used by the views.
    pub fn icon_name(self) -> &'static str {
        match self {
            StarGlyph::Full => "star",
            StarGlyph::Half => "star-half-outline",
            StarGlyph::Empty => "star-outline",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StarGlyph::Full => "full-star",
            StarGlyph::Half => "half-star",
            StarGlyph::Empty => "empty-star",
        }
    }
}

pub const MAX_STARS: usize = 5;

/// Maps a rating to full, half and empty stars, always five glyphs.
///
/// Ratings outside `0..=5` are clamped and NaN renders as no stars, so an
/// average over an empty board still draws five empty stars.
pub fn render_stars(rating: f64) -> [StarGlyph; MAX_STARS] {
    let rating = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_STARS as f64)
    };

    let full = rating.trunc() as usize;
    let half = usize::from(rating.fract() != 0.0);

    let mut glyphs = [StarGlyph::Empty; MAX_STARS];
    for glyph in glyphs.iter_mut().take(full) {
        *glyph = StarGlyph::Full;
    }
    if half == 1 {
        glyphs[full] = StarGlyph::Half;
    }
    glyphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use super::StarGlyph::*;

    fn count(glyphs: &[StarGlyph], kind: StarGlyph) -> usize {
        glyphs.iter().filter(|g| **g == kind).count()
    }

    #[test]
    fn test_whole_ratings() {
        assert_eq!(render_stars(0.0), [Empty; 5]);
        assert_eq!(render_stars(3.0), [Full, Full, Full, Empty, Empty]);
        assert_eq!(render_stars(5.0), [Full; 5]);
    }

    #[test]
    fn test_half_ratings() {
        assert_eq!(render_stars(4.5), [Full, Full, Full, Full, Half]);
        assert_eq!(render_stars(0.5), [Half, Empty, Empty, Empty, Empty]);
        // Any fraction shows as a half star.
        assert_eq!(render_stars(2.2), [Full, Full, Half, Empty, Empty]);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(render_stars(f64::NAN), [Empty; 5]);
        assert_eq!(render_stars(-1.0), [Empty; 5]);
        assert_eq!(render_stars(7.5), [Full; 5]);
    }

    #[test]
    fn test_icon_names() {
        assert_eq!(Full.icon_name(), "star");
        assert_eq!(Half.icon_name(), "star-half-outline");
        assert_eq!(Empty.icon_name(), "star-outline");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_always_five_glyphs(rating in 0.0f64..=5.0) {
            let glyphs = render_stars(rating);
            let full = count(&glyphs, Full);
            let half = count(&glyphs, Half);
            let empty = count(&glyphs, Empty);

            prop_assert_eq!(full + half + empty, 5);
            prop_assert_eq!(full, rating.floor() as usize);
            prop_assert_eq!(half == 1, rating.fract() != 0.0);
            prop_assert_eq!(empty, 5 - rating.ceil() as usize);
        }

        #[test]
        fn prop_glyphs_are_ordered(rating in 0.0f64..=5.0) {
            let glyphs = render_stars(rating);
            let rank = |g: &StarGlyph| match g { Full => 0, Half => 1, Empty => 2 };
            prop_assert!(glyphs.windows(2).all(|w| rank(&w[0]) <= rank(&w[1])));
        }
    }
}
