use chrono::{Local, Locale, TimeZone};
use std::fmt::Display;

pub const MILLIS_PER_DAY: u64 = 1000 * 60 * 60 * 24;

/// Locale used when the host does not report one.
pub const DEFAULT_LOCALE: Locale = Locale::en_US;

/// Whole days between two timestamps, in either direction.
pub fn days_between(target: i64, now: i64) -> u64 {
    now.abs_diff(target) / MILLIS_PER_DAY
}

/// Label for when a review was written, in the local time zone.
pub fn format_relative(target: i64, now: i64, locale: Locale) -> String {
    format_relative_in(target, now, &Local, locale)
}

/// Same as [`format_relative`] with an explicit time zone for the long date.
pub fn format_relative_in<Tz>(target: i64, now: i64, tz: &Tz, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match days_between(target, now) {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        days @ 2..=7 => format!("{days} Days Ago"),
        _ => match tz.timestamp_millis_opt(target).single() {
            Some(date) => date
                .format_localized(long_date_pattern(locale), locale)
                .to_string(),
            None => target.to_string(),
        },
    }
}

/// Resolves a BCP 47 tag such as `fr-FR` or `de` to a chrono locale,
/// falling back to [`DEFAULT_LOCALE`].
pub fn locale_from_tag(tag: &str) -> Locale {
    let normalized = tag.trim().replace('-', "_");
    if let Ok(locale) = Locale::try_from(normalized.as_str()) {
        return locale;
    }
    let language = normalized.split('_').next().unwrap_or_default().to_ascii_lowercase();
    let regional = format!("{language}_{}", language.to_ascii_uppercase());
    Locale::try_from(regional.as_str()).unwrap_or(DEFAULT_LOCALE)
}

// Long date layout per locale; month names come from the locale itself.
fn long_date_pattern(locale: Locale) -> &'static str {
    match locale {
        Locale::en_US | Locale::en_CA | Locale::en_PH => "%B %-d, %Y",
        Locale::de_DE | Locale::de_AT | Locale::de_CH | Locale::de_LU => "%-d. %B %Y",
        Locale::ja_JP | Locale::zh_CN | Locale::zh_TW | Locale::zh_HK => "%Y年%-m月%-d日",
        Locale::ko_KR => "%Y년 %-m월 %-d일",
        _ => "%-d %B %Y",
    }
}
