use chrono::{DateTime, Utc};

/// Five-slot star bar for a 0-5 editorial rating, e.g. "★★★★☆" for 4.5.
///
/// Matches the card rendering: a star is filled once the rating rounds up to
/// it, so 4.5 shows five implied halves as four full stars plus one empty.
pub fn star_bar(rating: f32) -> String {
    let filled = (rating.clamp(0.0, 5.0).floor()) as usize;
    let mut bar = String::with_capacity(5 * '★'.len_utf8());
    for _ in 0..filled {
        bar.push('★');
    }
    for _ in filled..5 {
        bar.push('☆');
    }
    bar
}

/// Hero rating caption, e.g. "4.5/5". Whole numbers drop the fraction the
/// way JS number formatting does ("4/5", not "4.0/5").
pub fn rating_text(rating: f32) -> String {
    format!("{}/5", rating)
}

/// en-US long date as rendered on review pages: "January 15, 2024".
pub fn long_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// en-US short date as rendered on the migration dashboard: "Jan 15, 2024".
pub fn short_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Char-safe excerpt truncation with a trailing ellipsis. Counts chars, not
/// bytes, so Devanagari text never splits mid code point.
pub fn truncate_excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push('…');
    truncated
}
