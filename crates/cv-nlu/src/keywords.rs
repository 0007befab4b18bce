//! Keyword hit counting shared by both tiers.

/// Number of keywords that occur as substrings of `text`.
///
/// `text` is expected to be lower-cased already.
pub fn count_hits<S: AsRef<str>>(text: &str, keywords: &[S]) -> u32 {
    keywords
        .iter()
        .filter(|k| text.contains(k.as_ref()))
        .count() as u32
}

/// Highest non-zero score; the earliest candidate wins an exact tie.
pub fn best_scored<'a>(scores: &[(&'a str, u32)]) -> Option<(&'a str, u32)> {
    scores
        .iter()
        .filter(|(_, score)| *score > 0)
        .fold(None, |best: Option<(&'a str, u32)>, &(name, score)| match best {
            Some((_, top)) if top >= score => best,
            _ => Some((name, score)),
        })
}
