//! File name slugs
//!
//! Turns a display name into a lowercase ASCII path segment. Any Unicode
//! text is transliterated to ASCII first, then every run of characters
//! other than `a-z0-9` collapses into one `-`.

/// Stem used when a name has nothing left after normalization.
pub const FALLBACK_SLUG: &str = "icerik";

// helper.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

/// Slug for `name`, never empty.
pub fn slugify(name: &str) -> String {
    let ascii = deunicode::deunicode(name).to_lowercase();
    let slug = regex!(r"[^a-z0-9]+").replace_all(&ascii, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// `slugify(name)` plus the playlist extension.
pub fn playlist_file_name(name: &str) -> String {
    format!("{}.m3u", slugify(name))
}
