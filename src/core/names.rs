//! Player name normalization.
//!
//! Prop feeds and box-score tables disagree on accents ("Jokić" vs "Jokic")
//! and casing. Every name comparison goes through [`normalize_name`].

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// NFKD-decompose, drop combining marks, trim and lowercase.
pub fn normalize_name(name: &str) -> String {
    name.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// URL-safe slug: normalized name with runs of non `[a-z0-9]` collapsed to `-`.
pub fn make_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in normalize_name(name).chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}
