//! URL slug derivation and validation.
//!
//! Slugs are the public lookup keys for event and album detail pages. They are
//! derived from titles but remain admin-editable, so both derivation and
//! format validation live here.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Lowercase words separated by single hyphens, no leading/trailing hyphen.
    static ref SLUG_RE: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex");
}

/// Derives a URL-safe slug from a title.
///
/// Alphanumeric characters are lowercased, everything else collapses into
/// single hyphens. Returns an empty string if the title contains no
/// alphanumeric characters at all; callers must treat that as a validation
/// failure rather than persist it.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // suppress leading hyphen

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.extend(ch.to_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Returns true if `slug` is a well-formed slug.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.len() <= 120 && SLUG_RE.is_match(slug)
}
