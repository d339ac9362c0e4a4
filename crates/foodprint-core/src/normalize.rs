//! Name canonicalization for catalog matching.
//!
//! Ingredient names arrive as free text; catalog names were stored as free
//! text. To match "crème fraîche" against a factor stored as
//! "creme  fraiche", both sides are folded through [`normalize`] at
//! comparison time. The normalized form is never persisted — the stored
//! records stay exactly as submitted.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a name for matching.
///
/// Strips Latin diacritics (NFD decomposition, then dropping combining
/// marks), collapses whitespace runs to single spaces, and trims the ends.
/// Letter case is preserved.
///
/// # Examples
///
/// ```
/// use foodprint_core::normalize;
///
/// assert_eq!(normalize("Crème brûlée"), "Creme brulee");
/// assert_eq!(normalize("    La     Ciotat     "), "La Ciotat");
/// ```
pub fn normalize(text: &str) -> String {
    let folded: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
