//! Search over the quote catalog
//!
//! Matching is a case-insensitive substring test against both the quote text
//! and the author. Results keep the input order; there is no ranking.

use crate::models::Quote;

/// Filter `quotes` down to those whose text or author contains `term`.
///
/// An empty term matches every quote.
///
/// # Examples
///
/// ```
/// use quotebox_core::{catalog, search::filter_quotes};
///
/// let results = filter_quotes(catalog(), "EINSTEIN");
/// assert_eq!(results.len(), 2);
/// ```
#[must_use]
pub fn filter_quotes(quotes: &[Quote], term: &str) -> Vec<Quote> {
    let needle = term.to_lowercase();
    quotes
        .iter()
        .filter(|quote| quote.matches_lowercase(&needle))
        .cloned()
        .collect()
}
