//! The fixed, ordered quote catalog
//!
//! The catalog is embedded in the binary and built once per process. Order is
//! significant: search results follow it, and index 0 is the recovery value
//! for an unreadable persisted quote.

use std::sync::OnceLock;

use crate::models::Quote;

/// Number of quotes in the catalog
pub const CATALOG_LEN: usize = 15;

const ENTRIES: [(&str, &str); CATALOG_LEN] = [
    (
        "The best way to predict the future is to invent it.",
        "Alan Kay",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "Push yourself, because no one else is going to do it for you.",
        "Unknown",
    ),
    (
        "Don\u{2019}t count the days, make the days count.",
        "Muhammad Ali",
    ),
    (
        "Everything you\u{2019}ve ever wanted is on the other side of fear.",
        "George Addair",
    ),
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "The only limit to our realization of tomorrow is our doubts of today.",
        "Franklin D. Roosevelt",
    ),
    (
        "It always seems impossible until it\u{2019}s done.",
        "Nelson Mandela",
    ),
    (
        "Success is walking from failure to failure with no loss of enthusiasm.",
        "Winston Churchill",
    ),
    (
        "Keep your face always toward the sunshine\u{2014}and shadows will fall behind you.",
        "Walt Whitman",
    ),
    ("Turn your wounds into wisdom.", "Oprah Winfrey"),
    (
        "Happiness is not something ready made. It comes from your own actions.",
        "Dalai Lama",
    ),
    (
        "Try not to become a man of success. Rather become a man of value.",
        "Albert Einstein",
    ),
    (
        "Hardships often prepare ordinary people for an extraordinary destiny.",
        "C.S. Lewis",
    ),
    (
        "Strive not to be a success, but rather to be of value.",
        "Albert Einstein",
    ),
];

static CATALOG: OnceLock<Vec<Quote>> = OnceLock::new();

/// The full catalog, in display order
#[must_use]
pub fn catalog() -> &'static [Quote] {
    CATALOG.get_or_init(|| {
        ENTRIES
            .iter()
            .map(|(text, author)| Quote::new(*text, *author))
            .collect()
    })
}

/// The first catalog entry
#[must_use]
pub fn first() -> &'static Quote {
    &catalog()[0]
}
