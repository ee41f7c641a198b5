//! Quote model

use std::fmt;

use serde::{Deserialize, Serialize};

/// An inspirational quote and its author
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// The quote text, without surrounding quotation marks
    pub text: String,
    /// Who said it
    pub author: String,
}

impl Quote {
    /// Create a new quote
    #[must_use]
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Format the quote for sharing: `"<text>" — <author>`
    #[must_use]
    pub fn to_clipboard_text(&self) -> String {
        format!("\"{}\" — {}", self.text, self.author)
    }

    /// Check whether text or author contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.text.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_clipboard_text())
    }
}
