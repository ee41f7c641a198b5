//! The quote widget: in-memory state plus the user actions over it
//!
//! Every action runs to completion against the widget's own store. Persisted
//! state is written before the in-memory copy changes, so a failed write
//! leaves the widget exactly as it was.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{self, catalog};
use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::models::{
    Notification, Quote, ThemeMode, COPY_FAILED, NEW_QUOTE_LOADED, NO_MATCHING_QUOTES,
    QUOTE_COPIED,
};
use crate::search::filter_quotes;
use crate::store::{KeyValueStore, LAST_QUOTE_KEY, THEME_KEY};

/// Quote widget state bound to a durable store
pub struct QuoteWidget<S, R = StdRng> {
    store: S,
    rng: R,
    current_quote: Option<Quote>,
    theme: ThemeMode,
    search_term: String,
    search_results: Vec<Quote>,
}

impl<S: KeyValueStore> QuoteWidget<S> {
    /// Restore the widget from `store`, drawing quotes from an OS-seeded RNG
    pub fn load(store: S) -> Self {
        Self::load_with_rng(store, StdRng::from_os_rng())
    }
}

impl<S: KeyValueStore, R: Rng> QuoteWidget<S, R> {
    /// Restore the widget from `store` using the given RNG.
    ///
    /// A stored quote that cannot be parsed is replaced by the first catalog
    /// entry. Store read failures are treated as missing values.
    pub fn load_with_rng(store: S, rng: R) -> Self {
        let current_quote = restore_last_quote(&store);
        let theme = ThemeMode::from_stored(read_logged(&store, THEME_KEY).as_deref());
        tracing::debug!(
            "Restored widget state: quote={}, theme={}",
            current_quote.is_some(),
            theme
        );

        Self {
            store,
            rng,
            current_quote,
            theme,
            search_term: String::new(),
            search_results: Vec::new(),
        }
    }

    /// Draw a random catalog quote, persist it, and make it current.
    ///
    /// Each draw is independent, so the same quote may come up twice in a row.
    pub fn request_new_quote(&mut self) -> Result<Notification> {
        let quotes = catalog();
        let quote = quotes[self.rng.random_range(0..quotes.len())].clone();

        let serialized = serde_json::to_string(&quote)?;
        self.store.set(LAST_QUOTE_KEY, &serialized)?;
        tracing::debug!("New quote by {}", quote.author);

        self.current_quote = Some(quote);
        Ok(Notification::success(NEW_QUOTE_LOADED))
    }

    /// Copy the current quote as `"<text>" — <author>`.
    ///
    /// Returns `None` without touching the clipboard when no quote is shown.
    pub fn copy_current_quote<C>(&self, clipboard: &mut C) -> Option<Notification>
    where
        C: Clipboard + ?Sized,
    {
        let quote = self.current_quote.as_ref()?;
        match clipboard.write_text(&quote.to_clipboard_text()) {
            Ok(()) => Some(Notification::success(QUOTE_COPIED)),
            Err(error) => {
                tracing::warn!("Failed to copy quote to clipboard: {error}");
                Some(Notification::error(COPY_FAILED))
            }
        }
    }

    /// Replace the search input verbatim. Results are not recomputed.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Recompute search results for the current term.
    ///
    /// Returns the "no matching quotes" error notification when nothing
    /// matched; a non-empty result produces no notification.
    pub fn run_search(&mut self) -> Option<Notification> {
        self.search_results = filter_quotes(catalog(), &self.search_term);
        tracing::debug!(
            "Search for {:?} matched {} quotes",
            self.search_term,
            self.search_results.len()
        );

        if self.search_results.is_empty() {
            Some(Notification::error(NO_MATCHING_QUOTES))
        } else {
            None
        }
    }

    /// Flip between light and dark, persisting the new choice first.
    pub fn toggle_theme(&mut self) -> Result<ThemeMode> {
        let next = self.theme.toggled();
        self.store.set(THEME_KEY, next.as_str())?;
        self.theme = next;
        Ok(next)
    }

    /// The quote on display, if any
    pub const fn current_quote(&self) -> Option<&Quote> {
        self.current_quote.as_ref()
    }

    /// Active color theme
    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Whether the dark palette is active
    pub const fn is_dark_theme(&self) -> bool {
        self.theme.is_dark()
    }

    /// Search input as last set, not trimmed
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Matches from the last search, in catalog order
    pub fn search_results(&self) -> &[Quote] {
        &self.search_results
    }

    /// The backing store
    pub const fn store(&self) -> &S {
        &self.store
    }
}

fn read_logged(store: &impl KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!("Failed to read '{key}' from store: {error}");
            None
        }
    }
}

fn restore_last_quote(store: &impl KeyValueStore) -> Option<Quote> {
    // An empty value counts as nothing saved
    let raw = read_logged(store, LAST_QUOTE_KEY).filter(|raw| !raw.is_empty())?;
    match serde_json::from_str::<Quote>(&raw) {
        Ok(quote) => Some(quote),
        Err(error) => {
            tracing::warn!("Stored last quote is unreadable, showing the first quote: {error}");
            Some(catalog::first().clone())
        }
    }
}
