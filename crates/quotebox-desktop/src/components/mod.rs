//! UI Components
//!
//! Building blocks for the quote page.

mod header;
mod quote_actions;
mod quote_display;
mod search_bar;
mod search_results;
mod toast;

pub use header::Header;
pub use quote_actions::QuoteActions;
pub use quote_display::QuoteDisplay;
pub use search_bar::SearchBar;
pub use search_results::SearchResults;
pub use toast::ToastStack;
