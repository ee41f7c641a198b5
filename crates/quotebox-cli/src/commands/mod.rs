pub mod common;
pub mod completions;
pub mod copy;
pub mod list;
pub mod new;
pub mod search;
pub mod show;
pub mod theme;
