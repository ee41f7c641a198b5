//! Quotebox Desktop Application
//!
//! A small window that serves a random inspirational quote.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod styles;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quotebox=debug")),
        )
        .init();

    tracing::info!("Starting Quotebox...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("My Custom Quote App")
            .with_inner_size(LogicalSize::new(900.0, 780.0)),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
