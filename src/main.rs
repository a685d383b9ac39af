//! Rollcall - Save names and dates
//!
//! A small desktop client for a person API: type in a name and a date,
//! save them, and see everything saved so far.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rollcall::app::App;

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("rollcall=info".parse().unwrap()))
        .init();

    info!("Starting Rollcall v{}", env!("CARGO_PKG_VERSION"));

    // Launch Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::default().with_window(
                WindowBuilder::new()
                    .with_title("Rollcall")
                    .with_inner_size(LogicalSize::new(520.0, 680.0)),
            ),
        )
        .launch(App);
}
