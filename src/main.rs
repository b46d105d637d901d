mod config;
mod dashboard;
mod state;
mod ui;

use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use state::AppState;
use tracing::info;

use crate::config::{LogConfig, CAMERA_COUNT, WINDOW_TITLE};

fn main() -> anyhow::Result<()> {
    // Initialize tracing, RUST_LOG overrides the default filter
    let log_config = LogConfig::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(log_config.env_filter()?)
        .init();

    info!("Starting dashboard with {} cameras", CAMERA_COUNT);

    // Launch the Dioxus app maximized, closing the window ends the process
    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_maximized(true),
        ))
        .launch(App);

    Ok(())
}

#[component]
fn App() -> Element {
    // Initialize application state
    use_context_provider(|| Signal::new(AppState::new()));

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif; margin: 0; padding: 0;",
            div {
                style: "flex: 1; padding: 20px; overflow: auto; box-sizing: border-box;",
                ui::DashboardScreen {}
            }
            ui::NoticeStack {}
        }
    }
}
