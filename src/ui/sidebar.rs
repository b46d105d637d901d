use dioxus::prelude::*;

use crate::config::SIDEBAR_WIDTH_PX;
use crate::dashboard::SidebarLine;
use crate::state::AppState;

fn line_style(line: &SidebarLine) -> &'static str {
    match line {
        SidebarLine::Header(_) => "padding: 6px; font-size: 14px; font-weight: bold;",
        SidebarLine::DataPoint(_) => "height: 30px; display: flex; align-items: center; padding-left: 10px; background: #dceeff; border: 1px solid #aaa; font-family: 'Courier New', Courier, monospace; font-size: 13px;",
    }
}

/// Checked data points of the fullscreen camera
#[component]
pub fn DataSidebar() -> Element {
    let app_state = use_context::<Signal<AppState>>();
    let state = app_state.read();
    let sidebar = state.dashboard.view().sidebar();

    if !sidebar.is_visible() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "width: {SIDEBAR_WIDTH_PX}px; flex-shrink: 0; display: flex; flex-direction: column; gap: 4px; padding: 10px; background: #f2f2f2; border-left: 2px solid #aaa;",
            for (i, line) in sidebar.lines().iter().enumerate() {
                div {
                    key: "{i}",
                    style: line_style(line),
                    "{line.text()}"
                }
            }
        }
    }
}
