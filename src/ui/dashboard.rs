use dioxus::prelude::*;
use tracing::trace;

use super::camera_panel::CameraPanelView;
use super::sidebar::DataSidebar;
use crate::config::{GRID_COLUMNS, GRID_SPACING_PX};
use crate::dashboard::{CameraId, GridPosition, PanelSlot};
use crate::state::AppState;

/// 2×2 camera grid, or one camera fullscreen with the data sidebar.
#[component]
pub fn DashboardScreen() -> Element {
    let app_state = use_context::<Signal<AppState>>();
    let state = app_state.read();

    let mut grid_cells: Vec<(CameraId, GridPosition)> = Vec::new();
    let mut fullscreen: Option<CameraId> = None;
    for panel in state.dashboard.panels() {
        match state.dashboard.slot_for(panel.id()) {
            PanelSlot::Grid(position) => grid_cells.push((panel.id(), position)),
            PanelSlot::Fullscreen => fullscreen = Some(panel.id()),
            PanelSlot::Hidden => {}
        }
    }
    trace!("Rendering view {:?}", state.dashboard.view().state());

    if let Some(id) = fullscreen {
        return rsx! {
            div {
                style: "display: flex; flex-direction: row; gap: 10px; height: 100%;",
                div {
                    style: "flex: 1; display: flex; flex-direction: column;",
                    CameraPanelView { key: "{id.position()}", id, fullscreen: true }
                }
                DataSidebar {}
            }
        };
    }

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat({GRID_COLUMNS}, 1fr); gap: {GRID_SPACING_PX}px;",
            for (id, position) in grid_cells {
                div {
                    key: "{id.position()}",
                    style: "grid-row: {position.row + 1}; grid-column: {position.column + 1};",
                    CameraPanelView { id }
                }
            }
        }
    }
}
