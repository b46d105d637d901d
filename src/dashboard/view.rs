use tracing::{debug, info};

use super::camera::{CameraId, CameraPanel, DashboardController};
use crate::config::GRID_COLUMNS;

/// Grid cell in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

impl GridPosition {
    /// Fixed cell of a camera, derived from its position only
    pub fn for_camera(id: CameraId) -> Self {
        Self {
            row: id.position() / GRID_COLUMNS,
            column: id.position() % GRID_COLUMNS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Grid,
    Fullscreen(CameraId),
}

/// Where a panel's render surface currently lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSlot {
    Grid(GridPosition),
    Fullscreen,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarLine {
    Header(String),
    DataPoint(String),
}

impl SidebarLine {
    pub fn text(&self) -> &str {
        match self {
            SidebarLine::Header(text) | SidebarLine::DataPoint(text) => text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidebar {
    visible: bool,
    target: Option<CameraId>,
    lines: Vec<SidebarLine>,
}

impl Sidebar {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn lines(&self) -> &[SidebarLine] {
        &self.lines
    }

    fn reset(&mut self, target: Option<CameraId>) {
        self.visible = false;
        self.target = target;
        self.lines.clear();
    }
}

/// Grid / fullscreen view state machine plus the fullscreen sidebar.
///
/// Sole writer of the view state and the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardView {
    state: ViewState,
    sidebar: Sidebar,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn slot_for(&self, panel: CameraId) -> PanelSlot {
        match self.state {
            ViewState::Grid => PanelSlot::Grid(GridPosition::for_camera(panel)),
            ViewState::Fullscreen(active) if active == panel => PanelSlot::Fullscreen,
            ViewState::Fullscreen(_) => PanelSlot::Hidden,
        }
    }

    /// Toggle fullscreen for `panel`. Returns `true` if the view changed.
    ///
    /// While another camera is fullscreen the request is rejected.
    pub fn toggle_fullscreen(&mut self, panel: &CameraPanel) -> bool {
        match self.state {
            ViewState::Grid => {
                info!("{}: entering fullscreen", panel.name());
                self.state = ViewState::Fullscreen(panel.id());
                self.sidebar.reset(Some(panel.id()));
                true
            }
            ViewState::Fullscreen(active) if active == panel.id() => {
                info!(
                    "{}: back to grid at {:?}",
                    panel.name(),
                    GridPosition::for_camera(panel.id())
                );
                self.state = ViewState::Grid;
                self.sidebar.reset(None);
                true
            }
            ViewState::Fullscreen(active) => {
                debug!(
                    "{}: fullscreen toggle ignored, {} is fullscreen",
                    panel.name(),
                    active
                );
                false
            }
        }
    }

    /// Rebuild the sidebar from the checked data points of `panel`.
    ///
    /// Only acts while `panel` is fullscreen and the sidebar targets it.
    pub fn show_data_sidebar(&mut self, panel: &CameraPanel) {
        let is_target = self.state == ViewState::Fullscreen(panel.id())
            && self.sidebar.target == Some(panel.id());
        if !is_target {
            debug!("{}: sidebar refresh ignored, not fullscreen", panel.name());
            return;
        }

        self.sidebar.lines.clear();

        let selected = panel.data_points().checked_names();
        if selected.is_empty() {
            self.sidebar.visible = false;
            return;
        }

        self.sidebar
            .lines
            .push(SidebarLine::Header(format!("{} - Data Points:", panel.name())));
        self.sidebar.lines.extend(
            selected
                .into_iter()
                .map(|name| SidebarLine::DataPoint(format!("{}:", name))),
        );
        self.sidebar.visible = true;
    }
}

impl DashboardController for DashboardView {
    fn is_fullscreen_target(&self, panel: CameraId) -> bool {
        self.state == ViewState::Fullscreen(panel)
    }

    fn request_toggle_fullscreen(&mut self, panel: &CameraPanel) {
        self.toggle_fullscreen(panel);
    }

    fn request_sidebar_refresh(&mut self, panel: &CameraPanel) {
        self.show_data_sidebar(panel);
    }
}
