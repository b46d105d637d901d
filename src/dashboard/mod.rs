pub mod camera;
pub mod data_points;
pub mod dialog;
pub mod view;

pub use camera::*;
pub use data_points::*;
pub use dialog::*;
pub use view::*;

use crate::config::CAMERA_COUNT;

/// Confirmation surfaced to the user after a dialog was accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
}

/// The four camera panels and the view that arranges them.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    panels: Vec<CameraPanel>,
    view: DashboardView,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            panels: (0..CAMERA_COUNT)
                .map(|position| CameraPanel::new(CameraId(position)))
                .collect(),
            view: DashboardView::new(),
        }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panels(&self) -> &[CameraPanel] {
        &self.panels
    }

    pub fn panel(&self, id: CameraId) -> Option<&CameraPanel> {
        self.panels.get(id.position())
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn slot_for(&self, id: CameraId) -> PanelSlot {
        self.view.slot_for(id)
    }

    pub fn configure_dialog(&self, id: CameraId) -> Option<ConfigureCameraDialog> {
        self.panel(id)
            .map(|panel| ConfigureCameraDialog::open(&panel.config().rtsp_link))
    }

    pub fn data_points_dialog(&self, id: CameraId) -> Option<DataPointsDialog> {
        self.panel(id)
            .map(|panel| DataPointsDialog::open(panel.data_points().entries()))
    }

    pub fn close_configure_dialog(
        &mut self,
        id: CameraId,
        outcome: Option<String>,
    ) -> Option<Confirmation> {
        self.panels
            .get_mut(id.position())?
            .on_configure_closed(outcome)
    }

    pub fn close_data_points_dialog(
        &mut self,
        id: CameraId,
        outcome: Option<DataPoints>,
    ) -> Option<Confirmation> {
        let Self { panels, view } = self;
        panels
            .get_mut(id.position())?
            .on_view_data_closed(outcome, view)
    }

    pub fn double_click_surface(&mut self, id: CameraId) {
        let Self { panels, view } = self;
        if let Some(panel) = panels.get(id.position()) {
            panel.on_surface_double_clicked(view);
        }
    }

    pub fn insert_camera(&self, id: CameraId) {
        if let Some(panel) = self.panel(id) {
            panel.on_insert_clicked();
        }
    }

    pub fn retract_camera(&self, id: CameraId) {
        if let Some(panel) = self.panel(id) {
            panel.on_retract_clicked();
        }
    }
}
