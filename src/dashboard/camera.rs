use std::fmt;

use tracing::{debug, info};

use super::data_points::DataPoints;
use super::Confirmation;

/// Zero-based camera position on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CameraId(pub usize);

impl CameraId {
    pub fn position(self) -> usize {
        self.0
    }
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Camera {}", self.0 + 1)
    }
}

/// Per-camera stream configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraConfig {
    pub rtsp_link: String,
}

/// User actions exposed by a camera panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAction {
    Configure,
    Insert,
    Retract,
    ViewDataPoints,
}

impl CameraAction {
    pub fn label(&self) -> &'static str {
        match self {
            CameraAction::Configure => "CONFIGURE",
            CameraAction::Insert => "CAMERA INSERT",
            CameraAction::Retract => "CAMERA RETRACT",
            CameraAction::ViewDataPoints => "VIEW DATA POINTS",
        }
    }
}

/// What a panel may ask of the dashboard that owns it.
///
/// Panels hold no reference to the dashboard; the capability is handed in
/// by the caller for the duration of one operation.
pub trait DashboardController {
    /// Whether `panel` is the camera currently shown fullscreen
    fn is_fullscreen_target(&self, panel: CameraId) -> bool;

    fn request_toggle_fullscreen(&mut self, panel: &CameraPanel);

    fn request_sidebar_refresh(&mut self, panel: &CameraPanel);
}

/// One camera: its configuration, data point slots and render surface.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPanel {
    id: CameraId,
    name: String,
    config: CameraConfig,
    data_points: DataPoints,
}

impl CameraPanel {
    pub fn new(id: CameraId) -> Self {
        Self {
            id,
            name: id.to_string(),
            config: CameraConfig::default(),
            data_points: DataPoints::default(),
        }
    }

    pub fn id(&self) -> CameraId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Caption drawn on the placeholder render surface
    pub fn surface_label(&self) -> String {
        format!("{} View", self.name)
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn data_points(&self) -> &DataPoints {
        &self.data_points
    }

    pub fn on_configure_closed(&mut self, outcome: Option<String>) -> Option<Confirmation> {
        let rtsp_link = outcome?;
        info!("{}: RTSP link set to '{}'", self.name, rtsp_link);
        self.config.rtsp_link = rtsp_link;

        Some(Confirmation {
            title: "RTSP Saved".to_string(),
            message: format!("{} RTSP link saved:\n{}", self.name, self.config.rtsp_link),
        })
    }

    pub fn on_view_data_closed(
        &mut self,
        outcome: Option<DataPoints>,
        controller: &mut dyn DashboardController,
    ) -> Option<Confirmation> {
        self.data_points = outcome?;

        let selected = self.data_points.checked_names().join(", ");
        info!(
            "{}: data points saved, {} checked: [{}]",
            self.name,
            self.data_points.checked_count(),
            selected
        );
        let confirmation = Confirmation {
            title: "Data Points Saved".to_string(),
            message: format!("Saved data points for {}:\n{}", self.name, selected),
        };

        if controller.is_fullscreen_target(self.id) {
            controller.request_sidebar_refresh(self);
        }

        Some(confirmation)
    }

    pub fn on_surface_double_clicked(&self, controller: &mut dyn DashboardController) {
        controller.request_toggle_fullscreen(self);
    }

    pub fn on_insert_clicked(&self) {
        debug!("{}: camera insert requested, no action bound", self.name);
    }

    pub fn on_retract_clicked(&self) {
        debug!("{}: camera retract requested, no action bound", self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingController {
        fullscreen: Option<CameraId>,
        toggles: Vec<CameraId>,
        refreshes: Vec<CameraId>,
    }

    impl DashboardController for RecordingController {
        fn is_fullscreen_target(&self, panel: CameraId) -> bool {
            self.fullscreen == Some(panel)
        }

        fn request_toggle_fullscreen(&mut self, panel: &CameraPanel) {
            self.toggles.push(panel.id());
        }

        fn request_sidebar_refresh(&mut self, panel: &CameraPanel) {
            self.refreshes.push(panel.id());
        }
    }

    fn checked(points: &mut DataPoints, index: usize, name: &str) {
        let entry = points.get_mut(index).unwrap();
        entry.checked = true;
        entry.name = name.to_string();
    }

    #[test]
    fn test_names() {
        let panel = CameraPanel::new(CameraId(0));
        assert_eq!(panel.name(), "Camera 1");
        assert_eq!(panel.surface_label(), "Camera 1 View");
        assert_eq!(CameraId(3).to_string(), "Camera 4");
    }

    #[test]
    fn test_configure_accept() {
        let mut panel = CameraPanel::new(CameraId(0));
        let confirmation = panel
            .on_configure_closed(Some("rtsp://10.0.0.5/stream1".to_string()))
            .unwrap();

        assert_eq!(panel.config().rtsp_link, "rtsp://10.0.0.5/stream1");
        assert_eq!(confirmation.title, "RTSP Saved");
        assert_eq!(
            confirmation.message,
            "Camera 1 RTSP link saved:\nrtsp://10.0.0.5/stream1"
        );
    }

    #[test]
    fn test_configure_cancel_keeps_link() {
        let mut panel = CameraPanel::new(CameraId(1));
        panel.on_configure_closed(Some("rtsp://keep".to_string()));

        assert!(panel.on_configure_closed(None).is_none());
        assert_eq!(panel.config().rtsp_link, "rtsp://keep");
    }

    #[test]
    fn test_view_data_accept_in_grid() {
        let mut panel = CameraPanel::new(CameraId(0));
        let mut controller = RecordingController::default();

        let mut points = DataPoints::default();
        checked(&mut points, 1, "Inlet Pressure");
        checked(&mut points, 5, "Outlet Temp");

        let confirmation = panel
            .on_view_data_closed(Some(points), &mut controller)
            .unwrap();

        assert_eq!(
            panel.data_points().checked_names(),
            vec!["Inlet Pressure", "Outlet Temp"]
        );
        assert_eq!(
            confirmation.message,
            "Saved data points for Camera 1:\nInlet Pressure, Outlet Temp"
        );
        assert!(controller.refreshes.is_empty());
    }

    #[test]
    fn test_view_data_accept_when_fullscreen_refreshes_sidebar() {
        let mut panel = CameraPanel::new(CameraId(2));
        let mut controller = RecordingController {
            fullscreen: Some(CameraId(2)),
            ..Default::default()
        };

        panel.on_view_data_closed(Some(DataPoints::default()), &mut controller);
        assert_eq!(controller.refreshes, vec![CameraId(2)]);
    }

    #[test]
    fn test_view_data_cancel_keeps_points() {
        let mut panel = CameraPanel::new(CameraId(0));
        let mut controller = RecordingController {
            fullscreen: Some(CameraId(0)),
            ..Default::default()
        };
        let mut points = DataPoints::default();
        checked(&mut points, 2, "Keep");
        panel.on_view_data_closed(Some(points.clone()), &mut controller);
        controller.refreshes.clear();

        assert!(panel.on_view_data_closed(None, &mut controller).is_none());
        assert_eq!(panel.data_points(), &points);
        assert!(controller.refreshes.is_empty());
    }

    #[test]
    fn test_double_click_requests_toggle() {
        let panel = CameraPanel::new(CameraId(3));
        let mut controller = RecordingController::default();
        panel.on_surface_double_clicked(&mut controller);
        assert_eq!(controller.toggles, vec![CameraId(3)]);
    }

    #[test]
    fn test_insert_and_retract_change_nothing() {
        let panel = CameraPanel::new(CameraId(0));
        let before = panel.clone();
        panel.on_insert_clicked();
        panel.on_retract_clicked();
        assert_eq!(panel, before);
    }
}
