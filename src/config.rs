use std::time::Duration;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Main window title
pub const WINDOW_TITLE: &str = "TOSHNIWAL INDUSTRIES PVT. LTD.";

/// Number of camera panels on the dashboard
pub const CAMERA_COUNT: usize = 4;

/// Columns of the camera grid (row-major)
pub const GRID_COLUMNS: usize = 2;

/// Data point slots per camera
pub const DATA_POINT_COUNT: usize = 16;

/// Status indicator labels shown under every render surface
pub const STATUS_LABELS: [&str; 6] = [
    "CAMERA HEALTH",
    "AIR PRESS",
    "AIR TEMP",
    "AIR FILT CLOG",
    "CAM TEMP",
    "CAMERA REM",
];

/// Sidebar width in fullscreen view [px]
pub const SIDEBAR_WIDTH_PX: u32 = 250;

/// Gap between grid cells [px]
pub const GRID_SPACING_PX: u32 = 20;

/// Time a notice stays on screen before dismissing itself
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(4);

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "camera_dashboard=debug,info";

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Filter directives in `EnvFilter` syntax
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    /// Resolve the filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
    pub fn from_env() -> Self {
        match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(filter) if !filter.trim().is_empty() => Self { filter },
            _ => Self::default(),
        }
    }

    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.filter)
            .with_context(|| format!("Invalid log filter: {}", self.filter))
    }
}
