mod camera_panel;
mod components;
mod dashboard;
mod dialogs;
mod notices;
mod render_surface;
mod sidebar;

pub use dashboard::DashboardScreen;
pub use notices::NoticeStack;
