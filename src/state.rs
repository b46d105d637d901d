use tracing::debug;

use crate::dashboard::{Confirmation, Dashboard};

/// Transient, non-blocking message shown as a toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub message: String,
}

/// Application state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Camera panels and view state
    pub dashboard: Dashboard,
    /// Notices currently on screen, oldest first
    pub notices: Vec<Notice>,
    next_notice_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dashboard: Dashboard::new(),
            notices: Vec::new(),
            next_notice_id: 1,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_notice(&mut self, title: String, message: String) -> u64 {
        let id = self.next_notice_id;
        self.next_notice_id += 1;

        debug!("Notice {}: {}", id, title);
        self.notices.push(Notice {
            id,
            title,
            message,
        });
        id
    }

    pub fn push_confirmation(&mut self, confirmation: Confirmation) -> u64 {
        self.push_notice(confirmation.title, confirmation.message)
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.retain(|notice| notice.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_ids_increase() {
        let mut state = AppState::new();
        let first = state.push_notice("a".to_string(), String::new());
        let second = state.push_confirmation(Confirmation {
            title: "b".to_string(),
            message: "saved".to_string(),
        });

        assert!(second > first);
        assert_eq!(state.notices.len(), 2);
        assert_eq!(state.notices[1].message, "saved");
    }

    #[test]
    fn test_dismiss_removes_only_that_notice() {
        let mut state = AppState::new();
        let first = state.push_notice("a".to_string(), String::new());
        let second = state.push_notice("b".to_string(), String::new());

        state.dismiss_notice(first);
        state.dismiss_notice(999);

        let ids: Vec<u64> = state.notices.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![second]);
    }

    #[test]
    fn test_notice_outlives_view_toggle() {
        use crate::dashboard::{CameraId, DialogOutcome, ViewState};

        let mut state = AppState::new();
        let id = CameraId(0);
        let dialog = state.dashboard.configure_dialog(id).unwrap();
        let confirmation = state
            .dashboard
            .close_configure_dialog(id, dialog.close(DialogOutcome::Accepted))
            .unwrap();
        let notice = state.push_confirmation(confirmation);

        state.dashboard.double_click_surface(id);
        assert_eq!(state.dashboard.view().state(), ViewState::Fullscreen(id));
        state.dashboard.double_click_surface(id);
        assert_eq!(state.notices.len(), 1);

        state.dismiss_notice(notice);
        assert!(state.notices.is_empty());
    }

    #[test]
    fn test_new_state_is_empty_grid() {
        let state = AppState::new();
        assert!(state.notices.is_empty());
        assert_eq!(state.dashboard, Dashboard::new());
    }
}
