//! Edit buffers behind the two modal dialogs.
//!
//! A dialog is opened from a snapshot of the panel state and closed with a
//! [`DialogOutcome`]. Closing yields `Some(result)` on accept and `None` on
//! reject, so the caller gets decision and payload in one value and the
//! panel is only touched on accept.

use super::data_points::{DataPointEntry, DataPoints};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Accepted,
    Rejected,
}

/// Buffer for the "Configure Camera" dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureCameraDialog {
    rtsp_input: String,
}

impl ConfigureCameraDialog {
    pub const TITLE: &'static str = "Configure Camera";
    pub const PLACEHOLDER: &'static str = "Enter RTSP link";

    pub fn open(existing_link: &str) -> Self {
        Self {
            rtsp_input: existing_link.to_string(),
        }
    }

    pub fn rtsp_input(&self) -> &str {
        &self.rtsp_input
    }

    pub fn set_rtsp_input(&mut self, text: String) {
        self.rtsp_input = text;
    }

    /// The field text verbatim on accept. No URI validation.
    pub fn close(self, outcome: DialogOutcome) -> Option<String> {
        match outcome {
            DialogOutcome::Accepted => Some(self.rtsp_input),
            DialogOutcome::Rejected => None,
        }
    }
}

/// Buffer for the "Select and Name Data Points" dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPointsDialog {
    rows: DataPoints,
}

impl DataPointsDialog {
    pub const TITLE: &'static str = "Select and Name Data Points";

    pub fn open(existing: &[DataPointEntry]) -> Self {
        Self {
            rows: DataPoints::from_existing(existing),
        }
    }

    pub fn rows(&self) -> &[DataPointEntry] {
        self.rows.entries()
    }

    pub fn toggle_checked(&mut self, index: usize) {
        if let Some(checked) = self.rows.get(index).map(|row| !row.checked) {
            self.set_checked(index, checked);
        }
    }

    pub fn set_checked(&mut self, index: usize, checked: bool) {
        if let Some(row) = self.rows.get_mut(index) {
            row.checked = checked;
        }
    }

    pub fn set_name(&mut self, index: usize, name: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.name = name;
        }
    }

    pub fn close(self, outcome: DialogOutcome) -> Option<DataPoints> {
        match outcome {
            DialogOutcome::Accepted => Some(self.rows),
            DialogOutcome::Rejected => None,
        }
    }
}
