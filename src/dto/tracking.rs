use serde::Serialize;

use crate::domain::notice::ProcurementNotice;
use crate::domain::tracking::{ChecklistTask, TrackingProgress};
use crate::domain::types::TrackingStatus;

/// Selectable status as shown in the status dropdown.
#[derive(Debug, Serialize)]
pub struct StatusOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl StatusOption {
    pub fn all() -> Vec<StatusOption> {
        TrackingStatus::ALL
            .iter()
            .map(|status| StatusOption {
                value: status.as_str(),
                label: status.label(),
            })
            .collect()
    }
}

/// Data required to render the tracking page.
#[derive(Debug, Serialize)]
pub struct TrackingPageData {
    pub notice: ProcurementNotice,
    /// Tracking is active once the notice is saved as a favorite.
    pub active: bool,
    pub status: TrackingStatus,
    pub tasks: Vec<ChecklistTask>,
    pub progress: TrackingProgress,
    pub statuses: Vec<StatusOption>,
    /// Shown inline when the tracking lookup failed.
    pub load_error: Option<String>,
}
