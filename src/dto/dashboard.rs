use serde::Serialize;

use crate::domain::dashboard::DashboardSummary;
use crate::domain::notice::ProcurementNotice;

/// Dashboard counters with their display strings precomputed.
#[derive(Debug, Serialize)]
pub struct SummaryCards {
    #[serde(flatten)]
    pub summary: DashboardSummary,
    pub total_value_display: String,
    pub success_rate_display: String,
}

impl From<DashboardSummary> for SummaryCards {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            total_value_display: summary.total_value_display(),
            success_rate_display: summary.success_rate_display(),
            summary,
        }
    }
}

/// Data required to render the dashboard. Each section carries either its
/// content or the message explaining why it is missing.
#[derive(Debug, Serialize)]
pub struct DashboardPageData {
    pub summary: Option<SummaryCards>,
    pub summary_error: Option<String>,
    /// Most recently published notices.
    pub recent: Vec<ProcurementNotice>,
    pub recent_error: Option<String>,
}
