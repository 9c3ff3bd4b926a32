use serde::Serialize;

use crate::domain::format::format_brl;

/// Aggregate counters shown on the dashboard cards.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct DashboardSummary {
    pub active_notices: u64,
    pub proposals_sent: u64,
    /// Share of successful proposals, in percent.
    pub success_rate: f64,
    pub total_value: f64,
    pub active_alerts: u64,
}

impl DashboardSummary {
    pub fn total_value_display(&self) -> String {
        format_brl(self.total_value)
    }

    pub fn success_rate_display(&self) -> String {
        format!("{:.0}%", self.success_rate)
    }
}
