use log::error;

use crate::dto::dashboard::DashboardPageData;
use crate::forms::notices::NoticeListParams;
use crate::repository::{DashboardReader, NoticeReader};
use crate::services::notices::derive_notice_list;

/// Number of recent notices listed on the dashboard.
pub const RECENT_NOTICES: usize = 5;

pub const SUMMARY_ERROR_MESSAGE: &str = "Não foi possível carregar os indicadores.";

/// Loads the dashboard. The counters and the recent notices are fetched
/// separately so one failing does not hide the other.
pub async fn load_dashboard<R>(repo: &R) -> DashboardPageData
where
    R: DashboardReader + NoticeReader + ?Sized,
{
    let (summary, summary_error) = match repo.dashboard_summary().await {
        Ok(summary) => (Some(summary.into()), None),
        Err(err) => {
            error!("Failed to load dashboard summary: {err}");
            (None, Some(SUMMARY_ERROR_MESSAGE.to_string()))
        }
    };

    let (recent, recent_error) = match derive_notice_list(repo, &NoticeListParams::default()).await
    {
        Ok(view) => (
            view.page.items.into_iter().take(RECENT_NOTICES).collect(),
            None,
        ),
        Err(message) => (Vec::new(), Some(message)),
    };

    DashboardPageData {
        summary,
        summary_error,
        recent,
        recent_error,
    }
}
