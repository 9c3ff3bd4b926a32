//! Repository traits over the remote procurement API.
//!
//! Every operation is a single outbound call; implementations never retry.

use async_trait::async_trait;

use crate::domain::dashboard::DashboardSummary;
use crate::domain::favorite::Favorite;
use crate::domain::notification::Notification;
use crate::domain::tracking::{ChecklistTask, NewTask};
use crate::domain::types::{NoticeId, NotificationId, RegionCode, TaskId, TrackingStatus};
use crate::models::notice::RawNotice;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "server")]
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Server-side narrowing forwarded to `GET /licitacoes/listar_banco`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeListQuery {
    pub search: Option<String>,
    pub modality: Option<String>,
    pub region: Option<RegionCode>,
    pub id: Option<NoticeId>,
}

impl NoticeListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank terms are not forwarded.
    pub fn search(mut self, term: impl AsRef<str>) -> Self {
        self.search = non_blank(term);
        self
    }

    pub fn modality(mut self, modality: impl AsRef<str>) -> Self {
        self.modality = non_blank(modality);
        self
    }

    pub fn region(mut self, region: RegionCode) -> Self {
        self.region = Some(region);
        self
    }

    /// Restricts the listing to a single notice.
    pub fn id(mut self, id: NoticeId) -> Self {
        self.id = Some(id);
        self
    }

    /// Query-string pairs in the order the API documents them.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = &self.search {
            params.push(("busca", search.clone()));
        }
        if let Some(modality) = &self.modality {
            params.push(("modalidade", modality.clone()));
        }
        if let Some(region) = &self.region {
            params.push(("uf", region.to_string()));
        }
        if let Some(id) = self.id {
            params.push(("id", id.to_string()));
        }
        params
    }
}

fn non_blank(value: impl AsRef<str>) -> Option<String> {
    let trimmed = value.as_ref().trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[async_trait]
pub trait NoticeReader {
    /// Returns the raw payloads; normalization happens in the view layer.
    async fn list_notices(&self, query: &NoticeListQuery) -> RepositoryResult<Vec<RawNotice>>;
}

#[async_trait]
pub trait DashboardReader {
    async fn dashboard_summary(&self) -> RepositoryResult<DashboardSummary>;
}

#[async_trait]
pub trait FavoriteReader {
    async fn list_favorites(&self) -> RepositoryResult<Vec<Favorite>>;
    async fn is_favorite(&self, notice_id: NoticeId) -> RepositoryResult<bool>;
}

#[async_trait]
pub trait FavoriteWriter {
    /// Returns the confirmation message sent back by the API, if any.
    async fn add_favorite(&self, notice_id: NoticeId) -> RepositoryResult<Option<String>>;
    async fn remove_favorite(&self, notice_id: NoticeId) -> RepositoryResult<()>;
}

#[async_trait]
pub trait TrackingReader {
    async fn list_tasks(&self, notice_id: NoticeId) -> RepositoryResult<Vec<ChecklistTask>>;
}

#[async_trait]
pub trait TrackingWriter {
    async fn start_tracking(&self, notice_id: NoticeId) -> RepositoryResult<()>;
    async fn set_status(&self, notice_id: NoticeId, status: TrackingStatus)
    -> RepositoryResult<()>;
    async fn add_task(&self, task: &NewTask) -> RepositoryResult<()>;
    async fn complete_task(&self, task_id: TaskId) -> RepositoryResult<()>;
    async fn remove_task(&self, task_id: TaskId) -> RepositoryResult<()>;
}

#[async_trait]
pub trait NotificationReader {
    async fn list_notifications(&self) -> RepositoryResult<Vec<Notification>>;
}

#[async_trait]
pub trait NotificationWriter {
    async fn mark_notification_read(&self, id: NotificationId) -> RepositoryResult<()>;
    async fn remove_notification(&self, id: NotificationId) -> RepositoryResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_skip_unset_fields() {
        let query = NoticeListQuery::new()
            .search("  livros ")
            .modality("")
            .region(RegionCode::new("mg").unwrap());

        assert_eq!(
            query.to_params(),
            vec![("busca", "livros".to_string()), ("uf", "MG".to_string())]
        );
    }

    #[test]
    fn id_query_targets_single_notice() {
        let query = NoticeListQuery::new().id(NoticeId::new(42).unwrap());
        assert_eq!(query.to_params(), vec![("id", "42".to_string())]);
    }
}
