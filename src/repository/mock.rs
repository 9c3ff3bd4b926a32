//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::dashboard::DashboardSummary;
use crate::domain::favorite::Favorite;
use crate::domain::notification::Notification;
use crate::domain::tracking::{ChecklistTask, NewTask};
use crate::domain::types::{NoticeId, NotificationId, TaskId, TrackingStatus};
use crate::models::notice::RawNotice;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DashboardReader, FavoriteReader, FavoriteWriter, NoticeListQuery, NoticeReader,
    NotificationReader, NotificationWriter, TrackingReader, TrackingWriter,
};

mock! {
    pub Repository {}

    #[async_trait]
    impl NoticeReader for Repository {
        async fn list_notices(&self, query: &NoticeListQuery) -> RepositoryResult<Vec<RawNotice>>;
    }

    #[async_trait]
    impl DashboardReader for Repository {
        async fn dashboard_summary(&self) -> RepositoryResult<DashboardSummary>;
    }

    #[async_trait]
    impl FavoriteReader for Repository {
        async fn list_favorites(&self) -> RepositoryResult<Vec<Favorite>>;
        async fn is_favorite(&self, notice_id: NoticeId) -> RepositoryResult<bool>;
    }

    #[async_trait]
    impl FavoriteWriter for Repository {
        async fn add_favorite(&self, notice_id: NoticeId) -> RepositoryResult<Option<String>>;
        async fn remove_favorite(&self, notice_id: NoticeId) -> RepositoryResult<()>;
    }

    #[async_trait]
    impl TrackingReader for Repository {
        async fn list_tasks(&self, notice_id: NoticeId) -> RepositoryResult<Vec<ChecklistTask>>;
    }

    #[async_trait]
    impl TrackingWriter for Repository {
        async fn start_tracking(&self, notice_id: NoticeId) -> RepositoryResult<()>;
        async fn set_status(
            &self,
            notice_id: NoticeId,
            status: TrackingStatus,
        ) -> RepositoryResult<()>;
        async fn add_task(&self, task: &NewTask) -> RepositoryResult<()>;
        async fn complete_task(&self, task_id: TaskId) -> RepositoryResult<()>;
        async fn remove_task(&self, task_id: TaskId) -> RepositoryResult<()>;
    }

    #[async_trait]
    impl NotificationReader for Repository {
        async fn list_notifications(&self) -> RepositoryResult<Vec<Notification>>;
    }

    #[async_trait]
    impl NotificationWriter for Repository {
        async fn mark_notification_read(&self, id: NotificationId) -> RepositoryResult<()>;
        async fn remove_notification(&self, id: NotificationId) -> RepositoryResult<()>;
    }
}
