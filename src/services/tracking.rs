//! Tracking of a followed notice: status workflow and checklist.
//!
//! A notice is tracked once it is saved as a favorite. Every mutating action
//! except [`start_tracking`] is refused while tracking is inactive.

use log::error;

use crate::domain::tracking::TrackingProgress;
use crate::domain::types::{NoticeId, TaskId, TrackingStatus};
use crate::dto::tracking::{StatusOption, TrackingPageData};
use crate::forms::tracking::{AddTaskForm, StatusForm};
use crate::repository::{FavoriteReader, NoticeReader, TrackingReader, TrackingWriter};
use crate::services::notices::find_notice;
use crate::services::{ServiceError, ServiceResult};

async fn is_active<R>(repo: &R, notice_id: NoticeId) -> ServiceResult<bool>
where
    R: FavoriteReader + ?Sized,
{
    repo.is_favorite(notice_id).await.map_err(|err| {
        error!("Failed to check tracking of notice {notice_id}: {err}");
        ServiceError::from(err)
    })
}

async fn ensure_active<R>(repo: &R, notice_id: NoticeId) -> ServiceResult<()>
where
    R: FavoriteReader + ?Sized,
{
    if is_active(repo, notice_id).await? {
        Ok(())
    } else {
        Err(ServiceError::TrackingInactive)
    }
}

/// The status recorded on the favorite entry, defaulting to `interessado`.
async fn current_status<R>(repo: &R, notice_id: NoticeId) -> TrackingStatus
where
    R: FavoriteReader + ?Sized,
{
    match repo.list_favorites().await {
        Ok(favorites) => favorites
            .into_iter()
            .find(|favorite| favorite.id == notice_id)
            .and_then(|favorite| favorite.status)
            .unwrap_or_default(),
        Err(err) => {
            error!("Failed to load status of notice {notice_id}: {err}");
            TrackingStatus::default()
        }
    }
}

const LOAD_FAILURE: &str = "Não foi possível carregar o acompanhamento desta licitação.";

/// Loads the tracking page. Only a missing notice is an error; a failing
/// tracking lookup leaves the page up with an inline message.
pub async fn load_tracking<R>(repo: &R, notice_id: NoticeId) -> ServiceResult<TrackingPageData>
where
    R: NoticeReader + FavoriteReader + TrackingReader + ?Sized,
{
    let notice = find_notice(repo, notice_id).await?;
    let mut load_error = None;

    let active = is_active(repo, notice_id).await.unwrap_or_else(|_| {
        load_error = Some(LOAD_FAILURE.to_string());
        false
    });

    let (status, tasks) = if active {
        let tasks = match repo.list_tasks(notice_id).await {
            Ok(tasks) => tasks,
            Err(err) => {
                error!("Failed to list tasks of notice {notice_id}: {err}");
                load_error = Some(LOAD_FAILURE.to_string());
                Vec::new()
            }
        };
        (current_status(repo, notice_id).await, tasks)
    } else {
        (TrackingStatus::default(), Vec::new())
    };

    Ok(TrackingPageData {
        notice,
        active,
        status,
        progress: TrackingProgress::from_tasks(&tasks),
        tasks,
        statuses: StatusOption::all(),
        load_error,
    })
}

pub async fn start_tracking<R>(repo: &R, notice_id: NoticeId) -> ServiceResult<()>
where
    R: TrackingWriter + ?Sized,
{
    repo.start_tracking(notice_id).await.map_err(|err| {
        error!("Failed to start tracking notice {notice_id}: {err}");
        ServiceError::from(err)
    })
}

pub async fn update_status<R>(
    repo: &R,
    notice_id: NoticeId,
    form: StatusForm,
) -> ServiceResult<TrackingStatus>
where
    R: FavoriteReader + TrackingWriter + ?Sized,
{
    let status = TrackingStatus::try_from(form)?;
    ensure_active(repo, notice_id).await?;

    repo.set_status(notice_id, status).await.map_err(|err| {
        error!("Failed to update status of notice {notice_id}: {err}");
        ServiceError::from(err)
    })?;

    Ok(status)
}

pub async fn add_task<R>(repo: &R, notice_id: NoticeId, form: AddTaskForm) -> ServiceResult<()>
where
    R: FavoriteReader + TrackingWriter + ?Sized,
{
    let task = form.into_new_task(notice_id).map_err(|err| {
        error!("Failed to validate task form: {err}");
        ServiceError::from(err)
    })?;
    ensure_active(repo, notice_id).await?;

    repo.add_task(&task).await.map_err(|err| {
        error!("Failed to add task to notice {notice_id}: {err}");
        ServiceError::from(err)
    })
}

pub async fn complete_task<R>(repo: &R, notice_id: NoticeId, task_id: TaskId) -> ServiceResult<()>
where
    R: FavoriteReader + TrackingWriter + ?Sized,
{
    ensure_active(repo, notice_id).await?;

    repo.complete_task(task_id).await.map_err(|err| {
        error!("Failed to complete task {task_id}: {err}");
        ServiceError::from(err)
    })
}

pub async fn remove_task<R>(repo: &R, notice_id: NoticeId, task_id: TaskId) -> ServiceResult<()>
where
    R: FavoriteReader + TrackingWriter + ?Sized,
{
    ensure_active(repo, notice_id).await?;

    repo.remove_task(task_id).await.map_err(|err| {
        error!("Failed to remove task {task_id}: {err}");
        ServiceError::from(err)
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::favorite::Favorite;
    use crate::domain::tracking::ChecklistTask;
    use crate::models::notice::RawNotice;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn notice_id() -> NoticeId {
        NoticeId::new(11).unwrap()
    }

    fn task(id: i64, done: bool) -> ChecklistTask {
        ChecklistTask {
            id: TaskId::new(id).unwrap(),
            title: format!("Tarefa {id}"),
            description: None,
            done,
        }
    }

    fn expect_notice(repo: &mut MockRepository) {
        repo.expect_list_notices().returning(|_| {
            Ok(vec![RawNotice(json!({ "id": 11, "objeto": "Merenda" }))])
        });
    }

    #[actix_web::test]
    async fn inactive_tracking_hides_checklist() {
        let mut repo = MockRepository::new();
        expect_notice(&mut repo);
        repo.expect_is_favorite().returning(|_| Ok(false));
        repo.expect_list_tasks().times(0);

        let data = load_tracking(&repo, notice_id()).await.unwrap();

        assert!(!data.active);
        assert!(data.tasks.is_empty());
        assert_eq!(data.progress.percent, 0);
        assert_eq!(data.statuses.len(), 6);
        assert_eq!(data.load_error, None);
    }

    #[actix_web::test]
    async fn failed_tracking_lookup_keeps_page_with_message() {
        let mut repo = MockRepository::new();
        expect_notice(&mut repo);
        repo.expect_is_favorite()
            .returning(|_| Err(RepositoryError::Status(500)));
        repo.expect_list_tasks().times(0);

        let data = load_tracking(&repo, notice_id()).await.unwrap();

        assert_eq!(data.notice.object, "Merenda");
        assert!(!data.active);
        assert!(data.tasks.is_empty());
        assert!(data.load_error.is_some());
    }

    #[actix_web::test]
    async fn failed_task_list_keeps_tracking_active() {
        let mut repo = MockRepository::new();
        expect_notice(&mut repo);
        repo.expect_is_favorite().returning(|_| Ok(true));
        repo.expect_list_tasks()
            .returning(|_| Err(RepositoryError::Transport("timeout".to_string())));
        repo.expect_list_favorites().returning(|| Ok(Vec::new()));

        let data = load_tracking(&repo, notice_id()).await.unwrap();

        assert!(data.active);
        assert!(data.tasks.is_empty());
        assert_eq!(data.status, TrackingStatus::Interessado);
        assert!(data.load_error.is_some());
    }

    #[actix_web::test]
    async fn active_tracking_loads_tasks_status_and_progress() {
        let mut repo = MockRepository::new();
        expect_notice(&mut repo);
        repo.expect_is_favorite().returning(|_| Ok(true));
        repo.expect_list_tasks()
            .returning(|_| Ok(vec![task(1, true), task(2, false), task(3, false)]));
        repo.expect_list_favorites().returning(|| {
            Ok(vec![Favorite {
                id: NoticeId::new(11).unwrap(),
                entity_name: "—".to_string(),
                object: "Merenda".to_string(),
                municipality: "—".to_string(),
                region: "—".to_string(),
                published_at: "—".to_string(),
                status: Some(TrackingStatus::PropostaEnviada),
            }])
        });

        let data = load_tracking(&repo, notice_id()).await.unwrap();

        assert!(data.active);
        assert_eq!(data.status, TrackingStatus::PropostaEnviada);
        assert_eq!(data.progress.completed, 1);
        assert_eq!(data.progress.percent, 33);
    }

    #[actix_web::test]
    async fn status_change_requires_active_tracking() {
        let mut repo = MockRepository::new();
        repo.expect_is_favorite().returning(|_| Ok(false));
        repo.expect_set_status().times(0);

        let result = update_status(
            &repo,
            notice_id(),
            StatusForm {
                status: "encerrado".to_string(),
            },
        )
        .await;

        assert!(matches!(result, Err(ServiceError::TrackingInactive)));
    }

    #[actix_web::test]
    async fn unknown_status_is_rejected_before_any_call() {
        let mut repo = MockRepository::new();
        repo.expect_is_favorite().times(0);

        let result = update_status(
            &repo,
            notice_id(),
            StatusForm {
                status: "perdida".to_string(),
            },
        )
        .await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[actix_web::test]
    async fn adds_sanitized_task() {
        let mut repo = MockRepository::new();
        repo.expect_is_favorite().returning(|_| Ok(true));
        repo.expect_add_task()
            .withf(|task| {
                task.notice_id.get() == 11
                    && task.title.as_str() == "Separar certidões"
                    && task.description.is_none()
            })
            .times(1)
            .returning(|_| Ok(()));

        add_task(
            &repo,
            notice_id(),
            AddTaskForm {
                titulo: "Separar <script>alert(1)</script>certidões".to_string(),
                descricao: Some(" ".to_string()),
            },
        )
        .await
        .unwrap();
    }

    #[actix_web::test]
    async fn task_actions_require_active_tracking() {
        let mut repo = MockRepository::new();
        repo.expect_is_favorite().returning(|_| Ok(false));
        repo.expect_complete_task().times(0);
        repo.expect_remove_task().times(0);

        let task_id = TaskId::new(5).unwrap();

        assert!(matches!(
            complete_task(&repo, notice_id(), task_id).await,
            Err(ServiceError::TrackingInactive)
        ));
        assert!(matches!(
            remove_task(&repo, notice_id(), task_id).await,
            Err(ServiceError::TrackingInactive)
        ));
    }
}
