use log::error;

use crate::domain::notification::unread_count;
use crate::domain::types::NotificationId;
use crate::dto::notifications::NotificationsPageData;
use crate::repository::{NotificationReader, NotificationWriter};
use crate::services::{ServiceError, ServiceResult};

pub async fn load_notifications<R>(repo: &R) -> ServiceResult<NotificationsPageData>
where
    R: NotificationReader + ?Sized,
{
    let notifications = repo.list_notifications().await.map_err(|err| {
        error!("Failed to list notifications: {err}");
        ServiceError::from(err)
    })?;

    let unread = unread_count(&notifications);

    Ok(NotificationsPageData {
        notifications: notifications.into_iter().map(Into::into).collect(),
        unread,
    })
}

pub async fn mark_read<R>(repo: &R, id: NotificationId) -> ServiceResult<()>
where
    R: NotificationWriter + ?Sized,
{
    repo.mark_notification_read(id).await.map_err(|err| {
        error!("Failed to mark notification {id} as read: {err}");
        ServiceError::from(err)
    })
}

pub async fn remove_notification<R>(repo: &R, id: NotificationId) -> ServiceResult<()>
where
    R: NotificationWriter + ?Sized,
{
    repo.remove_notification(id).await.map_err(|err| {
        error!("Failed to remove notification {id}: {err}");
        ServiceError::from(err)
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::notification::{Notification, NotificationKind};
    use crate::repository::mock::MockRepository;

    fn notification(id: i64, kind: NotificationKind, read: bool) -> Notification {
        Notification {
            id: NotificationId::new(id).unwrap(),
            title: format!("Aviso {id}"),
            message: "Prazo de envio termina amanhã".to_string(),
            kind,
            read,
            created_at: "10/04/2024 08:00:00".to_string(),
        }
    }

    #[actix_web::test]
    async fn counts_unread_and_assigns_levels() {
        let mut repo = MockRepository::new();
        repo.expect_list_notifications().returning(|| {
            Ok(vec![
                notification(1, NotificationKind::Deadline, false),
                notification(2, NotificationKind::Info, true),
                notification(3, NotificationKind::Proposal, false),
            ])
        });

        let data = load_notifications(&repo).await.unwrap();

        assert_eq!(data.unread, 2);
        let levels: Vec<_> = data.notifications.iter().map(|n| n.level).collect();
        assert_eq!(levels, vec!["danger", "info", "success"]);
    }

    #[actix_web::test]
    async fn mark_read_targets_notification() {
        let mut repo = MockRepository::new();
        repo.expect_mark_notification_read()
            .withf(|id| id.get() == 3)
            .times(1)
            .returning(|_| Ok(()));

        mark_read(&repo, NotificationId::new(3).unwrap())
            .await
            .unwrap();
    }
}
