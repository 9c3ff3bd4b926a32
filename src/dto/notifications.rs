use serde::Serialize;

use crate::domain::notification::Notification;

/// Notification plus the alert level the template colours it with.
#[derive(Debug, Serialize)]
pub struct NotificationRow {
    #[serde(flatten)]
    pub notification: Notification,
    pub level: &'static str,
}

impl From<Notification> for NotificationRow {
    fn from(notification: Notification) -> Self {
        let level = notification.kind.alert_level();
        Self {
            notification,
            level,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationsPageData {
    pub notifications: Vec<NotificationRow>,
    pub unread: usize,
}
