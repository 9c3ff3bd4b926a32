use serde::Serialize;

use crate::domain::types::NotificationId;

/// Category of a notification, used to pick the alert colour.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A deadline is approaching.
    Deadline,
    /// A proposal changed state.
    Proposal,
    /// A new notice matched the user's interests.
    NewNotice,
    #[default]
    Info,
}

impl NotificationKind {
    /// Parses the API's free-form `tipo` field.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("prazo") => NotificationKind::Deadline,
            Some("proposta") => NotificationKind::Proposal,
            Some("edital") | Some("novo_edital") => NotificationKind::NewNotice,
            _ => NotificationKind::Info,
        }
    }

    /// Bootstrap alert level used by the templates.
    pub const fn alert_level(self) -> &'static str {
        match self {
            NotificationKind::Deadline => "danger",
            NotificationKind::Proposal => "success",
            NotificationKind::NewNotice => "primary",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: String,
}

/// Number of notifications not yet marked as read.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kind_from_wire() {
        assert_eq!(NotificationKind::from_wire(Some("Prazo")), NotificationKind::Deadline);
        assert_eq!(NotificationKind::from_wire(Some("edital")), NotificationKind::NewNotice);
        assert_eq!(NotificationKind::from_wire(Some("outro")), NotificationKind::Info);
        assert_eq!(NotificationKind::from_wire(None), NotificationKind::Info);
    }
}
