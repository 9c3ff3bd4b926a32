use serde::Serialize;

use crate::domain::types::{NoticeId, TrackingStatus};

/// A notice the user saved for follow-up.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Favorite {
    pub id: NoticeId,
    pub entity_name: String,
    pub object: String,
    pub municipality: String,
    pub region: String,
    pub published_at: String,
    /// Workflow step; `None` when the API returns no or an unknown status.
    pub status: Option<TrackingStatus>,
}
