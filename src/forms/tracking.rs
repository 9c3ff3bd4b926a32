//! Forms posted from the tracking page.

use serde::Deserialize;
use validator::Validate;

use crate::domain::tracking::NewTask;
use crate::domain::types::{NoticeId, TaskTitle, TrackingStatus};
use crate::forms::FormError;

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

impl TryFrom<StatusForm> for TrackingStatus {
    type Error = FormError;

    fn try_from(form: StatusForm) -> Result<Self, Self::Error> {
        form.status.parse().map_err(|_| FormError::InvalidStatus)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddTaskForm {
    #[validate(length(min = 1, max = 200))]
    pub titulo: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub descricao: Option<String>,
}

impl AddTaskForm {
    /// Validates, strips markup and builds the task for `notice_id`.
    pub fn into_new_task(self, notice_id: NoticeId) -> Result<NewTask, FormError> {
        self.validate()?;

        let title = TaskTitle::new(ammonia::clean(self.titulo.trim()))
            .map_err(|_| FormError::InvalidTitle)?;
        let description = self
            .descricao
            .map(|text| ammonia::clean(text.trim()));

        Ok(NewTask::new(notice_id, title, description))
    }
}
