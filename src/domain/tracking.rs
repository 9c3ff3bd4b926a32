//! Follow-up workflow of a saved notice: status plus checklist tasks.

use serde::Serialize;

use crate::domain::types::{NoticeId, TaskId, TaskTitle};

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ChecklistTask {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub done: bool,
}

/// Task to be created on the remote service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTask {
    pub notice_id: NoticeId,
    pub title: TaskTitle,
    pub description: Option<String>,
}

impl NewTask {
    #[must_use]
    pub fn new(notice_id: NoticeId, title: TaskTitle, description: Option<String>) -> Self {
        Self {
            notice_id,
            title,
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Checklist completion summary.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct TrackingProgress {
    pub completed: usize,
    pub total: usize,
    /// Rounded completion percentage; zero when there are no tasks.
    pub percent: u8,
}

impl TrackingProgress {
    pub fn from_tasks(tasks: &[ChecklistTask]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.done).count();
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };
        Self {
            completed,
            total,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, done: bool) -> ChecklistTask {
        ChecklistTask {
            id: TaskId::new(id).unwrap(),
            title: format!("Tarefa {id}"),
            description: None,
            done,
        }
    }

    #[test]
    fn progress_without_tasks_is_zero() {
        assert_eq!(TrackingProgress::from_tasks(&[]), TrackingProgress::default());
    }

    #[test]
    fn progress_rounds_to_nearest_percent() {
        let tasks = vec![task(1, true), task(2, false), task(3, false)];
        let progress = TrackingProgress::from_tasks(&tasks);

        assert_eq!(progress.completed, 1);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.percent, 33);

        let tasks = vec![task(1, true), task(2, true), task(3, false)];
        assert_eq!(TrackingProgress::from_tasks(&tasks).percent, 67);
    }

    #[test]
    fn new_task_drops_blank_description() {
        let notice = NoticeId::new(5).unwrap();
        let title = TaskTitle::new("Separar certidões").unwrap();

        let task = NewTask::new(notice, title, Some("   ".to_string()));

        assert_eq!(task.description, None);
    }
}
