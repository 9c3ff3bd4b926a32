use serde::Deserialize;
use serde_json::Value;

use crate::domain::format::PLACEHOLDER;
use crate::domain::tracking::ChecklistTask;
use crate::domain::types::TypeConstraintError;
use crate::models::fields::{flag, parse_id, record, scalar_text};

/// Envelope returned by `GET /acompanhamento/tarefas`.
#[derive(Debug, Default, Deserialize)]
pub struct TaskListResponse {
    #[serde(default)]
    pub tarefas: Vec<Value>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TaskPayload {
    pub id: Value,
    pub titulo: Value,
    pub descricao: Value,
    pub concluido: Value,
}

impl TryFrom<TaskPayload> for ChecklistTask {
    type Error = TypeConstraintError;

    fn try_from(payload: TaskPayload) -> Result<Self, Self::Error> {
        Ok(ChecklistTask {
            id: parse_id(&payload.id)?,
            title: scalar_text(&payload.titulo).unwrap_or_else(|| PLACEHOLDER.to_string()),
            description: scalar_text(&payload.descricao),
            done: flag(&payload.concluido),
        })
    }
}

impl TryFrom<Value> for ChecklistTask {
    type Error = TypeConstraintError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        record::<TaskPayload>(value)?.try_into()
    }
}
