use serde::Deserialize;
use serde_json::Value;

use crate::domain::format::format_timestamp;
use crate::domain::notification::{Notification, NotificationKind};
use crate::domain::types::TypeConstraintError;
use crate::models::fields::{flag, parse_id, record, scalar_text, text_or_placeholder};

/// Envelope returned by `GET /notificacoes/listar`.
#[derive(Debug, Default, Deserialize)]
pub struct NotificationListResponse {
    #[serde(default)]
    pub dados: Vec<Value>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NotificationPayload {
    pub id: Value,
    pub titulo: Value,
    pub mensagem: Value,
    pub tipo: Value,
    pub lida: Value,
    pub criada_em: Value,
}

impl TryFrom<NotificationPayload> for Notification {
    type Error = TypeConstraintError;

    fn try_from(payload: NotificationPayload) -> Result<Self, Self::Error> {
        Ok(Notification {
            id: parse_id(&payload.id)?,
            title: text_or_placeholder(&payload.titulo),
            message: scalar_text(&payload.mensagem).unwrap_or_default(),
            kind: NotificationKind::from_wire(scalar_text(&payload.tipo).as_deref()),
            read: flag(&payload.lida),
            created_at: format_timestamp(scalar_text(&payload.criada_em).as_deref()),
        })
    }
}

impl TryFrom<Value> for Notification {
    type Error = TypeConstraintError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        record::<NotificationPayload>(value)?.try_into()
    }
}
