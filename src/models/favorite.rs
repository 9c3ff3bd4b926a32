use serde::Deserialize;
use serde_json::Value;

use crate::domain::favorite::Favorite;
use crate::domain::format::format_timestamp;
use crate::domain::types::TypeConstraintError;
use crate::models::fields::{parse_id, record, scalar_text, text_or_placeholder};

/// Envelope returned by `GET /interesses/listar`. Records stay untyped so
/// one malformed entry cannot fail the whole list.
#[derive(Debug, Default, Deserialize)]
pub struct FavoriteListResponse {
    #[serde(default)]
    pub dados: Vec<Value>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FavoritePayload {
    pub id: Value,
    pub orgao: Value,
    pub objeto: Value,
    pub municipio: Value,
    pub uf: Value,
    pub data_publicacao: Value,
    pub status: Value,
}

/// Envelope returned by `GET /interesses/verificar`.
#[derive(Debug, Default, Deserialize)]
pub struct FavoriteCheckResponse {
    #[serde(default)]
    pub salvo: bool,
}

/// Envelope carrying a human readable confirmation.
#[derive(Debug, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub mensagem: Option<String>,
}

impl TryFrom<FavoritePayload> for Favorite {
    type Error = TypeConstraintError;

    fn try_from(payload: FavoritePayload) -> Result<Self, Self::Error> {
        Ok(Favorite {
            id: parse_id(&payload.id)?,
            entity_name: text_or_placeholder(&payload.orgao),
            object: text_or_placeholder(&payload.objeto),
            municipality: text_or_placeholder(&payload.municipio),
            region: text_or_placeholder(&payload.uf),
            published_at: format_timestamp(scalar_text(&payload.data_publicacao).as_deref()),
            status: scalar_text(&payload.status).and_then(|s| s.parse().ok()),
        })
    }
}

impl TryFrom<Value> for Favorite {
    type Error = TypeConstraintError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        record::<FavoritePayload>(value)?.try_into()
    }
}
