//! Repository backed by the remote procurement HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;

use crate::domain::dashboard::DashboardSummary;
use crate::domain::favorite::Favorite;
use crate::domain::notification::Notification;
use crate::domain::tracking::{ChecklistTask, NewTask};
use crate::domain::types::{NoticeId, NotificationId, TaskId, TrackingStatus, TypeConstraintError};
use crate::models::dashboard::DashboardPayload;
use crate::models::favorite::{FavoriteCheckResponse, FavoriteListResponse, MessageResponse};
use crate::models::notice::{NoticeListResponse, RawNotice};
use crate::models::notification::NotificationListResponse;
use crate::models::tracking::TaskListResponse;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DashboardReader, FavoriteReader, FavoriteWriter, NoticeListQuery, NoticeReader,
    NotificationReader, NotificationWriter, TrackingReader, TrackingWriter,
};

type Params = Vec<(&'static str, String)>;

/// Thin reqwest wrapper; cloning shares the connection pool.
#[derive(Clone, Debug)]
pub struct HttpRepository {
    client: Client,
    base_url: String,
}

impl HttpRepository {
    /// Builds a client for `base_url`. Without a timeout, requests wait until
    /// the remote side answers or drops the connection.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> RepositoryResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RepositoryError::Unexpected(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> RepositoryResult<Response> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .request(method, &url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
    ) -> RepositoryResult<T> {
        let response = self.send(Method::GET, path, params).await?;
        Ok(response.json::<T>().await?)
    }
}

fn notice_param(notice_id: NoticeId) -> Params {
    vec![("licitacao_id", notice_id.to_string())]
}

/// Converts wire records, skipping the ones without a usable id.
fn convert_all<P, T>(payloads: Vec<P>, what: &str) -> Vec<T>
where
    T: TryFrom<P, Error = TypeConstraintError>,
{
    payloads
        .into_iter()
        .filter_map(|payload| match T::try_from(payload) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Skipping {what}: {err}");
                None
            }
        })
        .collect()
}

#[async_trait]
impl NoticeReader for HttpRepository {
    async fn list_notices(&self, query: &NoticeListQuery) -> RepositoryResult<Vec<RawNotice>> {
        let response: NoticeListResponse = self
            .get_json("/licitacoes/listar_banco", &query.to_params())
            .await?;
        Ok(response.dados)
    }
}

#[async_trait]
impl DashboardReader for HttpRepository {
    async fn dashboard_summary(&self) -> RepositoryResult<DashboardSummary> {
        let payload: DashboardPayload = self.get_json("/dashboard/resumo", &Vec::new()).await?;
        Ok(payload.into())
    }
}

#[async_trait]
impl FavoriteReader for HttpRepository {
    async fn list_favorites(&self) -> RepositoryResult<Vec<Favorite>> {
        let response: FavoriteListResponse =
            self.get_json("/interesses/listar", &Vec::new()).await?;
        Ok(convert_all(response.dados, "favorite"))
    }

    async fn is_favorite(&self, notice_id: NoticeId) -> RepositoryResult<bool> {
        let response: FavoriteCheckResponse = self
            .get_json("/interesses/verificar", &notice_param(notice_id))
            .await?;
        Ok(response.salvo)
    }
}

#[async_trait]
impl FavoriteWriter for HttpRepository {
    async fn add_favorite(&self, notice_id: NoticeId) -> RepositoryResult<Option<String>> {
        let response = self
            .send(Method::POST, "/interesses/adicionar", &notice_param(notice_id))
            .await?;
        let body = response.text().await?;
        Ok(serde_json::from_str::<MessageResponse>(&body)
            .ok()
            .and_then(|message| message.mensagem))
    }

    async fn remove_favorite(&self, notice_id: NoticeId) -> RepositoryResult<()> {
        let path = format!("/interesses/remover/{notice_id}");
        self.send(Method::DELETE, &path, &Vec::new()).await?;
        Ok(())
    }
}

#[async_trait]
impl TrackingReader for HttpRepository {
    async fn list_tasks(&self, notice_id: NoticeId) -> RepositoryResult<Vec<ChecklistTask>> {
        let response: TaskListResponse = self
            .get_json("/acompanhamento/tarefas", &notice_param(notice_id))
            .await?;
        Ok(convert_all(response.tarefas, "task"))
    }
}

#[async_trait]
impl TrackingWriter for HttpRepository {
    async fn start_tracking(&self, notice_id: NoticeId) -> RepositoryResult<()> {
        self.send(Method::POST, "/acompanhamento/iniciar", &notice_param(notice_id))
            .await?;
        Ok(())
    }

    async fn set_status(
        &self,
        notice_id: NoticeId,
        status: TrackingStatus,
    ) -> RepositoryResult<()> {
        let mut params = notice_param(notice_id);
        params.push(("status", status.as_str().to_string()));
        self.send(Method::PATCH, "/acompanhamento/status", &params)
            .await?;
        Ok(())
    }

    async fn add_task(&self, task: &NewTask) -> RepositoryResult<()> {
        let mut params = notice_param(task.notice_id);
        params.push(("titulo", task.title.as_str().to_string()));
        params.push(("descricao", task.description.clone().unwrap_or_default()));
        self.send(Method::POST, "/acompanhamento/tarefas/adicionar", &params)
            .await?;
        Ok(())
    }

    async fn complete_task(&self, task_id: TaskId) -> RepositoryResult<()> {
        let path = format!("/acompanhamento/tarefas/concluir/{task_id}");
        self.send(Method::PATCH, &path, &Vec::new()).await?;
        Ok(())
    }

    async fn remove_task(&self, task_id: TaskId) -> RepositoryResult<()> {
        let path = format!("/acompanhamento/tarefas/remover/{task_id}");
        self.send(Method::DELETE, &path, &Vec::new()).await?;
        Ok(())
    }
}

#[async_trait]
impl NotificationReader for HttpRepository {
    async fn list_notifications(&self) -> RepositoryResult<Vec<Notification>> {
        let response: NotificationListResponse =
            self.get_json("/notificacoes/listar", &Vec::new()).await?;
        Ok(convert_all(response.dados, "notification"))
    }
}

#[async_trait]
impl NotificationWriter for HttpRepository {
    async fn mark_notification_read(&self, id: NotificationId) -> RepositoryResult<()> {
        let path = format!("/notificacoes/lida/{id}");
        self.send(Method::PATCH, &path, &Vec::new()).await?;
        Ok(())
    }

    async fn remove_notification(&self, id: NotificationId) -> RepositoryResult<()> {
        let path = format!("/notificacoes/remover/{id}");
        self.send(Method::DELETE, &path, &Vec::new()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let repo = HttpRepository::new("http://localhost:8000/", None).unwrap();
        assert_eq!(repo.base_url(), "http://localhost:8000");
    }
}
