use crate::dto::api::NoticeListResponse;
use crate::forms::notices::NoticeListParams;
use crate::repository::NoticeReader;
use crate::services::notices::derive_notice_list;
use crate::services::{ServiceError, ServiceResult};

/// Derived notice list for `/api/v1/licitacoes`.
pub async fn list_notices<R>(
    repo: &R,
    params: &NoticeListParams,
) -> ServiceResult<NoticeListResponse>
where
    R: NoticeReader + ?Sized,
{
    derive_notice_list(repo, params)
        .await
        .map(NoticeListResponse::from)
        .map_err(ServiceError::Upstream)
}
