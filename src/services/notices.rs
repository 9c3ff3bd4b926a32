use log::{error, warn};

use crate::domain::notice::ProcurementNotice;
use crate::domain::types::NoticeId;
use crate::dto::notices::{NoticeDetailPageData, NoticeListPageData};
use crate::forms::notices::NoticeListParams;
use crate::models::notice::normalize;
use crate::repository::{FavoriteReader, FavoriteWriter, NoticeListQuery, NoticeReader};
use crate::services::{ServiceError, ServiceResult};
use crate::view::{DerivedView, LOAD_ERROR_MESSAGE, NoticeListView};

pub const SAVED_MESSAGE: &str = "Licitação salva nos seus interesses.";

/// Fetches once and derives the requested page, or the message to show
/// instead.
pub async fn derive_notice_list<R>(
    repo: &R,
    params: &NoticeListParams,
) -> Result<DerivedView, String>
where
    R: NoticeReader + ?Sized,
{
    let mut view = NoticeListView::new();
    if let Err(err) = view.refresh(repo, &params.repository_query()).await {
        error!("Failed to list notices: {err}");
    }
    if view.skipped() > 0 {
        warn!("Skipped {} notices without a usable id", view.skipped());
    }

    match view.derive(&params.inputs()) {
        Some(derived) => Ok(derived),
        None => Err(view.error().unwrap_or(LOAD_ERROR_MESSAGE).to_string()),
    }
}

/// Loads the notice list page.
pub async fn load_notice_list<R>(repo: &R, params: NoticeListParams) -> NoticeListPageData
where
    R: NoticeReader + ?Sized,
{
    let view = derive_notice_list(repo, &params).await;
    NoticeListPageData::new(view, params)
}

/// Fetches a single notice by id.
pub async fn find_notice<R>(repo: &R, id: NoticeId) -> ServiceResult<ProcurementNotice>
where
    R: NoticeReader + ?Sized,
{
    let raw = repo
        .list_notices(&NoticeListQuery::new().id(id))
        .await
        .map_err(|err| {
            error!("Failed to load notice {id}: {err}");
            ServiceError::from(err)
        })?;

    raw.into_iter()
        .filter_map(|record| normalize(record).ok())
        .find(|notice| notice.id == id)
        .ok_or(ServiceError::NotFound)
}

/// Loads the detail page together with the saved flag.
pub async fn load_notice_detail<R>(repo: &R, id: NoticeId) -> ServiceResult<NoticeDetailPageData>
where
    R: NoticeReader + FavoriteReader + ?Sized,
{
    let notice = find_notice(repo, id).await?;

    let is_favorite = repo.is_favorite(id).await.unwrap_or_else(|err| {
        error!("Failed to check favorite {id}: {err}");
        false
    });

    Ok(NoticeDetailPageData {
        notice,
        is_favorite,
    })
}

/// Saves the notice as a favorite and returns the confirmation text.
pub async fn save_notice<R>(repo: &R, id: NoticeId) -> ServiceResult<String>
where
    R: FavoriteWriter + ?Sized,
{
    let message = repo.add_favorite(id).await.map_err(|err| {
        error!("Failed to save notice {id}: {err}");
        ServiceError::from(err)
    })?;

    Ok(message.unwrap_or_else(|| SAVED_MESSAGE.to_string()))
}
