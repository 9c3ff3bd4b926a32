//! DTOs exposed by the JSON API endpoints.

use serde::Serialize;

use crate::domain::notice::ProcurementNotice;
use crate::view::{DerivedView, ListSummary};

/// Body of `GET /api/v1/licitacoes`.
#[derive(Debug, Serialize)]
pub struct NoticeListResponse {
    pub items: Vec<ProcurementNotice>,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub pages: Vec<Option<usize>>,
    pub summary: ListSummary,
}

impl From<DerivedView> for NoticeListResponse {
    fn from(view: DerivedView) -> Self {
        Self {
            items: view.page.items,
            page: view.page.page,
            per_page: view.page.per_page,
            total_pages: view.page.total_pages,
            pages: view.page.pages,
            summary: view.summary,
        }
    }
}
