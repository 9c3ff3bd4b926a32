//! View controller for the notice list: fetch state plus the
//! filter → sort → paginate derivation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::filter::{FilterCriteria, apply};
use crate::domain::notice::{ProcurementNotice, sort_by_publication_desc};
use crate::domain::types::PageSize;
use crate::models::notice::{RawNotice, normalize};
use crate::pagination::Paginated;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{NoticeListQuery, NoticeReader};

/// Message shown when the notice list cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Erro ao carregar licitações.";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Ready(Vec<ProcurementNotice>),
    Error(String),
}

/// Table or card layout for the list page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl ViewMode {
    /// Anything other than `cards` selects the table.
    pub fn from_request(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("cards") => ViewMode::Cards,
            _ => ViewMode::Table,
        }
    }
}

/// Ephemeral inputs of one derivation.
#[derive(Clone, Debug, Default)]
pub struct ViewInputs {
    pub criteria: FilterCriteria,
    /// Requested page; any integer, clamped during derivation.
    pub page: i64,
    pub page_size: PageSize,
    pub view_mode: ViewMode,
}

/// Counts over the filtered sequence (not only the visible page).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ListSummary {
    pub total: usize,
    pub auctions: usize,
    pub others: usize,
    pub by_modality: BTreeMap<String, usize>,
}

impl ListSummary {
    fn from_notices(notices: &[ProcurementNotice]) -> Self {
        let mut summary = ListSummary {
            total: notices.len(),
            ..Default::default()
        };
        for notice in notices {
            if notice.is_auction() {
                summary.auctions += 1;
            }
            *summary
                .by_modality
                .entry(notice.modality_name.clone())
                .or_default() += 1;
        }
        summary.others = summary.total - summary.auctions;
        summary
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct DerivedView {
    pub page: Paginated<ProcurementNotice>,
    pub summary: ListSummary,
    pub view_mode: ViewMode,
}

/// Holds one fetched record set and derives page views from it.
#[derive(Debug, Default)]
pub struct NoticeListView {
    state: FetchState,
    skipped: usize,
}

impl NoticeListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Records dropped during the last successful refresh because their
    /// identifier was unusable.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, FetchState::Ready(_))
    }

    /// Enters `Loading` from any state. Previously held data is discarded.
    pub fn begin_refresh(&mut self) {
        self.state = FetchState::Loading;
    }

    /// Applies a completed fetch. The most recently applied result wins.
    ///
    /// A failed fetch moves the view to `Error` and hands the cause back to
    /// the caller for logging.
    pub fn finish_refresh(
        &mut self,
        result: RepositoryResult<Vec<RawNotice>>,
    ) -> RepositoryResult<()> {
        match result {
            Ok(raw) => {
                let total = raw.len();
                let notices: Vec<ProcurementNotice> =
                    raw.into_iter().filter_map(|r| normalize(r).ok()).collect();
                self.skipped = total - notices.len();
                self.state = FetchState::Ready(notices);
                Ok(())
            }
            Err(err) => {
                self.skipped = 0;
                self.state = FetchState::Error(error_message(&err));
                Err(err)
            }
        }
    }

    /// Fetches from the repository and applies the result.
    pub async fn refresh<R>(&mut self, repo: &R, query: &NoticeListQuery) -> RepositoryResult<()>
    where
        R: NoticeReader + ?Sized,
    {
        self.begin_refresh();
        let result = repo.list_notices(query).await;
        self.finish_refresh(result)
    }

    /// The error message when the last refresh failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Filters, sorts and paginates the held records. Yields nothing unless
    /// the view is `Ready`.
    pub fn derive(&self, inputs: &ViewInputs) -> Option<DerivedView> {
        let FetchState::Ready(notices) = &self.state else {
            return None;
        };

        let mut filtered = apply(&inputs.criteria, notices);
        sort_by_publication_desc(&mut filtered);

        Some(DerivedView {
            summary: ListSummary::from_notices(&filtered),
            page: Paginated::from_slice(&filtered, inputs.page_size, inputs.page),
            view_mode: inputs.view_mode,
        })
    }
}

fn error_message(err: &RepositoryError) -> String {
    match err {
        RepositoryError::Status(code) => format!("{LOAD_ERROR_MESSAGE} (HTTP {code})"),
        _ => LOAD_ERROR_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(id: i64, object: &str, modality: &str, published: &str) -> RawNotice {
        RawNotice(json!({
            "id": id,
            "objeto": object,
            "modalidade": modality,
            "data_publicacao": published,
        }))
    }

    fn ready_view(records: Vec<RawNotice>) -> NoticeListView {
        let mut view = NoticeListView::new();
        view.begin_refresh();
        view.finish_refresh(Ok(records)).unwrap();
        view
    }

    fn inputs(page: i64) -> ViewInputs {
        ViewInputs {
            page,
            ..Default::default()
        }
    }

    #[test]
    fn derivation_requires_ready_state() {
        let mut view = NoticeListView::new();
        assert!(view.derive(&inputs(1)).is_none());

        view.begin_refresh();
        assert_eq!(view.state(), &FetchState::Loading);
        assert!(view.derive(&inputs(1)).is_none());

        let result = view.finish_refresh(Err(RepositoryError::Transport("refused".into())));
        assert!(result.is_err());
        assert!(matches!(view.state(), FetchState::Error(_)));
        assert!(view.derive(&inputs(1)).is_none());
    }

    #[test]
    fn retry_after_failure_recovers_data() {
        let mut view = NoticeListView::new();

        view.begin_refresh();
        view.finish_refresh(Err(RepositoryError::Transport("refused".into())))
            .unwrap_err();
        assert_eq!(view.error(), Some(LOAD_ERROR_MESSAGE));

        view.begin_refresh();
        assert_eq!(view.state(), &FetchState::Loading);
        assert_eq!(view.error(), None);

        view.finish_refresh(Ok(vec![
            raw(1, "Livros", "Pregão", "2024-01-01"),
            raw(2, "Merenda", "Dispensa", "2024-02-01"),
        ]))
        .unwrap();

        let derived = view.derive(&inputs(1)).unwrap();
        assert_eq!(view.error(), None);
        assert_eq!(derived.page.total_items, 2);
        assert_eq!(derived.page.items[0].object, "Merenda");
    }

    #[test]
    fn failure_discards_previous_records() {
        let mut view = ready_view(vec![raw(1, "Livros", "Pregão", "2024-01-01")]);
        assert!(view.is_ready());

        view.begin_refresh();
        view.finish_refresh(Err(RepositoryError::Status(500))).unwrap_err();

        assert_eq!(
            view.state(),
            &FetchState::Error("Erro ao carregar licitações. (HTTP 500)".to_string())
        );
    }

    #[test]
    fn last_completed_refresh_wins() {
        let mut view = NoticeListView::new();
        view.begin_refresh();
        view.begin_refresh();
        view.finish_refresh(Ok(vec![raw(1, "Primeira", "Pregão", "2024-01-01")]))
            .unwrap();
        view.finish_refresh(Ok(vec![
            raw(2, "Segunda", "Pregão", "2024-01-01"),
            raw(3, "Terceira", "Pregão", "2024-01-02"),
        ]))
        .unwrap();

        let derived = view.derive(&inputs(1)).unwrap();
        assert_eq!(derived.summary.total, 2);
    }

    #[test]
    fn derives_sorted_filtered_page_with_summary() {
        let view = ready_view(vec![
            raw(1, "Livros escolares", "Pregão Eletrônico", "2024-01-10T08:00:00"),
            raw(2, "Cadeiras", "Concorrência", "2024-03-10T08:00:00"),
            raw(3, "Livros técnicos", "Dispensa", "2024-02-10T08:00:00"),
        ]);

        let all = view.derive(&inputs(1)).unwrap();
        let ids: Vec<_> = all.page.items.iter().map(|n| n.id.get()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(all.summary.total, 3);
        assert_eq!(all.summary.auctions, 1);
        assert_eq!(all.summary.others, 2);
        assert_eq!(all.summary.by_modality.get("Concorrência"), Some(&1));

        let books = view
            .derive(&ViewInputs {
                criteria: FilterCriteria::new().text("livros"),
                ..inputs(1)
            })
            .unwrap();
        let ids: Vec<_> = books.page.items.iter().map(|n| n.id.get()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let records = (1..=23)
            .map(|id| raw(id, "Obra", "Pregão", "2024-01-01"))
            .collect();
        let view = ready_view(records);

        let derived = view.derive(&inputs(5)).unwrap();

        assert_eq!(derived.page.page, 3);
        assert_eq!(derived.page.items.len(), 3);
    }

    #[test]
    fn records_with_invalid_ids_are_skipped() {
        let view = ready_view(vec![
            raw(1, "Obra", "Pregão", "2024-01-01"),
            RawNotice(json!({ "objeto": "sem id" })),
        ]);

        assert_eq!(view.skipped(), 1);
        assert_eq!(view.derive(&inputs(1)).unwrap().summary.total, 1);
    }

    #[test]
    fn derivation_is_idempotent() {
        let view = ready_view(vec![
            raw(1, "Obra", "Pregão", "2024-01-01"),
            raw(2, "Obra", "Pregão", "2024-01-01"),
        ]);

        let first = view.derive(&inputs(1)).unwrap();
        let second = view.derive(&inputs(1)).unwrap();

        assert_eq!(first.page.items, second.page.items);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn view_mode_parsing() {
        assert_eq!(ViewMode::from_request(Some("cards")), ViewMode::Cards);
        assert_eq!(ViewMode::from_request(Some("CARDS ")), ViewMode::Cards);
        assert_eq!(ViewMode::from_request(Some("grid")), ViewMode::Table);
        assert_eq!(ViewMode::from_request(None), ViewMode::Table);
    }
}
