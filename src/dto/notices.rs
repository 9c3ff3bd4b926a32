use serde::Serialize;

use crate::domain::notice::ProcurementNotice;
use crate::domain::types::{PageSize, REGION_CODES};
use crate::forms::notices::NoticeListParams;
use crate::view::DerivedView;

/// Data required to render the notice list template.
#[derive(Debug, Serialize)]
pub struct NoticeListPageData {
    /// Present when the fetch succeeded.
    pub view: Option<DerivedView>,
    pub error: Option<String>,
    /// Submitted parameters echoed back into the filter form.
    pub params: NoticeListParams,
    pub has_filters: bool,
    /// Validated region code, upper-cased for the selector.
    pub selected_region: Option<String>,
    pub page_sizes: [usize; 3],
    pub regions: [&'static str; 27],
}

impl NoticeListPageData {
    pub fn new(view: Result<DerivedView, String>, params: NoticeListParams) -> Self {
        let has_filters = params.has_filters();
        let selected_region = params.region().map(|region| region.to_string());
        let (view, error) = match view {
            Ok(view) => (Some(view), None),
            Err(message) => (None, Some(message)),
        };
        Self {
            view,
            error,
            params,
            has_filters,
            selected_region,
            page_sizes: PageSize::OPTIONS,
            regions: REGION_CODES,
        }
    }
}

/// Data required to render a single notice.
#[derive(Debug, Serialize)]
pub struct NoticeDetailPageData {
    pub notice: ProcurementNotice,
    /// Whether the notice is already saved (and therefore tracked).
    pub is_favorite: bool,
}
