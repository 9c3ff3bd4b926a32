//! Query string of the notice list page and the JSON endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::filter::FilterCriteria;
use crate::domain::types::{PageSize, RegionCode};
use crate::repository::NoticeListQuery;
use crate::view::{ViewInputs, ViewMode};

/// Raw list parameters. Every field is kept as text so a malformed value
/// falls back to its default instead of rejecting the request.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct NoticeListParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub modalidade: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(default)]
    pub situacao: Option<String>,
    #[serde(default)]
    pub data_ini: Option<String>,
    #[serde(default)]
    pub data_fim: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub per_page: Option<String>,
    #[serde(default)]
    pub view: Option<String>,
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

impl NoticeListParams {
    /// Region codes outside the known list are ignored.
    pub fn region(&self) -> Option<RegionCode> {
        self.uf
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| RegionCode::new(s).ok())
    }

    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new()
            .text(self.q.as_deref().unwrap_or_default())
            .modality(self.modalidade.as_deref().unwrap_or_default())
            .status(self.situacao.as_deref().unwrap_or_default())
            .published_between(
                parse_date(self.data_ini.as_deref()),
                parse_date(self.data_fim.as_deref()),
            );
        if let Some(region) = self.region() {
            criteria = criteria.region(region);
        }
        criteria
    }

    /// Narrowing forwarded to the remote API; local filtering still applies.
    pub fn repository_query(&self) -> NoticeListQuery {
        let mut query = NoticeListQuery::new()
            .search(self.q.as_deref().unwrap_or_default())
            .modality(self.modalidade.as_deref().unwrap_or_default());
        if let Some(region) = self.region() {
            query = query.region(region);
        }
        query
    }

    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(1)
    }

    pub fn page_size(&self) -> PageSize {
        PageSize::from_request(self.per_page.as_deref().and_then(|s| s.trim().parse().ok()))
    }

    pub fn view_mode(&self) -> ViewMode {
        ViewMode::from_request(self.view.as_deref())
    }

    pub fn inputs(&self) -> ViewInputs {
        ViewInputs {
            criteria: self.criteria(),
            page: self.page(),
            page_size: self.page_size(),
            view_mode: self.view_mode(),
        }
    }

    /// True when any filter field carries a value; drives the "clear filters"
    /// link.
    pub fn has_filters(&self) -> bool {
        !self.criteria().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> NoticeListParams {
        let query = pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        actix_web::web::Query::<NoticeListParams>::from_query(&query)
            .unwrap()
            .into_inner()
    }

    #[test]
    fn defaults_when_empty() {
        let p = params(&[]);
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size().get(), 10);
        assert_eq!(p.view_mode(), ViewMode::Table);
        assert!(!p.has_filters());
        assert_eq!(p.repository_query(), NoticeListQuery::new());
    }

    #[test]
    fn malformed_values_fall_back() {
        let p = params(&[("page", "abc"), ("per_page", "15"), ("uf", "XX"), ("data_ini", "ontem")]);
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size().get(), 10);
        assert!(p.region().is_none());
        assert!(p.criteria().published_from.is_none());
    }

    #[test]
    fn builds_criteria_and_remote_query() {
        let p = params(&[
            ("q", "Livros"),
            ("modalidade", "pregão"),
            ("uf", "sp"),
            ("situacao", "Divulgada"),
            ("data_ini", "2024-01-01"),
            ("data_fim", "2024-01-31"),
            ("page", "-3"),
            ("per_page", "50"),
            ("view", "cards"),
        ]);

        let criteria = p.criteria();
        assert_eq!(criteria.text.as_deref(), Some("livros"));
        assert_eq!(criteria.region.as_ref().map(|r| r.as_str()), Some("SP"));
        assert_eq!(criteria.status.as_deref(), Some("divulgada"));
        assert_eq!(criteria.published_from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(criteria.published_until, NaiveDate::from_ymd_opt(2024, 1, 31));

        let inputs = p.inputs();
        assert_eq!(inputs.page, -3);
        assert_eq!(inputs.page_size.get(), 50);
        assert_eq!(inputs.view_mode, ViewMode::Cards);

        assert_eq!(
            p.repository_query().to_params(),
            vec![
                ("busca", "Livros".to_string()),
                ("modalidade", "pregão".to_string()),
                ("uf", "SP".to_string()),
            ]
        );
        assert!(p.has_filters());
    }
}
