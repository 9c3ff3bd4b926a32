//! Conjunctive filter criteria applied to fetched notices.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::notice::ProcurementNotice;
use crate::domain::types::RegionCode;

/// Independent filter criteria. An unset criterion always passes; a notice
/// must satisfy every criterion that is set.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    /// Lower-cased free-text query.
    pub text: Option<String>,
    /// Modality code or lower-cased fragment of the modality name.
    pub modality: Option<String>,
    pub region: Option<RegionCode>,
    /// Lower-cased fragment of the status name.
    pub status: Option<String>,
    pub published_from: Option<NaiveDate>,
    pub published_until: Option<NaiveDate>,
}

/// Lower-cases and trims a criterion, treating blank input as unset.
fn normalize(value: impl AsRef<str>) -> Option<String> {
    let trimmed = value.as_ref().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, query: impl AsRef<str>) -> Self {
        self.text = normalize(query);
        self
    }

    pub fn modality(mut self, modality: impl AsRef<str>) -> Self {
        self.modality = normalize(modality);
        self
    }

    pub fn region(mut self, region: RegionCode) -> Self {
        self.region = Some(region);
        self
    }

    pub fn status(mut self, status: impl AsRef<str>) -> Self {
        self.status = normalize(status);
        self
    }

    pub fn published_between(mut self, from: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        self.published_from = from;
        self.published_until = until;
        self
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Evaluates every set criterion against the notice.
    pub fn matches(&self, notice: &ProcurementNotice) -> bool {
        self.matches_text(notice)
            && self.matches_modality(notice)
            && self.matches_region(notice)
            && self.matches_status(notice)
            && self.matches_publication(notice)
    }

    fn matches_text(&self, notice: &ProcurementNotice) -> bool {
        let Some(query) = &self.text else {
            return true;
        };
        let haystack = format!(
            "{} {} {} {}",
            notice.object, notice.entity_name, notice.modality_name, notice.municipality
        )
        .to_lowercase();
        haystack.contains(query.as_str())
    }

    fn matches_modality(&self, notice: &ProcurementNotice) -> bool {
        let Some(modality) = &self.modality else {
            return true;
        };
        notice.modality_code.to_lowercase() == *modality
            || notice.modality_name.to_lowercase().contains(modality.as_str())
    }

    fn matches_region(&self, notice: &ProcurementNotice) -> bool {
        match &self.region {
            Some(region) => notice.region.trim().eq_ignore_ascii_case(region.as_str()),
            None => true,
        }
    }

    fn matches_status(&self, notice: &ProcurementNotice) -> bool {
        match &self.status {
            Some(status) => notice.status.to_lowercase().contains(status.as_str()),
            None => true,
        }
    }

    /// Bounds are inclusive calendar days. Notices without a parsable raw
    /// publication timestamp pass.
    fn matches_publication(&self, notice: &ProcurementNotice) -> bool {
        if self.published_from.is_none() && self.published_until.is_none() {
            return true;
        }
        let Some(published) = notice.published_timestamp() else {
            return true;
        };
        let day = published.date();
        self.published_from.is_none_or(|from| day >= from)
            && self.published_until.is_none_or(|until| day <= until)
    }
}

/// Returns the notices satisfying the criteria, preserving input order.
pub fn apply(criteria: &FilterCriteria, notices: &[ProcurementNotice]) -> Vec<ProcurementNotice> {
    notices
        .iter()
        .filter(|notice| criteria.matches(notice))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notice::fixtures::notice;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn empty_criteria_match_everything() {
        let criteria = FilterCriteria::new().text("   ").status("");
        assert!(criteria.is_empty());
        assert!(criteria.matches(&notice(1, "qualquer", "Concorrência", None)));
    }

    #[test]
    fn text_query_is_case_insensitive() {
        let criteria = FilterCriteria::new().text("livros");
        assert!(criteria.matches(&notice(1, "Livros escolares", "Pregão", None)));
        assert!(!criteria.matches(&notice(2, "Material de limpeza", "Pregão", None)));
    }

    #[test]
    fn text_query_covers_entity_modality_and_municipality() {
        let record = notice(1, "Obra", "Concorrência Eletrônica", None);
        assert!(FilterCriteria::new().text("prefeitura").matches(&record));
        assert!(FilterCriteria::new().text("CONCORRÊNCIA").matches(&record));
        assert!(FilterCriteria::new().text("campinas").matches(&record));
    }

    #[test]
    fn modality_matches_code_or_name_fragment() {
        let mut record = notice(1, "Obra", "Pregão - Eletrônico", None);
        record.modality_code = "6".to_string();

        assert!(FilterCriteria::new().modality("pregão").matches(&record));
        assert!(FilterCriteria::new().modality("6").matches(&record));
        assert!(!FilterCriteria::new().modality("concorrência").matches(&record));
    }

    #[test]
    fn region_requires_exact_code() {
        let record = notice(1, "Obra", "Pregão", None);
        let sp = RegionCode::new("sp").unwrap();
        let rj = RegionCode::new("RJ").unwrap();

        assert!(FilterCriteria::new().region(sp).matches(&record));
        assert!(!FilterCriteria::new().region(rj).matches(&record));
    }

    #[test]
    fn status_matches_fragment() {
        let record = notice(1, "Obra", "Pregão", None);
        assert!(FilterCriteria::new().status("divulgada").matches(&record));
        assert!(!FilterCriteria::new().status("homologada").matches(&record));
    }

    #[test]
    fn date_range_is_inclusive_and_fails_open() {
        let criteria = FilterCriteria::new()
            .published_between(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)));

        assert!(!criteria.matches(&notice(1, "a", "Pregão", Some("2024-02-01T00:00:00"))));
        assert!(criteria.matches(&notice(2, "b", "Pregão", Some("2024-01-31T23:59:59"))));
        assert!(criteria.matches(&notice(3, "c", "Pregão", Some("2024-01-01T00:00:00"))));
        assert!(!criteria.matches(&notice(4, "d", "Pregão", Some("2023-12-31T23:59:59"))));
        assert!(criteria.matches(&notice(5, "e", "Pregão", Some("31 de janeiro"))));
        assert!(criteria.matches(&notice(6, "f", "Pregão", None)));
    }

    #[test]
    fn open_ended_ranges() {
        let record = notice(1, "a", "Pregão", Some("2024-06-15T10:00:00"));
        let from_only = FilterCriteria::new().published_between(Some(date(2024, 6, 16)), None);
        let until_only = FilterCriteria::new().published_between(None, Some(date(2024, 6, 15)));

        assert!(!from_only.matches(&record));
        assert!(until_only.matches(&record));
    }

    #[test]
    fn apply_keeps_input_order() {
        let notices = vec![
            notice(1, "Livros didáticos", "Pregão", None),
            notice(2, "Cadeiras", "Pregão", None),
            notice(3, "Livros de literatura", "Pregão", None),
        ];

        let filtered = apply(&FilterCriteria::new().text("livros"), &notices);

        let ids: Vec<_> = filtered.iter().map(|n| n.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
