//! Flat display record for a procurement notice and its ordering policy.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::domain::format::parse_timestamp;
use crate::domain::types::NoticeId;

/// A procurement notice ready for rendering.
///
/// Every `String` field holds either a meaningful value or
/// [`crate::domain::format::PLACEHOLDER`]. Fields that only drive conditional
/// markup (links, legal basis, complementary text) stay optional.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ProcurementNotice {
    pub id: NoticeId,
    pub entity_name: String,
    pub entity_cnpj: String,
    pub unit_name: String,
    pub municipality: String,
    pub region: String,
    pub object: String,
    pub purchase_number: String,
    pub process_number: String,
    pub pncp_id: String,
    pub modality_code: String,
    pub modality_name: String,
    pub status: String,
    pub dispute_mode: String,
    pub published_at: String,
    pub opening_at: String,
    pub closing_at: String,
    pub estimated_value: String,
    pub srp: bool,
    pub link: Option<String>,
    pub complementary_info: Option<String>,
    pub legal_basis: Option<LegalBasis>,
    pub items: Vec<NoticeItem>,
    pub attachments: Vec<NoticeAttachment>,
    /// Publication timestamp exactly as received; used for filtering and
    /// ordering, never for display.
    pub published_raw: Option<String>,
    /// Original payload, kept for fields not promoted to the top level.
    pub raw: serde_json::Value,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LegalBasis {
    pub name: String,
    pub description: Option<String>,
}

/// One line of the notice's item list.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NoticeItem {
    pub number: String,
    pub description: String,
    pub quantity: Option<String>,
    pub unit: Option<String>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NoticeAttachment {
    pub name: String,
    pub url: Option<String>,
}

impl ProcurementNotice {
    /// Parsed raw publication timestamp, if present and well-formed.
    pub fn published_timestamp(&self) -> Option<NaiveDateTime> {
        self.published_raw.as_deref().and_then(parse_timestamp)
    }

    /// Key used by [`sort_by_publication_desc`]; missing dates count as the
    /// Unix epoch.
    pub fn publication_sort_key(&self) -> NaiveDateTime {
        self.published_timestamp()
            .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH.naive_utc())
    }

    /// Whether the modality name identifies an auction (pregão).
    pub fn is_auction(&self) -> bool {
        self.modality_name.to_lowercase().contains("pregão")
    }
}

/// Orders notices most recent first. The sort is stable, so notices sharing a
/// publication timestamp keep their fetched order.
pub fn sort_by_publication_desc(notices: &mut [ProcurementNotice]) {
    notices.sort_by_key(|notice| Reverse(notice.publication_sort_key()));
}
