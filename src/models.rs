//! Frontend Models
//!
//! Data structures matching the remote careers API.

use serde::{Deserialize, Serialize};

use crate::config::CAREERS_PER_PAGE;

/// One career opportunity record as the API returns it.
///
/// Records are immutable after deserialization; navigation or reload
/// discards them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    /// Path relative to the CRM host, absent when no image was uploaded.
    #[serde(default)]
    pub image: Option<String>,
    /// Encoded as 0/1 by the source system.
    #[serde(default)]
    pub is_popular: u8,
    /// Free text, items separated by `;` or newline.
    #[serde(default)]
    pub why_this: Option<String>,
    /// Same delimited format as `why_this`.
    #[serde(default)]
    pub requirement: Option<String>,
}

impl Career {
    pub fn popular(&self) -> bool {
        self.is_popular != 0
    }

    pub fn overview_text(&self) -> &str {
        self.overview.as_deref().unwrap_or("")
    }
}

/// Pagination block of the listing response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope {
    pub data: Vec<Career>,
    pub current_page: u32,
    pub last_page: u32,
    pub total: u32,
    pub per_page: u32,
}

/// Top-level listing response: `{ rows: { ... }, totalCareer }`.
///
/// `totalCareer`, when present, overrides `rows.total`.
#[derive(Debug, Clone, Deserialize)]
pub struct CareersResponse {
    pub rows: PageEnvelope,
    #[serde(rename = "totalCareer", default)]
    pub total_career: Option<u32>,
}

/// Pagination metadata the listing controller derives after every
/// transition: from the API envelope when unfiltered, recomputed locally
/// when a search or category filter is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u32,
    pub per_page: u32,
}

impl PaginationMeta {
    /// State before anything has been fetched: zero pages, clamped to page 1.
    pub fn empty() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            total_items: 0,
            per_page: CAREERS_PER_PAGE as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_envelope_deserializes() {
        let json = r#"{
            "rows": {
                "data": [
                    {"id": 1, "name": "Software Engineer", "overview": "Builds software", "image": "/img/se.png", "is_popular": 1, "why_this": "A;B", "requirement": "C"},
                    {"id": 2, "name": "Doctor", "is_popular": 0}
                ],
                "current_page": 1,
                "last_page": 4,
                "total": 40,
                "per_page": 12
            },
            "totalCareer": 41
        }"#;

        let resp: CareersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.rows.data.len(), 2);
        assert_eq!(resp.rows.last_page, 4);
        assert_eq!(resp.total_career, Some(41));

        let first = &resp.rows.data[0];
        assert!(first.popular());
        assert_eq!(first.overview_text(), "Builds software");

        let second = &resp.rows.data[1];
        assert!(!second.popular());
        assert_eq!(second.image, None);
        assert_eq!(second.overview_text(), "");
    }

    #[test]
    fn test_detail_without_id_is_rejected() {
        let json = r#"{"name": "Mystery", "overview": "no id field"}"#;
        assert!(serde_json::from_str::<Career>(json).is_err());
    }

    #[test]
    fn test_empty_meta_is_clamped_to_page_one() {
        let meta = PaginationMeta::empty();
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.total_pages, 0);
        assert_eq!(meta.per_page, 12);
    }
}
