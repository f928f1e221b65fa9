//! App Configuration
//!
//! Deployment-level constants. The app treats these as fixed inputs; there
//! is no runtime configuration system for a static site.

/// Base URL of the careers API.
pub const API_BASE_URL: &str = "https://www.ehlcrm.theskyroute.com/api";

/// Paginated careers listing endpoint, relative to [`API_BASE_URL`].
pub const CAREERS_ENDPOINT: &str = "/test/top-future-career";

/// Single-career detail endpoint, relative to [`API_BASE_URL`].
pub const CAREER_DETAILS_ENDPOINT: &str = "/future-career-details";

/// Career images come back as paths relative to the CRM host, not the API.
pub const IMAGE_BASE_URL: &str = "https://ehlcrm.theskyroute.com";

/// Careers shown per listing page. The API uses the same page size.
pub const CAREERS_PER_PAGE: usize = 12;

/// Delay applied to search input before a reconciliation runs.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Viewport width below which pagination switches to the narrow layout.
pub const NARROW_VIEWPORT_PX: i32 = 768;

/// Site name used in the document title.
pub const SITE_NAME: &str = "Education Hub";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_join_onto_base_url() {
        // Endpoints are path fragments appended directly to the base.
        assert!(!API_BASE_URL.ends_with('/'));
        assert!(CAREERS_ENDPOINT.starts_with('/'));
        assert!(CAREER_DETAILS_ENDPOINT.starts_with('/'));
        assert!(!IMAGE_BASE_URL.ends_with('/'));
    }

    #[test]
    fn test_page_size_matches_api() {
        assert_eq!(CAREERS_PER_PAGE, 12);
    }
}
