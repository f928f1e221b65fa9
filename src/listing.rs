//! Listing State Controller
//!
//! Owns the {search query, category filter, current page} combination for
//! the listing page. Every transition is a pure function on an immutable
//! [`ListingState`] snapshot that returns the next snapshot together with
//! the side effect the caller must perform: re-query the API or re-slice
//! the already fetched set. Components stay free of transition logic and
//! the whole state machine is unit-testable without a DOM.
//!
//! The API only supports page-based retrieval of the unfiltered set, so
//! search and category filters run client-side over whatever the last
//! unfiltered fetch returned. When the remote dataset spans more than one
//! page, filtered results therefore under-report. The API exposes no
//! search or filter parameters, so the alternative would be walking every
//! page up front before filtering; this module keeps the lighter
//! single-page behavior.

use crate::config::CAREERS_PER_PAGE;
use crate::models::{Career, PageEnvelope, PaginationMeta};

/// Name substrings matched by the `Business` category.
const BUSINESS_ROLES: [&str; 3] = ["financial analyst", "marketing manager", "accountant"];

/// Category filter keys exposed by the filter bar. Exactly one is active
/// at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKey {
    #[default]
    All,
    Popular,
    Engineering,
    Business,
    Healthcare,
}

impl FilterKey {
    /// Display order in the filter bar.
    pub const ALL_KEYS: [FilterKey; 5] = [
        FilterKey::All,
        FilterKey::Popular,
        FilterKey::Engineering,
        FilterKey::Business,
        FilterKey::Healthcare,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterKey::All => "All Careers",
            FilterKey::Popular => "Popular",
            FilterKey::Engineering => "Engineering",
            FilterKey::Business => "Business",
            FilterKey::Healthcare => "Healthcare",
        }
    }

    /// Category predicate applied after the search match.
    pub fn matches(self, career: &Career) -> bool {
        let name = career.name.to_lowercase();
        match self {
            FilterKey::All => true,
            FilterKey::Popular => career.popular(),
            FilterKey::Engineering => name.contains("engineer"),
            FilterKey::Business => BUSINESS_ROLES.iter().any(|role| name.contains(role)),
            FilterKey::Healthcare => name.contains("doctor"),
        }
    }
}

/// Side effect a transition asks the caller to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    /// Delegate to the API client for the given page. The response's own
    /// pagination envelope becomes the new metadata.
    Fetch(u32),
    /// Re-slice the loaded set locally. Never fails; an empty result is a
    /// valid outcome, distinct from the error state.
    Slice,
    /// Transition rejected; state is unchanged and nothing runs.
    Keep,
}

/// Immutable snapshot of the listing page state.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    /// Normalized search query: lower-cased, trimmed. Empty means no search.
    pub query: String,
    pub filter: FilterKey,
    /// 1-based, kept within `[1, meta.total_pages]` after reconciliation
    /// (clamped to 1 when there are no results).
    pub page: u32,
    /// Careers from the most recent unfiltered fetch. Local filtering
    /// operates over this set only.
    pub loaded: Vec<Career>,
    pub meta: PaginationMeta,
    /// True while an API reconciliation is in flight. Blocks `go_to_page`
    /// from starting a second overlapping transition; it does not cancel
    /// the first.
    pub loading: bool,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            filter: FilterKey::All,
            page: 1,
            loaded: Vec::new(),
            meta: PaginationMeta::empty(),
            loading: false,
        }
    }

    /// No search and no category filter: the API's own pagination applies.
    pub fn is_unfiltered(&self) -> bool {
        self.filter == FilterKey::All && self.query.is_empty()
    }

    /// Normalize and store a new search query, back to page 1.
    pub fn set_search_query(&self, raw: &str) -> (Self, Reconcile) {
        let mut next = self.clone();
        next.query = normalize_query(raw);
        next.page = 1;
        let effect = if next.is_unfiltered() {
            Reconcile::Fetch(1)
        } else {
            Reconcile::Slice
        };
        (next, effect)
    }

    /// Activate a category filter, back to page 1. Switching to `All`
    /// clears the search box and always revalidates against the server
    /// rather than trusting the local set.
    pub fn set_filter(&self, filter: FilterKey) -> (Self, Reconcile) {
        let mut next = self.clone();
        next.filter = filter;
        next.page = 1;
        if filter == FilterKey::All {
            next.query.clear();
            (next, Reconcile::Fetch(1))
        } else {
            (next, Reconcile::Slice)
        }
    }

    /// Navigate to `page`. Rejected while a reconciliation is in flight,
    /// when `page` is the current page, or when it falls outside
    /// `[1, total_pages]`.
    pub fn go_to_page(&self, page: u32) -> (Self, Reconcile) {
        if self.loading || page == self.page || page < 1 || page > self.meta.total_pages {
            return (self.clone(), Reconcile::Keep);
        }
        let mut next = self.clone();
        next.page = page;
        let effect = if next.is_unfiltered() {
            Reconcile::Fetch(page)
        } else {
            Reconcile::Slice
        };
        (next, effect)
    }

    /// Fold a successful unfiltered fetch into the snapshot. The envelope's
    /// items are rendered as-is, with no further client slicing.
    pub fn apply_fetched(&self, envelope: PageEnvelope) -> Self {
        let mut next = self.clone();
        next.page = envelope.current_page;
        next.meta = PaginationMeta {
            current_page: envelope.current_page,
            total_pages: envelope.last_page,
            total_items: envelope.total,
            per_page: envelope.per_page,
        };
        next.loaded = envelope.data;
        next.loading = false;
        next
    }

    /// Filter the loaded set by query and category, recompute pagination
    /// metadata, and slice out the current page.
    pub fn reconcile_local(&self) -> (Vec<Career>, Self) {
        let matched: Vec<&Career> = self
            .loaded
            .iter()
            .filter(|c| matches_query(c, &self.query) && self.filter.matches(c))
            .collect();

        let total_pages = matched.len().div_ceil(CAREERS_PER_PAGE) as u32;
        let page = if total_pages == 0 {
            1
        } else {
            self.page.clamp(1, total_pages)
        };

        let start = (page as usize - 1) * CAREERS_PER_PAGE;
        let items: Vec<Career> = matched
            .iter()
            .skip(start)
            .take(CAREERS_PER_PAGE)
            .map(|c| (*c).clone())
            .collect();

        let mut next = self.clone();
        next.page = page;
        next.meta = PaginationMeta {
            current_page: page,
            total_pages,
            total_items: matched.len() as u32,
            per_page: CAREERS_PER_PAGE as u32,
        };
        next.loading = false;
        (items, next)
    }
}

/// Lower-case and trim raw search input; empty means "no filter".
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Case-insensitive containment against name OR overview.
fn matches_query(career: &Career, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    career.name.to_lowercase().contains(query)
        || career.overview_text().to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_career(id: u32, name: &str, popular: bool) -> Career {
        Career {
            id,
            name: name.to_string(),
            overview: Some(format!("Overview for {}", name)),
            image: None,
            is_popular: popular as u8,
            why_this: None,
            requirement: None,
        }
    }

    fn envelope(data: Vec<Career>, current_page: u32, last_page: u32, total: u32) -> PageEnvelope {
        PageEnvelope {
            data,
            current_page,
            last_page,
            total,
            per_page: 12,
        }
    }

    /// State preloaded with `n` careers on a single fetched page.
    fn loaded_state(n: u32) -> ListingState {
        let careers: Vec<Career> = (1..=n)
            .map(|i| make_career(i, &format!("Career {}", i), i % 2 == 0))
            .collect();
        let last_page = n.div_ceil(12).max(1);
        ListingState::new().apply_fetched(envelope(careers, 1, last_page, n))
    }

    #[test]
    fn test_search_resets_page_and_slices_locally() {
        let mut state = loaded_state(30);
        state.page = 2;
        state.meta.current_page = 2;

        let (next, effect) = state.set_search_query("  EnGiNeEr  ");
        assert_eq!(next.query, "engineer");
        assert_eq!(next.page, 1);
        assert_eq!(effect, Reconcile::Slice);
    }

    #[test]
    fn test_clearing_search_refetches_page_one() {
        let state = loaded_state(30);
        let (searched, _) = state.set_search_query("doctor");

        let (cleared, effect) = searched.set_search_query("");
        assert!(cleared.is_unfiltered());
        assert_eq!(effect, Reconcile::Fetch(1));
    }

    #[test]
    fn test_set_filter_all_clears_query_and_forces_fetch() {
        let state = loaded_state(30);
        let (searched, _) = state.set_search_query("engineer");
        let (filtered, _) = searched.set_filter(FilterKey::Popular);

        let (next, effect) = filtered.set_filter(FilterKey::All);
        assert_eq!(next.query, "");
        assert_eq!(next.page, 1);
        assert_eq!(next.filter, FilterKey::All);
        assert_eq!(effect, Reconcile::Fetch(1));
    }

    #[test]
    fn test_set_filter_category_slices_locally() {
        let state = loaded_state(30);
        let (next, effect) = state.set_filter(FilterKey::Healthcare);
        assert_eq!(next.filter, FilterKey::Healthcare);
        assert_eq!(next.page, 1);
        assert_eq!(effect, Reconcile::Slice);
    }

    #[test]
    fn test_go_to_page_same_page_is_noop() {
        let state = loaded_state(30);
        let (next, effect) = state.go_to_page(1);
        assert_eq!(effect, Reconcile::Keep);
        assert_eq!(next, state);
    }

    #[test]
    fn test_go_to_page_out_of_range_is_noop() {
        let state = loaded_state(30); // 3 pages
        assert_eq!(state.go_to_page(0).1, Reconcile::Keep);
        assert_eq!(state.go_to_page(4).1, Reconcile::Keep);
    }

    #[test]
    fn test_go_to_page_blocked_while_loading() {
        let mut state = loaded_state(30);
        state.loading = true;
        let (_, effect) = state.go_to_page(2);
        assert_eq!(effect, Reconcile::Keep);
    }

    #[test]
    fn test_go_to_page_unfiltered_fetches() {
        let state = loaded_state(30);
        let (next, effect) = state.go_to_page(3);
        assert_eq!(next.page, 3);
        assert_eq!(effect, Reconcile::Fetch(3));
    }

    #[test]
    fn test_go_to_page_filtered_slices() {
        let state = loaded_state(30);
        let (filtered, _) = state.set_filter(FilterKey::Popular);
        let (sliced, settled) = filtered.reconcile_local();
        assert_eq!(sliced.len(), 12);

        let (next, effect) = settled.go_to_page(2);
        assert_eq!(effect, Reconcile::Slice);
        assert_eq!(next.page, 2);
    }

    #[test]
    fn test_apply_fetched_adopts_api_envelope() {
        let state = ListingState::new();
        let careers = vec![make_career(1, "Pilot", false)];
        let next = state.apply_fetched(envelope(careers, 2, 5, 49));

        assert_eq!(next.page, 2);
        assert_eq!(next.meta.current_page, 2);
        assert_eq!(next.meta.total_pages, 5);
        assert_eq!(next.meta.total_items, 49);
        assert_eq!(next.loaded.len(), 1);
        assert!(!next.loading);
    }

    #[test]
    fn test_reconcile_local_page_slice_counts() {
        // 30 loaded, no filters narrow anything out except query "career"
        // which all 30 match: page 3 holds the remaining 6.
        let state = loaded_state(30);
        let (searched, _) = state.set_search_query("career");
        let (items, settled) = searched.reconcile_local();
        assert_eq!(items.len(), 12);
        assert_eq!(settled.meta.total_pages, 3);
        assert_eq!(settled.meta.total_items, 30);

        let (page3, effect) = settled.go_to_page(3);
        assert_eq!(effect, Reconcile::Slice);
        let (items, settled) = page3.reconcile_local();
        assert_eq!(items.len(), 6);
        assert_eq!(settled.meta.current_page, 3);
    }

    #[test]
    fn test_reconcile_local_no_matches_clamps_to_page_one() {
        let state = loaded_state(30);
        let (searched, _) = state.set_search_query("zzz-no-such-career");
        let (items, settled) = searched.reconcile_local();

        assert!(items.is_empty());
        assert_eq!(settled.page, 1);
        assert_eq!(settled.meta.total_pages, 0);
        assert_eq!(settled.meta.total_items, 0);
    }

    #[test]
    fn test_query_matches_name_or_overview() {
        let careers = vec![
            make_career(1, "Data Scientist", false),
            Career {
                overview: Some("Works with data pipelines".to_string()),
                ..make_career(2, "Plumber", false)
            },
            make_career(3, "Chef", false),
        ];
        let state = ListingState::new().apply_fetched(envelope(careers, 1, 1, 3));

        let (searched, _) = state.set_search_query("data");
        let (items, _) = searched.reconcile_local();
        let ids: Vec<u32> = items.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_filter_predicates() {
        let popular = make_career(1, "Astronaut", true);
        let engineer = make_career(2, "Mechanical Engineer", false);
        let business = make_career(3, "Senior Accountant", false);
        let healthcare = make_career(4, "Eye Doctor", false);
        let other = make_career(5, "Zookeeper", false);

        assert!(FilterKey::Popular.matches(&popular));
        assert!(!FilterKey::Popular.matches(&engineer));

        assert!(FilterKey::Engineering.matches(&engineer));
        assert!(!FilterKey::Engineering.matches(&business));

        assert!(FilterKey::Business.matches(&business));
        assert!(!FilterKey::Business.matches(&healthcare));

        assert!(FilterKey::Healthcare.matches(&healthcare));
        assert!(!FilterKey::Healthcare.matches(&other));

        for career in [&popular, &engineer, &business, &healthcare, &other] {
            assert!(FilterKey::All.matches(career));
        }
    }
}
