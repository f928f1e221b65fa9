//! Pagination View Builder
//!
//! Pure construction of the pagination row. Viewport class comes in as a
//! parameter so the builder never touches `window` and stays testable.

/// Pages shown around the current page on wide viewports.
const WINDOW_WIDE: u32 = 5;
/// Pages shown around the current page on narrow viewports.
const WINDOW_NARROW: u32 = 3;

/// One entry in the pagination row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// Navigation target. `None` for ellipses, the narrow-viewport page
    /// label, and disabled Previous/Next arrows.
    pub page: Option<u32>,
    pub label: String,
    pub active: bool,
    pub disabled: bool,
}

impl PageLink {
    fn number(page: u32, active: bool) -> Self {
        Self {
            page: Some(page),
            label: page.to_string(),
            active,
            disabled: false,
        }
    }

    fn ellipsis() -> Self {
        Self {
            page: None,
            label: "...".to_string(),
            active: false,
            disabled: true,
        }
    }

    fn arrow(target: Option<u32>, label: &str) -> Self {
        Self {
            page: target,
            label: label.to_string(),
            active: false,
            disabled: target.is_none(),
        }
    }
}

/// Build the ordered link row for `current` of `total` pages.
///
/// Returns an empty vector when there is at most one page; the caller
/// hides the nav entirely in that case. Narrow viewports get a window of
/// 3 and a disabled "Page X of Y" label instead of first/last/ellipsis
/// decorations.
pub fn build_page_links(current: u32, total: u32, narrow: bool) -> Vec<PageLink> {
    if total <= 1 {
        return Vec::new();
    }

    let window = if narrow { WINDOW_NARROW } else { WINDOW_WIDE };
    let mut start = current.saturating_sub(window / 2).max(1);
    let end = (start + window - 1).min(total);
    if end - start + 1 < window {
        // Window hit the upper bound; re-expand backward while room remains.
        start = end.saturating_sub(window - 1).max(1);
    }

    let mut links = Vec::new();

    let prev = (current > 1).then(|| current - 1);
    links.push(PageLink::arrow(prev, "\u{ab} Previous"));

    if start > 1 && !narrow {
        links.push(PageLink::number(1, false));
        if start > 2 {
            links.push(PageLink::ellipsis());
        }
    }

    for page in start..=end {
        links.push(PageLink::number(page, page == current));
    }

    if end < total && !narrow {
        if end < total - 1 {
            links.push(PageLink::ellipsis());
        }
        links.push(PageLink::number(total, false));
    }

    let next = (current < total).then(|| current + 1);
    links.push(PageLink::arrow(next, "Next \u{bb}"));

    if narrow {
        links.push(PageLink {
            page: None,
            label: format!("Page {} of {}", current, total),
            active: false,
            disabled: true,
        });
    }

    links
}
