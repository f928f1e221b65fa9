//! Detail Page Assembler
//!
//! Derives everything the detail page renders from one fetched career and
//! the listing set: parsed bullet lists and the related-careers sidebar.

use crate::models::Career;
use crate::text::parse_list_items;

/// Maximum entries in the related-careers sidebar.
const RELATED_LIMIT: usize = 5;

/// Render-ready view of one career.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub career: Career,
    pub why_this: Vec<String>,
    pub requirements: Vec<String>,
    pub related: Vec<Career>,
}

/// Assemble the detail view. `all_fetched` is whatever the listing fetch
/// returned; related careers keep its order, no relevance ranking.
pub fn assemble_detail(career: Career, all_fetched: &[Career]) -> DetailView {
    let related = related_careers(career.id, all_fetched);
    let why_this = parse_list_items(career.why_this.as_deref().unwrap_or(""));
    let requirements = parse_list_items(career.requirement.as_deref().unwrap_or(""));
    DetailView {
        career,
        why_this,
        requirements,
        related,
    }
}

/// First [`RELATED_LIMIT`] careers excluding the target itself.
pub fn related_careers(target_id: u32, all: &[Career]) -> Vec<Career> {
    all.iter()
        .filter(|c| c.id != target_id)
        .take(RELATED_LIMIT)
        .cloned()
        .collect()
}
