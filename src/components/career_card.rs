//! Career Card Component
//!
//! One listing grid entry linking through to the detail page.

use leptos::prelude::*;

use crate::api;
use crate::models::Career;
use crate::text::truncate_text;

/// Overview preview length on cards.
const OVERVIEW_PREVIEW_CHARS: usize = 120;

#[component]
pub fn CareerCard(career: Career) -> impl IntoView {
    let image = api::image_url(career.image.as_deref());
    let preview = truncate_text(career.overview_text(), OVERVIEW_PREVIEW_CHARS);
    let detail_href = format!("?id={}", career.id);
    let popular = career.popular();

    view! {
        <article class="career-card">
            <div class="career-image-container">
                {match image {
                    Some(src) => view! {
                        <img src=src alt=career.name.clone() class="career-image" loading="lazy" />
                    }
                        .into_any(),
                    None => view! {
                        <div class="career-image placeholder-image">"\u{1F4BC}"</div>
                    }
                        .into_any(),
                }}
            </div>
            <div class="career-card-body">
                <h3 class="career-title">{career.name.clone()}</h3>
                <p class="career-description">{preview}</p>
                <div class="career-meta">
                    <Show when=move || popular>
                        <span class="badge">"\u{2605} Popular"</span>
                    </Show>
                    <a href=detail_href class="details-link">"View Details"</a>
                </div>
            </div>
        </article>
    }
}
