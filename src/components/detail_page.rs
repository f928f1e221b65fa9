//! Detail Page
//!
//! One-shot fetch-and-render: the career record plus the listing set for
//! the related-careers sidebar. The page fails as a whole if either
//! request does, like the original site.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ErrorAlert;
use crate::config::SITE_NAME;
use crate::detail::{assemble_detail, DetailView};

#[component]
pub fn DetailPage(id: u32) -> impl IntoView {
    let (detail, set_detail) = signal(Option::<DetailView>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            let assembled = match api::fetch_career_detail(id).await {
                Ok(career) => match api::fetch_career_page(1).await {
                    Ok(envelope) => Ok(assemble_detail(career, &envelope.data)),
                    Err(err) => Err(err),
                },
                Err(err) => Err(err),
            };

            match assembled {
                Ok(detail_view) => {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        document.set_title(&format!(
                            "{} - Career Details - {}",
                            detail_view.career.name, SITE_NAME
                        ));
                    }
                    set_detail.set(Some(detail_view));
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[detail] fetch career {} failed: {}", id, err).into(),
                    );
                    set_error.set(Some(
                        "Failed to load career details. Please try again later.".to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <main class="page career-detail">
            <Show when=move || loading.get()>
                <div class="loading">
                    <div class="spinner"></div>
                    <p>"Loading career details..."</p>
                </div>
            </Show>

            {move || error.get().map(|message| view! {
                <ErrorAlert message=message />
                <a href="./" class="back-link">"Back to all careers"</a>
            })}

            {move || detail.get().map(|assembled| {
                let name = assembled.career.name.clone();
                let image = api::image_url(assembled.career.image.as_deref());
                let overview = if assembled.career.overview_text().is_empty() {
                    "No overview available for this career.".to_string()
                } else {
                    assembled.career.overview_text().to_string()
                };

                view! {
                    <nav class="breadcrumb">
                        <a href="./">"Careers"</a>
                        <span>" / "</span>
                        <span>{name.clone()}</span>
                    </nav>

                    <header class="detail-header">
                        <h1>{name.clone()}</h1>
                        {image.map(|src| view! {
                            <img src=src alt=name.clone() class="detail-image" />
                        })}
                    </header>

                    <div class="detail-columns">
                        <div class="content-card">
                            <h2>"Overview"</h2>
                            <p>{overview}</p>

                            <h2>"Why This Career"</h2>
                            <ul class="check-list">
                                {assembled.why_this
                                    .iter()
                                    .map(|item| view! { <li>{item.clone()}</li> })
                                    .collect_view()}
                            </ul>

                            <h2>"Requirements"</h2>
                            <ul class="check-list">
                                {assembled.requirements
                                    .iter()
                                    .map(|item| view! { <li>{item.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>

                        <aside class="sidebar-card">
                            <h2>"Related Careers"</h2>
                            {assembled.related
                                .iter()
                                .map(|career| view! {
                                    <a href=format!("?id={}", career.id) class="related-link">
                                        {career.name.clone()}
                                    </a>
                                })
                                .collect_view()}
                        </aside>
                    </div>
                }
            })}
        </main>
    }
}
