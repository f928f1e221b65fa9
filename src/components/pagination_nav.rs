//! Pagination Nav Component
//!
//! Renders the link row produced by [`crate::pagination::build_page_links`].
//! Hidden entirely when there is at most one page.

use leptos::prelude::*;

use crate::models::PaginationMeta;
use crate::pagination::build_page_links;

#[component]
pub fn PaginationNav(
    #[prop(into)] meta: Signal<PaginationMeta>,
    narrow: ReadSignal<bool>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { meta.get().total_pages > 1 }>
            <nav class="pagination-nav" aria-label="Career pages">
                <ul class="pagination">
                    {move || {
                        let m = meta.get();
                        build_page_links(m.current_page, m.total_pages, narrow.get())
                            .into_iter()
                            .map(|link| {
                                let class = if link.active {
                                    "page-item active"
                                } else if link.disabled {
                                    "page-item disabled"
                                } else {
                                    "page-item"
                                };
                                let label = link.label.clone();
                                view! {
                                    <li class=class>
                                        {match link.page {
                                            Some(page) if !link.disabled => view! {
                                                <a
                                                    href="#"
                                                    class="page-link"
                                                    on:click=move |ev: web_sys::MouseEvent| {
                                                        ev.prevent_default();
                                                        on_page.run(page);
                                                    }
                                                >
                                                    {label.clone()}
                                                </a>
                                            }
                                                .into_any(),
                                            _ => view! {
                                                <span class="page-link">{label.clone()}</span>
                                            }
                                                .into_any(),
                                        }}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </nav>
        </Show>
    }
}
