//! Listing Page
//!
//! Owns the [`ListingState`] snapshot, runs controller transitions from UI
//! events, and performs the side effect each transition requests: an API
//! fetch or a local re-slice.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CareerCard, ErrorAlert, FilterBar, PaginationNav, SearchBar};
use crate::listing::{FilterKey, ListingState, Reconcile};
use crate::models::Career;

#[component]
pub fn ListingPage() -> impl IntoView {
    // Starts in the loading state; the mount effect issues the first fetch.
    let (state, set_state) = signal(ListingState {
        loading: true,
        ..ListingState::new()
    });
    let (items, set_items) = signal(Vec::<Career>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (search_reset, set_search_reset) = signal(0u32);
    let narrow = expect_context::<ReadSignal<bool>>();

    // Tag every fetch so a stale response cannot clobber a newer transition.
    let fetch_gen = StoredValue::new(0u64);

    let apply = move |(next, effect): (ListingState, Reconcile)| {
        match effect {
            Reconcile::Keep => {}
            Reconcile::Slice => {
                let (page_items, settled) = next.reconcile_local();
                set_items.set(page_items);
                set_state.set(settled);
                set_error.set(None);
            }
            Reconcile::Fetch(page) => {
                let prev = state.get_untracked();
                let mut pending = next;
                pending.loading = true;
                set_state.set(pending.clone());

                let tag = fetch_gen.get_value() + 1;
                fetch_gen.set_value(tag);

                spawn_local(async move {
                    let result = api::fetch_career_page(page).await;
                    if fetch_gen.get_value() != tag {
                        return; // superseded by a newer fetch
                    }
                    match result {
                        Ok(envelope) => {
                            let settled = pending.apply_fetched(envelope);
                            set_items.set(settled.loaded.clone());
                            set_state.set(settled);
                            set_error.set(None);
                        }
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("[listing] fetch page {} failed: {}", page, err).into(),
                            );
                            // Prior rendered state stays as it was.
                            set_state.set(prev);
                            set_error.set(Some(
                                "Failed to load career opportunities. Please try again later."
                                    .to_string(),
                            ));
                        }
                    }
                });
            }
        }
    };

    // Initial load: page 1, unfiltered.
    Effect::new(move |_| {
        apply((ListingState::new(), Reconcile::Fetch(1)));
    });

    let on_search = move |query: String| apply(state.get_untracked().set_search_query(&query));
    let on_filter = move |key: FilterKey| {
        if key == FilterKey::All {
            // Returning to "all" also empties the search box.
            set_search_reset.update(|n| *n += 1);
        }
        apply(state.get_untracked().set_filter(key));
    };
    let on_page = move |page: u32| apply(state.get_untracked().go_to_page(page));

    let loading = move || state.with(|s| s.loading);
    let meta = Signal::derive(move || state.with(|s| s.meta));
    let active_filter = Signal::derive(move || state.with(|s| s.filter));
    let no_results =
        move || !loading() && error.with(|e| e.is_none()) && items.with(|i| i.is_empty());

    view! {
        <main class="page" id="careers">
            <header class="careers-header">
                <h1>"Explore Future Careers"</h1>
                <SearchBar on_search=on_search reset=search_reset />
                <FilterBar active=active_filter on_select=on_filter />
            </header>

            {move || error.get().map(|message| view! { <ErrorAlert message=message /> })}

            <Show when=loading>
                <div class="loading">
                    <div class="spinner"></div>
                    <p>"Loading careers..."</p>
                </div>
            </Show>

            <Show when=no_results>
                <div class="no-results">
                    <p>"No careers found. Try a different search or filter."</p>
                </div>
            </Show>

            <div class="career-grid">
                <For
                    each=move || items.get()
                    key=|career| career.id
                    children=move |career| view! { <CareerCard career=career /> }
                />
            </div>

            <PaginationNav meta=meta narrow=narrow on_page=on_page />
        </main>
    }
}
