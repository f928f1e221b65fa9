//! Filter Bar Component
//!
//! One button per category; exactly one is active at a time.

use leptos::prelude::*;

use crate::listing::FilterKey;

#[component]
pub fn FilterBar(
    #[prop(into)] active: Signal<FilterKey>,
    #[prop(into)] on_select: Callback<FilterKey>,
) -> impl IntoView {
    view! {
        <div class="filter-buttons">
            {FilterKey::ALL_KEYS
                .iter()
                .map(|&key| {
                    let is_active = move || active.get() == key;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_active() { "filter-btn active" } else { "filter-btn" }
                            }
                            on:click=move |_| on_select.run(key)
                        >
                            {key.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
