//! Search Bar Component
//!
//! Debounced text input feeding the listing controller. The debounce is a
//! rate limit on reconciliations, not a correctness mechanism.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::SEARCH_DEBOUNCE_MS;

#[component]
pub fn SearchBar(
    /// Raw query handed to the controller after the debounce settles.
    #[prop(into)]
    on_search: Callback<String>,
    /// Incremented by the parent to clear the input box (switching the
    /// filter back to "all" empties the search).
    reset: ReadSignal<u32>,
) -> impl IntoView {
    let (raw, set_raw) = signal(String::new());
    // Monotonic tag so only the latest pending debounce fires.
    let debounce_gen = StoredValue::new(0u32);

    let schedule = move |value: String| {
        set_raw.set(value.clone());
        let tag = debounce_gen.get_value() + 1;
        debounce_gen.set_value(tag);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if debounce_gen.get_value() == tag {
                on_search.run(value);
            }
        });
    };

    let submit_now = move || {
        // Cancel any pending debounce and apply immediately.
        debounce_gen.set_value(debounce_gen.get_value() + 1);
        on_search.run(raw.get_untracked());
    };

    Effect::new(move |prev: Option<u32>| {
        let n = reset.get();
        if prev.is_some_and(|p| p != n) {
            set_raw.set(String::new());
        }
        n
    });

    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="Search careers..."
                prop:value=move || raw.get()
                on:input=move |ev| schedule(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit_now();
                    }
                }
            />
            <button type="button" class="search-btn" on:click=move |_| submit_now()>
                "Search"
            </button>
        </div>
    }
}
