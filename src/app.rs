//! Career Path Explorer App
//!
//! Routes between the listing and detail pages from the URL query string,
//! decided once at mount.

use leptos::prelude::*;

use crate::components::{DetailPage, ErrorAlert, ListingPage};
use crate::error::ApiError;
use crate::viewport;

/// Which page this session shows.
#[derive(Debug, Clone, PartialEq)]
enum Route {
    Listing,
    Detail(u32),
    /// `?id=` was present but not a valid career id.
    InvalidDetail(ApiError),
}

fn current_route() -> Route {
    let Some(window) = web_sys::window() else {
        return Route::Listing;
    };
    let search = window.location().search().unwrap_or_default();
    let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) else {
        return Route::Listing;
    };

    match params.get("id") {
        None => Route::Listing,
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(id) => Route::Detail(id),
            Err(_) => Route::InvalidDetail(ApiError::InvalidInput(raw)),
        },
    }
}

#[component]
pub fn App() -> impl IntoView {
    // One narrow-viewport signal shared by the whole app.
    provide_context(viewport::narrow_signal());

    match current_route() {
        Route::Listing => view! { <ListingPage /> }.into_any(),
        Route::Detail(id) => view! { <DetailPage id=id /> }.into_any(),
        Route::InvalidDetail(err) => view! {
            <main class="page">
                <ErrorAlert message=err.to_string() />
                <a href="./" class="back-link">"Back to all careers"</a>
            </main>
        }
        .into_any(),
    }
}
