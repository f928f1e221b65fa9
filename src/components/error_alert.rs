//! Error Alert Component

use leptos::prelude::*;

/// Shared error presentation for failed operations. Previously rendered
/// content stays on screen; the alert appears above it.
#[component]
pub fn ErrorAlert(message: String) -> impl IntoView {
    view! {
        <div class="error-alert" role="alert">
            <strong>"Error: "</strong>
            {message}
        </div>
    }
}
