//! Viewport Width Class
//!
//! The pagination builder takes the viewport class as data; this module is
//! the one place that reads `window` for it and keeps a signal fresh on
//! resize.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config::NARROW_VIEWPORT_PX;

/// True when the window is below the narrow-layout breakpoint. Defaults to
/// wide when the width cannot be read (tests, no window).
pub fn is_narrow() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|width| (width as i32) < NARROW_VIEWPORT_PX)
        .unwrap_or(false)
}

/// Signal tracking [`is_narrow`], updated by a window `resize` listener
/// that lives for the page session.
pub fn narrow_signal() -> ReadSignal<bool> {
    let (narrow, set_narrow) = signal(is_narrow());

    if let Some(window) = web_sys::window() {
        let closure = Closure::<dyn FnMut()>::new(move || {
            set_narrow.set(is_narrow());
        });
        if let Err(err) =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        {
            web_sys::console::error_1(
                &format!("[viewport] failed to attach resize listener: {:?}", err).into(),
            );
        }
        closure.forget();
    }

    narrow
}
