//! Career Path Explorer Entry Point

mod api;
mod app;
mod components;
mod config;
mod detail;
mod error;
mod listing;
mod models;
mod pagination;
mod text;
mod viewport;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
