//! GoNews Frontend Entry Point

mod models;
mod api;
mod delete_interaction;
mod context;
mod store;
mod surface;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
