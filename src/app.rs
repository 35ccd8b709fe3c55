//! GoNews Frontend App
//!
//! Post board with a confirmation dialog for deletions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, HttpPostsApi};
use crate::components::{DeleteModal, PostBoard};
use crate::context::AppContext;
use crate::delete_interaction::{DeleteInteraction, DeleteState};
use crate::store::{store_set_load_error, store_set_posts, AppState};
use crate::surface::BoardSurface;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (delete_state, set_delete_state) = signal(DeleteState::Idle);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let interaction = DeleteInteraction::new(
        HttpPostsApi::default(),
        BoardSurface::new(store, set_delete_state),
    );
    provide_context(AppContext::new(interaction, delete_state, (reload_trigger, set_reload_trigger)));

    // Load posts on mount and on every reload
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading posts, trigger={}", trigger).into());
        spawn_local(async move {
            match api::list_posts().await {
                Ok(posts) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} posts", posts.len()).into());
                    store_set_posts(&store, posts);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Failed to load posts: {}", e).into());
                    store_set_load_error(&store, e.to_string());
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"GoNews"</h1>
                <PostBoard />
            </main>
            <DeleteModal />
        </div>
    }
}
