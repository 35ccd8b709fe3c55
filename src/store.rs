//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Post, PostId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Posts currently displayed on the board
    pub posts: Vec<Post>,
    /// Set once the first load from the backend finished
    pub loaded: bool,
    /// Last error while loading posts
    pub load_error: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the displayed posts after a load
pub fn store_set_posts(store: &AppStore, posts: Vec<Post>) {
    *store.posts().write() = posts;
    *store.load_error().write() = None;
    *store.loaded().write() = true;
}

pub fn store_set_load_error(store: &AppStore, error: String) {
    *store.load_error().write() = Some(error);
    *store.loaded().write() = true;
}

/// Remove a post from the store by ID
pub fn store_remove_post(store: &AppStore, post_id: PostId) {
    store.posts().write().retain(|post| post.id != post_id);
}
