//! Browser Delete Surface
//!
//! Binds the delete interaction to the store, the dialog signal and the
//! browser's alert/console.

use leptos::prelude::*;

use crate::delete_interaction::{DeleteState, DeleteSurface};
use crate::models::PostId;
use crate::store::{store_remove_post, AppStore};

pub struct BoardSurface {
    store: AppStore,
    state: WriteSignal<DeleteState>,
}

impl BoardSurface {
    pub fn new(store: AppStore, state: WriteSignal<DeleteState>) -> Self {
        Self { store, state }
    }
}

impl DeleteSurface for BoardSurface {
    fn render(&self, state: &DeleteState) {
        self.state.set(state.clone());
    }

    fn remove_post(&self, id: PostId) {
        store_remove_post(&self.store, id);
    }

    fn notify_rejected(&self, id: PostId, status: u16) {
        web_sys::console::log_1(&format!("[DELETE] Post {} rejected with status {}", id, status).into());
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("Failed to delete the post");
        }
    }

    fn log_transport_failure(&self, id: PostId, message: &str) {
        web_sys::console::error_1(&format!("[DELETE] Post {}: {}", id, message).into());
    }
}
