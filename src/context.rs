//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::HttpPostsApi;
use crate::delete_interaction::{DeleteInteraction, DeleteState};
use crate::models::PostId;
use crate::surface::BoardSurface;

/// The delete interaction as wired in the browser
pub type BoardDeleteInteraction = DeleteInteraction<HttpPostsApi, BoardSurface>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Latest state of the delete interaction, for rendering
    pub delete_state: ReadSignal<DeleteState>,
    /// Trigger to reload posts from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload posts from backend - write
    set_reload_trigger: WriteSignal<u32>,
    interaction: StoredValue<Rc<BoardDeleteInteraction>, LocalStorage>,
}

impl AppContext {
    pub fn new(
        interaction: BoardDeleteInteraction,
        delete_state: ReadSignal<DeleteState>,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            delete_state,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            interaction: StoredValue::new_local(Rc::new(interaction)),
        }
    }

    /// Trigger a reload of posts
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Stage a post for deletion and open the confirmation dialog
    pub fn request_deletion(&self, id: PostId) {
        self.interaction.with_value(|interaction| interaction.request_deletion(id));
    }

    pub fn cancel_deletion(&self) {
        self.interaction.with_value(|interaction| interaction.cancel());
    }

    /// Handle for driving `confirm_and_delete` from a spawned task
    pub fn interaction(&self) -> Rc<BoardDeleteInteraction> {
        self.interaction.get_value()
    }
}
