//! Delete Modal Component
//!
//! Confirmation dialog for deleting the staged post. Visibility follows the
//! delete interaction's state: shown while a post is pending, hidden otherwise.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;

#[component]
pub fn DeleteModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let state = ctx.delete_state;
    let display = move || if state.get().is_visible() { "flex" } else { "none" };
    let deleting = move || state.get().is_deleting();
    let retry_hint = move || state.get().retry_hint();

    let on_confirm = move |_: web_sys::MouseEvent| {
        let interaction = ctx.interaction();
        spawn_local(async move {
            interaction.confirm_and_delete().await;
        });
    };

    view! {
        <div
            id="deleteModal"
            class="modal-backdrop"
            style:display=display
            on:click=move |_| ctx.cancel_deletion()
        >
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h3 class="modal-title">"Delete post?"</h3>
                <p class="modal-text">
                    {move || state.get().pending_id().map(|id| format!("Post #{} will be removed permanently.", id))}
                </p>
                {move || retry_hint().map(|hint| view! { <p class="modal-hint">{hint}</p> })}
                <div class="modal-actions">
                    <button class="cancel-btn" on:click=move |_| ctx.cancel_deletion()>
                        "Cancel"
                    </button>
                    <button class="confirm-btn" disabled=deleting on:click=on_confirm>
                        {move || if deleting() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
