//! Post Card Component
//!
//! A single post in the list, addressable in the DOM as `post-{id}`.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Post;

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = post.id;
    // Dim the card while it is staged for deletion
    let is_pending = move || ctx.delete_state.get().pending_id() == Some(id);

    view! {
        <article
            id=post.element_id()
            class=move || if is_pending() { "post pending-delete" } else { "post" }
        >
            <header class="post-header">
                <h2 class="post-title">{post.title.clone()}</h2>
                <button
                    class="delete-btn"
                    title="Delete post"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.request_deletion(id);
                    }
                >
                    "×"
                </button>
            </header>
            <p class="post-content">{post.content.clone()}</p>
            <footer class="post-meta">
                <span class="post-author">{post.author_name.clone()}</span>
                <span class="post-date">{post.formatted_date()}</span>
            </footer>
        </article>
    }
}
