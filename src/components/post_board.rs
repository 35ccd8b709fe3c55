//! Post Board Component
//!
//! Displays every loaded post, newest first as delivered by the backend.

use leptos::prelude::*;

use crate::components::PostCard;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PostBoard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let is_empty = move || store.loaded().get() && store.posts().read().is_empty();

    view! {
        <section class="post-list" id="posts">
            {move || store.load_error().get().map(|err| view! {
                <div class="load-error">
                    <span>{format!("Could not load posts: {}", err)}</span>
                    <button class="retry-btn" on:click=move |_| ctx.reload()>"Retry"</button>
                </div>
            })}

            <Show when=move || !store.loaded().get()>
                <p class="loading">"Loading posts..."</p>
            </Show>

            <Show when=is_empty>
                <p class="empty">"No posts yet."</p>
            </Show>

            <For
                each=move || store.posts().get()
                key=|post| post.id
                children=move |post| view! { <PostCard post=post /> }
            />
        </section>
    }
}
