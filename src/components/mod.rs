//! UI Components
//!
//! Reusable Leptos components.

mod post_board;
mod post_card;
mod delete_modal;

pub use post_board::PostBoard;
pub use post_card::PostCard;
pub use delete_modal::DeleteModal;
