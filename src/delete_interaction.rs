//! Delete Interaction
//!
//! Confirm-then-delete flow for a single post. The controller owns which post
//! is staged for deletion and drives the confirmation surface through the
//! `DeleteSurface` trait, so it can be exercised without a browser.
//!
//! State machine:
//! - `Idle`: nothing staged, surface hidden
//! - `Confirming(id)`: surface visible, waiting for the user
//! - `Deleting(id)`: DELETE in flight, further confirms are ignored
//! - `Failed { id, error }`: surface still open, confirming again retries

use std::cell::RefCell;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::PostId;

/// Why a deletion did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteError {
    #[error("server rejected the deletion (status {status})")]
    RequestRejected { status: u16 },
    #[error("deletion request failed: {0}")]
    TransportFailure(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteState {
    #[default]
    Idle,
    Confirming(PostId),
    Deleting(PostId),
    Failed { id: PostId, error: DeleteError },
}

impl DeleteState {
    /// Post staged for deletion; `Some` exactly while the surface is visible
    pub fn pending_id(&self) -> Option<PostId> {
        match self {
            DeleteState::Idle => None,
            DeleteState::Confirming(id) | DeleteState::Deleting(id) => Some(*id),
            DeleteState::Failed { id, .. } => Some(*id),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.pending_id().is_some()
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self, DeleteState::Deleting(_))
    }

    /// Hint shown in the dialog after a failed attempt.
    ///
    /// Never carries the error details: rejections are already alerted and
    /// transport failures stay in the console.
    pub fn retry_hint(&self) -> Option<&'static str> {
        match self {
            DeleteState::Failed { error: DeleteError::RequestRejected { .. }, .. } => {
                Some("The post was not deleted. Confirm to try again.")
            }
            DeleteState::Failed { error: DeleteError::TransportFailure(_), .. } => {
                Some("The server could not be reached. Confirm to try again.")
            }
            _ => None,
        }
    }
}

/// Backend used to delete posts
#[async_trait(?Send)]
pub trait PostsApi {
    /// Issue exactly one `DELETE /posts/{id}`
    async fn delete_post(&self, id: PostId) -> Result<(), DeleteError>;
}

/// UI the interaction drives
pub trait DeleteSurface {
    /// Called after every state transition
    fn render(&self, state: &DeleteState);
    /// Remove the post's element from the displayed list
    fn remove_post(&self, id: PostId);
    /// Blocking, user-visible failure message
    fn notify_rejected(&self, id: PostId, status: u16);
    /// Diagnostic log entry for a request that never completed
    fn log_transport_failure(&self, id: PostId, message: &str);
}

pub struct DeleteInteraction<A, S> {
    api: A,
    surface: S,
    state: RefCell<DeleteState>,
}

impl<A: PostsApi, S: DeleteSurface> DeleteInteraction<A, S> {
    pub fn new(api: A, surface: S) -> Self {
        Self {
            api,
            surface,
            state: RefCell::new(DeleteState::Idle),
        }
    }

    pub fn state(&self) -> DeleteState {
        self.state.borrow().clone()
    }

    pub fn pending_id(&self) -> Option<PostId> {
        self.state.borrow().pending_id()
    }

    /// Stage `id` and show the surface, superseding any earlier request
    pub fn request_deletion(&self, id: PostId) {
        self.transition(DeleteState::Confirming(id));
    }

    /// Clear the staged post and hide the surface
    pub fn cancel(&self) {
        self.transition(DeleteState::Idle);
    }

    /// Delete the staged post.
    ///
    /// Returns `None` when nothing was sent: no post staged, or a request for
    /// it is already in flight.
    pub async fn confirm_and_delete(&self) -> Option<Result<(), DeleteError>> {
        let id = match *self.state.borrow() {
            DeleteState::Confirming(id) | DeleteState::Failed { id, .. } => id,
            DeleteState::Idle | DeleteState::Deleting(_) => return None,
        };

        self.transition(DeleteState::Deleting(id));
        let outcome = self.api.delete_post(id).await;
        self.resolve(id, &outcome);
        Some(outcome)
    }

    fn resolve(&self, id: PostId, outcome: &Result<(), DeleteError>) {
        // The user may have cancelled or staged another post meanwhile.
        let still_deleting = *self.state.borrow() == DeleteState::Deleting(id);

        match outcome {
            Ok(()) => {
                self.surface.remove_post(id);
                if still_deleting {
                    self.transition(DeleteState::Idle);
                }
            }
            Err(error) => {
                match error {
                    DeleteError::RequestRejected { status } => {
                        self.surface.notify_rejected(id, *status)
                    }
                    DeleteError::TransportFailure(message) => {
                        self.surface.log_transport_failure(id, message)
                    }
                }
                if still_deleting {
                    self.transition(DeleteState::Failed {
                        id,
                        error: error.clone(),
                    });
                }
            }
        }
    }

    fn transition(&self, next: DeleteState) {
        self.state.replace(next.clone());
        self.surface.render(&next);
    }
}
