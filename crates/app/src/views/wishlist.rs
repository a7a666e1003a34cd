//! Wish list request view.

use std::sync::Arc;

use berecons::prelude::*;
use parking_lot::Mutex;

use crate::{api::StorefrontApi, session::Session, toasts::Toasts};

/// Inline message after a wish list is accepted.
pub const WISHLIST_RECEIVED: &str = "Request sent. We will contact you to confirm.";

#[derive(Debug, Default)]
struct WishlistState {
    form: WishlistForm,
    message: String,
    submitting: bool,
}

/// Collects and submits a list of items the shopper is looking for.
pub struct WishlistView {
    api: Arc<dyn StorefrontApi>,
    toasts: Arc<Toasts>,
    session: Option<Session>,
    state: Mutex<WishlistState>,
}

impl std::fmt::Debug for WishlistView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistView")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl WishlistView {
    /// Create an empty wish list view.
    pub fn new(api: Arc<dyn StorefrontApi>, toasts: Arc<Toasts>) -> Self {
        Self {
            api,
            toasts,
            session: None,
            state: Mutex::default(),
        }
    }

    /// Send `session` with the submission.
    #[must_use]
    pub fn with_session(mut self, session: Option<Session>) -> Self {
        self.session = session;
        self
    }

    /// Edit the form in place.
    pub fn edit(&self, change: impl FnOnce(&mut WishlistForm)) {
        change(&mut self.state.lock().form);
    }

    /// Current form contents.
    pub fn form(&self) -> WishlistForm {
        self.state.lock().form.clone()
    }

    /// Inline status message, empty when none.
    pub fn message(&self) -> String {
        self.state.lock().message.clone()
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.state.lock().submitting
    }

    /// Submit the wish list. Returns `true` when the API accepted it.
    pub async fn submit(&self) -> bool {
        let request = {
            let mut state = self.state.lock();

            if state.submitting {
                return false;
            }

            state.message.clear();
            state.submitting = true;
            state.form.to_request()
        };

        let result = self.api.create_wishlist(self.session.as_ref(), &request).await;

        let mut state = self.state.lock();
        state.submitting = false;

        match result {
            Ok(()) => {
                state.message = WISHLIST_RECEIVED.to_string();
                state.form = WishlistForm::default();
                drop(state);

                self.toasts.success("Wish list sent successfully.");
                true
            }
            Err(error) => {
                let message = error.user_message("Could not submit request.");
                state.message.clone_from(&message);
                drop(state);

                self.toasts.error(message);
                false
            }
        }
    }
}
