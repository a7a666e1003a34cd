//! Viewing booking request view.

use std::sync::Arc;

use berecons::prelude::*;
use parking_lot::Mutex;

use crate::{api::StorefrontApi, session::Session, toasts::Toasts};

/// Inline message after a booking is accepted.
pub const BOOKING_RECEIVED: &str = "Booking received. We will confirm your viewing time.";

#[derive(Debug, Default)]
struct BookingState {
    form: BookingForm,
    message: String,
    submitting: bool,
}

/// Collects and submits a request to view an item.
pub struct BookingView {
    api: Arc<dyn StorefrontApi>,
    toasts: Arc<Toasts>,
    session: Option<Session>,
    state: Mutex<BookingState>,
}

impl std::fmt::Debug for BookingView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingView")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl BookingView {
    /// Create an empty booking view.
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

    /// Pre-fill from the page's `productId` and `productName` query values.
    pub fn apply_query(&self, product_id: Option<&str>, product_name: Option<&str>) {
        self.state.lock().form.apply_query(product_id, product_name);
    }

    /// Edit the form in place.
    pub fn edit(&self, change: impl FnOnce(&mut BookingForm)) {
        change(&mut self.state.lock().form);
    }

    /// Current form contents.
    pub fn form(&self) -> BookingForm {
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

    /// Submit the booking. Returns `true` when the API accepted it.
    ///
    /// A submit while another is in flight does nothing. On success the form is reset; on
    /// failure it is kept so the shopper can retry.
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

        let result = self.api.create_booking(self.session.as_ref(), &request).await;

        let mut state = self.state.lock();
        state.submitting = false;

        match result {
            Ok(()) => {
                state.message = BOOKING_RECEIVED.to_string();
                state.form = BookingForm::default();
                drop(state);

                self.toasts.success("Booking sent successfully.");
                true
            }
            Err(error) => {
                let message = error.user_message("Could not submit booking.");
                state.message.clone_from(&message);
                drop(state);

                self.toasts.error(message);
                false
            }
        }
    }
}
