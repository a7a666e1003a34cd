//! Booking and wish list handling in the admin console.

use berecons::prelude::*;
use tracing::debug;

use super::AdminConsole;

impl AdminConsole {
    /// Fetch all bookings and recount pending ones. Does nothing when logged out.
    pub async fn load_bookings(&self) {
        let Some(session) = self.session() else {
            return;
        };

        let ticket = self.state.lock().bookings.begin();

        let result = self.deps.api.list_bookings(&session).await;

        let failure = {
            let mut state = self.state.lock();

            match result {
                Ok(bookings) => {
                    if state.bookings.complete(ticket, bookings) {
                        let pending = pending_count(state.bookings.items());
                        state.booking_counter = pending;
                    }
                    None
                }
                Err(error) => {
                    let message = error.user_message("Unable to load bookings.");
                    state
                        .bookings
                        .fail(ticket, message.clone())
                        .then_some(message)
                }
            }
        };

        if let Some(message) = failure {
            self.deps.toasts.error(message);
        }
    }

    /// Fetch all wish lists. Does nothing when logged out.
    pub async fn load_wishlists(&self) {
        self.load_wishlists_by_status(None).await;
    }

    /// Fetch wish lists, limited to `status` when given.
    pub async fn load_wishlists_by_status(&self, status: Option<WishlistStatus>) {
        let Some(session) = self.session() else {
            return;
        };

        let ticket = self.state.lock().wishlists.begin();

        let result = self.deps.api.list_wishlists(&session, status).await;

        let failure = {
            let mut state = self.state.lock();

            match result {
                Ok(wishlists) => {
                    state.wishlists.complete(ticket, wishlists);
                    None
                }
                Err(error) => {
                    let message = error.user_message("Unable to load wishlists.");
                    state
                        .wishlists
                        .fail(ticket, message.clone())
                        .then_some(message)
                }
            }
        };

        if let Some(message) = failure {
            self.deps.toasts.error(message);
        }
    }

    /// Loaded bookings.
    pub fn bookings(&self) -> Vec<Booking> {
        self.state.lock().bookings.items().to_vec()
    }

    /// Number of pending bookings.
    pub fn booking_counter(&self) -> usize {
        self.state.lock().booking_counter
    }

    /// Whether bookings are loading.
    pub fn bookings_loading(&self) -> bool {
        self.state.lock().bookings.is_loading()
    }

    /// Last booking load error, empty when none.
    pub fn bookings_error(&self) -> String {
        self.state.lock().bookings.error().to_string()
    }

    /// Loaded wish lists.
    pub fn wishlists(&self) -> Vec<Wishlist> {
        self.state.lock().wishlists.items().to_vec()
    }

    /// Whether wish lists are loading.
    pub fn wishlists_loading(&self) -> bool {
        self.state.lock().wishlists.is_loading()
    }

    /// Last wish list load error, empty when none.
    pub fn wishlists_error(&self) -> String {
        self.state.lock().wishlists.error().to_string()
    }

    /// Change a booking's status. Declining asks for a reason first.
    pub async fn update_booking_status(&self, booking: &Booking, status: BookingStatus) -> bool {
        let Some(session) = self.require_session() else {
            return false;
        };

        let reason = if status == BookingStatus::Declined {
            self.deps
                .interaction
                .prompt("Reason for decline?")
                .unwrap_or_default()
        } else {
            String::new()
        };

        match self
            .deps
            .api
            .update_booking_status(&session, booking.id, status, &reason)
            .await
        {
            Ok(updated) => {
                let mut state = self.state.lock();

                if let Some(slot) = state
                    .bookings
                    .items_mut()
                    .iter_mut()
                    .find(|item| item.id == updated.id)
                {
                    *slot = updated;
                }
                let pending = pending_count(state.bookings.items());
                state.booking_counter = pending;
                drop(state);

                self.deps.toasts.success("Booking updated.");
                true
            }
            Err(error) => {
                debug!(%error, "booking status update failed");

                self.deps.toasts.error("Could not update booking.");
                false
            }
        }
    }

    /// Change a wish list's status.
    pub async fn update_wishlist_status(&self, wishlist: &Wishlist, status: WishlistStatus) -> bool {
        let Some(session) = self.require_session() else {
            return false;
        };

        match self
            .deps
            .api
            .update_wishlist_status(&session, wishlist.id, status)
            .await
        {
            Ok(updated) => {
                let mut state = self.state.lock();

                if let Some(slot) = state
                    .wishlists
                    .items_mut()
                    .iter_mut()
                    .find(|item| item.id == updated.id)
                {
                    *slot = updated;
                }
                drop(state);

                self.deps.toasts.success("Wishlist updated.");
                true
            }
            Err(error) => {
                debug!(%error, "wish list status update failed");

                self.deps.toasts.error("Could not update wishlist.");
                false
            }
        }
    }
}
