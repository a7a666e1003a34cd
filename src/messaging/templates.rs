//! Pre-filled chat messages.

use crate::{
    bookings::{Booking, BookingStatus},
    contact::ContactRecord,
    products::Product,
    wishlists::{Wishlist, WishlistStatus},
};

/// Shopper's question about a listed product.
pub fn inquiry_message(product: &Product) -> String {
    format!("Hi, I'm interested in {}. Is it available?", product.name)
}

/// Status notice for a booking.
pub fn booking_message(booking: &Booking) -> String {
    let name = booking.greeting_name();
    let item = booking.item_name();
    let when = when_clause(
        booking.preferred_date.as_deref(),
        booking.preferred_time.as_deref(),
    );

    match &booking.status {
        BookingStatus::Approved => format!(
            "Hi {name}, your viewing request for {item}{when} is approved. \
             Please confirm if this time works."
        ),
        BookingStatus::Declined => {
            let reason = booking
                .status_reason
                .as_deref()
                .filter(|reason| !reason.is_empty())
                .map(|reason| format!(" Reason: {reason}"))
                .unwrap_or_default();

            format!("Hi {name}, your viewing request for {item}{when} was declined.{reason}")
        }
        status => format!(
            "Hi {name}, we received your viewing request for {item}{when}. Status: {status}."
        ),
    }
}

/// Status notice for a wishlist.
pub fn wishlist_message(wishlist: &Wishlist) -> String {
    let name = wishlist.greeting_name();

    let items = wishlist
        .desired_items
        .as_deref()
        .map(str::trim)
        .filter(|items| !items.is_empty())
        .map(|items| format!("Items: {items}. "))
        .unwrap_or_default();

    let notes = wishlist
        .notes
        .as_deref()
        .filter(|notes| !notes.is_empty())
        .map(|notes| format!("Notes: {notes}. "))
        .unwrap_or_default();

    match wishlist.status {
        WishlistStatus::Contacted => format!(
            "Hi {name}, we are reviewing your wish list. {items}{notes}\
             We will share updates shortly."
        ),
        WishlistStatus::Closed => format!(
            "Hi {name}, we have completed your wish list request. {items}{notes}\
             Let us know if you need more items."
        ),
        _ => format!(
            "Hi {name}, thanks for your wish list. {items}{notes}\
             We will check availability and get back to you."
        ),
    }
}

/// ` on {date} {time}`, dropping whichever part is empty, or nothing when both are.
fn when_clause(date: Option<&str>, time: Option<&str>) -> String {
    let parts: Vec<&str> = [date, time]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!(" on {}", parts.join(" "))
    }
}
