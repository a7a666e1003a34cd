//! Messaging
//!
//! Deep links that open WhatsApp or the phone dialer with a customer's number and a pre-filled
//! message.

use crate::{
    bookings::Booking,
    contact::ContactRecord,
    phone::{dialable_phone, normalize_phone},
    products::Product,
    wishlists::Wishlist,
};

pub mod templates;

/// Base of WhatsApp click-to-chat links.
pub const CHAT_BASE_URL: &str = "https://wa.me/";

/// Build a WhatsApp click-to-chat link.
///
/// Returns empty text when `phone` holds no digits. The message is percent-encoded as a full URI
/// component.
pub fn chat_link(phone: &str, message: &str) -> String {
    let phone = normalize_phone(phone);

    if phone.is_empty() {
        return phone;
    }

    format!(
        "{CHAT_BASE_URL}{phone}?text={}",
        urlencoding::encode(message)
    )
}

/// Build a `tel:` link, or empty text when `phone` holds no digits.
pub fn call_link(phone: &str) -> String {
    let phone = normalize_phone(phone);

    if phone.is_empty() {
        return phone;
    }

    format!("tel:{phone}")
}

/// Link a shopper uses to ask the store about `product`.
///
/// `None` when the store number is not configured well enough to dial.
pub fn inquiry_link(store_phone: &str, product: &Product) -> Option<String> {
    let phone = dialable_phone(store_phone)?;

    Some(chat_link(&phone, &templates::inquiry_message(product)))
}

/// Link an admin uses to message a customer about their booking.
pub fn booking_link(booking: &Booking) -> String {
    chat_link(booking.chat_number(), &templates::booking_message(booking))
}

/// Link an admin uses to message a customer about their wishlist.
pub fn wishlist_link(wishlist: &Wishlist) -> String {
    chat_link(wishlist.chat_number(), &templates::wishlist_message(wishlist))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::bookings::BookingStatus;

    use super::*;

    #[test]
    fn chat_link_is_empty_without_digits() {
        assert_eq!(chat_link("", "hello"), "");
        assert_eq!(chat_link("n/a", "hello"), "");
    }

    #[test]
    fn chat_link_uses_normalised_phone() {
        let link = chat_link("054 321 0826", "hi");

        assert_eq!(link, "https://wa.me/233543210826?text=hi");
    }

    #[test]
    fn chat_link_fully_encodes_message() {
        let link = chat_link("233543210826", "Hi, I'm in Accra & ready? Café");

        assert_eq!(
            link,
            "https://wa.me/233543210826?text=Hi%2C%20I%27m%20in%20Accra%20%26%20ready%3F%20Caf%C3%A9"
        );
    }

    #[test]
    fn call_link_prefixes_tel() {
        assert_eq!(call_link("0543210826"), "tel:233543210826");
        assert_eq!(call_link(""), "");
    }

    #[test]
    fn inquiry_link_requires_configured_store_number() {
        let product = Product::named("Fridge");

        assert_eq!(inquiry_link("", &product), None);
        assert_eq!(inquiry_link("123", &product), None);
        assert!(
            inquiry_link("233543210826", &product)
                .is_some_and(|link| link.starts_with("https://wa.me/233543210826?text="))
        );
    }

    #[test]
    fn booking_link_prefers_whatsapp_number() -> TestResult {
        let mut booking: Booking = serde_json::from_str(
            r#"{"id": 1, "customerPhone": "0201112222", "whatsappNumber": "0543210826"}"#,
        )?;
        booking.status = BookingStatus::Declined;
        booking.status_reason = Some("too far".to_string());

        let link = booking_link(&booking);

        assert!(link.starts_with("https://wa.me/233543210826?text="));
        assert!(link.contains("Reason%3A%20too%20far"));

        Ok(())
    }

    #[test]
    fn wishlist_link_is_empty_without_any_number() -> TestResult {
        let wishlist: Wishlist = serde_json::from_str(r#"{"id": 1}"#)?;

        assert_eq!(wishlist_link(&wishlist), "");

        Ok(())
    }
}
