//! Berecons
//!
//! Storefront domain for a small secondhand-goods retailer: the product, booking and wishlist
//! records, catalog filtering, and the pure helpers that turn those records into phone numbers,
//! chat deep links and image delivery URLs.

pub mod bookings;
pub mod catalog;
pub mod contact;
pub mod ids;
pub mod images;
pub mod messaging;
pub mod phone;
pub mod prelude;
pub mod prices;
pub mod products;
pub mod routing;
pub mod wishlists;
