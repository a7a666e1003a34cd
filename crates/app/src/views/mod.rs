//! Headless view-models for the storefront screens.
//!
//! Each view owns its state behind a lock that is never held across an API call, so actions
//! take `&self` and may overlap.

pub mod admin;
pub mod booking;
pub mod inventory;
pub mod wishlist;

pub use self::{
    admin::AdminConsole, booking::BookingView, inventory::InventoryView, wishlist::WishlistView,
};
