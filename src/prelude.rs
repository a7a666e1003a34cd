//! Berecons prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    bookings::{Booking, BookingForm, BookingId, BookingRequest, BookingStatus, pending_count},
    catalog::{
        CatalogFilter, CategoryFilter, StatusFilter, categories, filter_products, product_title,
        visible_products,
    },
    contact::{ContactDetails, ContactRecord, ContactSubmission},
    ids::TypedId,
    images::{ImageResolver, THUMBNAIL_TRANSFORM},
    messaging::{booking_link, call_link, chat_link, inquiry_link, wishlist_link},
    phone::{dialable_phone, normalize_phone},
    prices::{DEFAULT_CURRENCY, Price, PriceError},
    products::{Condition, Product, ProductForm, ProductFormError, ProductId, ProductStatus},
    routing::{AdminView, Route},
    wishlists::{Wishlist, WishlistForm, WishlistId, WishlistRequest, WishlistStatus},
};
