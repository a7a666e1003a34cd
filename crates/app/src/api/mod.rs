//! Storefront REST API.

use async_trait::async_trait;
use berecons::prelude::*;
use mockall::automock;

use crate::session::Session;

pub use self::{
    client::HttpApiClient,
    errors::ApiError,
    payloads::{CredentialReset, Credentials},
};

mod client;
mod errors;
mod payloads;

/// Calls against the storefront backend.
///
/// Admin operations require the [`Session`]. The public catalog and request submissions take it
/// when one exists and send it along.
#[automock]
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Fetch the full product list.
    async fn list_products<'a>(
        &self,
        session: Option<&'a Session>,
    ) -> Result<Vec<Product>, ApiError>;

    /// Create a product.
    async fn create_product(
        &self,
        session: &Session,
        product: &Product,
    ) -> Result<Product, ApiError>;

    /// Replace a product.
    async fn update_product(
        &self,
        session: &Session,
        id: ProductId,
        product: &Product,
    ) -> Result<Product, ApiError>;

    /// Change a product's status and return the updated product.
    async fn update_product_status(
        &self,
        session: &Session,
        id: ProductId,
        status: ProductStatus,
    ) -> Result<Product, ApiError>;

    /// Delete a product.
    async fn delete_product(&self, session: &Session, id: ProductId) -> Result<(), ApiError>;

    /// Submit a wish list request.
    async fn create_wishlist<'a>(
        &self,
        session: Option<&'a Session>,
        request: &WishlistRequest,
    ) -> Result<(), ApiError>;

    /// Fetch wish lists, optionally limited to one status.
    async fn list_wishlists(
        &self,
        session: &Session,
        status: Option<WishlistStatus>,
    ) -> Result<Vec<Wishlist>, ApiError>;

    /// Change a wish list's status and return the updated record.
    async fn update_wishlist_status(
        &self,
        session: &Session,
        id: WishlistId,
        status: WishlistStatus,
    ) -> Result<Wishlist, ApiError>;

    /// Submit a viewing booking request.
    async fn create_booking<'a>(
        &self,
        session: Option<&'a Session>,
        request: &BookingRequest,
    ) -> Result<(), ApiError>;

    /// Fetch all bookings.
    async fn list_bookings(&self, session: &Session) -> Result<Vec<Booking>, ApiError>;

    /// Change a booking's status, with an optional reason, and return the updated record.
    async fn update_booking_status(
        &self,
        session: &Session,
        id: BookingId,
        status: BookingStatus,
        reason: &str,
    ) -> Result<Booking, ApiError>;

    /// Exchange admin credentials for a session.
    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError>;

    /// Replace the admin credentials using the reset key.
    async fn reset_credentials(&self, reset: &CredentialReset) -> Result<(), ApiError>;
}
