//! Shared test support.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use berecons::prelude::*;
use tokio::sync::Notify;

use crate::{
    api::{ApiError, CredentialReset, Credentials, MockStorefrontApi, StorefrontApi},
    session::Session,
};

pub(crate) mod helpers;

/// API double whose first call (to a gated method) parks until released.
///
/// The wrapped mock answers first, so the parked call returns what the mock gave it even when
/// later calls finish before it.
pub(crate) struct GatedApi {
    inner: MockStorefrontApi,
    armed: AtomicBool,
    started: Notify,
    release: Notify,
}

impl GatedApi {
    pub(crate) fn new(inner: MockStorefrontApi) -> Self {
        Self {
            inner,
            armed: AtomicBool::new(true),
            started: Notify::new(),
            release: Notify::new(),
        }
    }

    /// Wait until the parked call has started.
    pub(crate) async fn started(&self) {
        self.started.notified().await;
    }

    /// Let the parked call finish.
    pub(crate) fn release(&self) {
        self.release.notify_one();
    }

    async fn gate(&self) {
        if self.armed.swap(false, Ordering::SeqCst) {
            self.started.notify_one();
            self.release.notified().await;
        }
    }
}

#[async_trait]
impl StorefrontApi for GatedApi {
    async fn list_products<'a>(
        &self,
        session: Option<&'a Session>,
    ) -> Result<Vec<Product>, ApiError> {
        let result = self.inner.list_products(session).await;
        self.gate().await;
        result
    }

    async fn create_product(
        &self,
        session: &Session,
        product: &Product,
    ) -> Result<Product, ApiError> {
        self.inner.create_product(session, product).await
    }

    async fn update_product(
        &self,
        session: &Session,
        id: ProductId,
        product: &Product,
    ) -> Result<Product, ApiError> {
        self.inner.update_product(session, id, product).await
    }

    async fn update_product_status(
        &self,
        session: &Session,
        id: ProductId,
        status: ProductStatus,
    ) -> Result<Product, ApiError> {
        self.inner.update_product_status(session, id, status).await
    }

    async fn delete_product(&self, session: &Session, id: ProductId) -> Result<(), ApiError> {
        let result = self.inner.delete_product(session, id).await;
        self.gate().await;
        result
    }

    async fn create_wishlist<'a>(
        &self,
        session: Option<&'a Session>,
        request: &WishlistRequest,
    ) -> Result<(), ApiError> {
        let result = self.inner.create_wishlist(session, request).await;
        self.gate().await;
        result
    }

    async fn list_wishlists(
        &self,
        session: &Session,
        status: Option<WishlistStatus>,
    ) -> Result<Vec<Wishlist>, ApiError> {
        self.inner.list_wishlists(session, status).await
    }

    async fn update_wishlist_status(
        &self,
        session: &Session,
        id: WishlistId,
        status: WishlistStatus,
    ) -> Result<Wishlist, ApiError> {
        self.inner.update_wishlist_status(session, id, status).await
    }

    async fn create_booking<'a>(
        &self,
        session: Option<&'a Session>,
        request: &BookingRequest,
    ) -> Result<(), ApiError> {
        let result = self.inner.create_booking(session, request).await;
        self.gate().await;
        result
    }

    async fn list_bookings(&self, session: &Session) -> Result<Vec<Booking>, ApiError> {
        let result = self.inner.list_bookings(session).await;
        self.gate().await;
        result
    }

    async fn update_booking_status(
        &self,
        session: &Session,
        id: BookingId,
        status: BookingStatus,
        reason: &str,
    ) -> Result<Booking, ApiError> {
        self.inner
            .update_booking_status(session, id, status, reason)
            .await
    }

    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        self.inner.login(credentials).await
    }

    async fn reset_credentials(&self, reset: &CredentialReset) -> Result<(), ApiError> {
        self.inner.reset_credentials(reset).await
    }
}
