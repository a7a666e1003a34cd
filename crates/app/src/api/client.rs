//! reqwest implementation of [`StorefrontApi`].

use async_trait::async_trait;
use berecons::prelude::*;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::{
    api::{
        ApiError, CredentialReset, Credentials, StorefrontApi,
        payloads::{BookingStatusUpdate, LoginResponse, ProductStatusUpdate, WishlistStatusUpdate},
    },
    session::Session,
};

/// HTTP client for the storefront backend.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: String,
    http: Client,
}

impl HttpApiClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        let base_url: String = base_url.into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(builder: RequestBuilder, session: &Session) -> RequestBuilder {
        builder.bearer_auth(session.token())
    }

    fn authorized_if(builder: RequestBuilder, session: Option<&Session>) -> RequestBuilder {
        match session {
            Some(session) => Self::authorized(builder, session),
            None => builder,
        }
    }

    async fn checked(request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.inspect_err(|error| {
            warn!(%error, "storefront api request failed");
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let url = response.url().path().to_string();
            let body = response.text().await.unwrap_or_default();

            warn!(%status, %url, "storefront api returned an error");

            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        Ok(Self::checked(request).await?.json().await?)
    }

    async fn execute(request: RequestBuilder) -> Result<(), ApiError> {
        Self::checked(request).await?;

        Ok(())
    }
}

#[async_trait]
impl StorefrontApi for HttpApiClient {
    async fn list_products<'a>(
        &self,
        session: Option<&'a Session>,
    ) -> Result<Vec<Product>, ApiError> {
        Self::fetch(Self::authorized_if(self.http.get(self.url("/products")), session)).await
    }

    async fn create_product(
        &self,
        session: &Session,
        product: &Product,
    ) -> Result<Product, ApiError> {
        let request = self.http.post(self.url("/products")).json(product);

        let created: Product = Self::fetch(Self::authorized(request, session)).await?;

        info!(id = ?created.id, name = %created.name, "product created");

        Ok(created)
    }

    async fn update_product(
        &self,
        session: &Session,
        id: ProductId,
        product: &Product,
    ) -> Result<Product, ApiError> {
        let request = self
            .http
            .put(self.url(&format!("/products/{id}")))
            .json(product);

        let updated = Self::fetch(Self::authorized(request, session)).await?;

        info!(%id, "product updated");

        Ok(updated)
    }

    async fn update_product_status(
        &self,
        session: &Session,
        id: ProductId,
        status: ProductStatus,
    ) -> Result<Product, ApiError> {
        let request = self
            .http
            .patch(self.url(&format!("/products/{id}/status")))
            .json(&ProductStatusUpdate { status });

        let updated = Self::fetch(Self::authorized(request, session)).await?;

        info!(%id, %status, "product status updated");

        Ok(updated)
    }

    async fn delete_product(&self, session: &Session, id: ProductId) -> Result<(), ApiError> {
        let request = self.http.delete(self.url(&format!("/products/{id}")));

        Self::execute(Self::authorized(request, session)).await?;

        info!(%id, "product deleted");

        Ok(())
    }

    async fn create_wishlist<'a>(
        &self,
        session: Option<&'a Session>,
        request: &WishlistRequest,
    ) -> Result<(), ApiError> {
        let builder = self.http.post(self.url("/wishlists")).json(request);

        Self::execute(Self::authorized_if(builder, session)).await?;

        info!("wish list submitted");

        Ok(())
    }

    async fn list_wishlists(
        &self,
        session: &Session,
        status: Option<WishlistStatus>,
    ) -> Result<Vec<Wishlist>, ApiError> {
        let mut request = self.http.get(self.url("/wishlists"));

        if let Some(status) = status {
            request = request.query(&[("status", status.as_str())]);
        }

        Self::fetch(Self::authorized(request, session)).await
    }

    async fn update_wishlist_status(
        &self,
        session: &Session,
        id: WishlistId,
        status: WishlistStatus,
    ) -> Result<Wishlist, ApiError> {
        let request = self
            .http
            .patch(self.url(&format!("/wishlists/{id}/status")))
            .json(&WishlistStatusUpdate { status: &status });

        let updated = Self::fetch(Self::authorized(request, session)).await?;

        info!(%id, %status, "wish list status updated");

        Ok(updated)
    }

    async fn create_booking<'a>(
        &self,
        session: Option<&'a Session>,
        request: &BookingRequest,
    ) -> Result<(), ApiError> {
        let builder = self.http.post(self.url("/bookings")).json(request);

        Self::execute(Self::authorized_if(builder, session)).await?;

        info!(product = %request.product_name, "booking submitted");

        Ok(())
    }

    async fn list_bookings(&self, session: &Session) -> Result<Vec<Booking>, ApiError> {
        Self::fetch(Self::authorized(self.http.get(self.url("/bookings")), session)).await
    }

    async fn update_booking_status(
        &self,
        session: &Session,
        id: BookingId,
        status: BookingStatus,
        reason: &str,
    ) -> Result<Booking, ApiError> {
        let request = self
            .http
            .patch(self.url(&format!("/bookings/{id}/status")))
            .json(&BookingStatusUpdate {
                status: &status,
                reason,
            });

        let updated = Self::fetch(Self::authorized(request, session)).await?;

        info!(%id, %status, "booking status updated");

        Ok(updated)
    }

    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let request = self.http.post(self.url("/auth/login")).json(credentials);

        let response: LoginResponse = Self::fetch(request).await?;

        info!(username = %response.username, "admin logged in");

        Ok(Session::new(response.token, response.username))
    }

    async fn reset_credentials(&self, reset: &CredentialReset) -> Result<(), ApiError> {
        Self::execute(self.http.post(self.url("/auth/reset")).json(reset)).await?;

        info!(username = %reset.new_username(), "admin credentials reset");

        Ok(())
    }
}
