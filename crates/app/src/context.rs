//! App Context

use std::sync::Arc;

use berecons::prelude::*;
use reqwest::Client;
use thiserror::Error;
use tracing::warn;

use crate::{
    api::{HttpApiClient, StorefrontApi},
    config::AppConfig,
    interaction::Interaction,
    session::{FileSessionStore, Session, SessionStore},
    toasts::Toasts,
    uploads::{CloudinaryUploader, ImageUploader},
    views::{AdminConsole, BookingView, InventoryView, WishlistView, admin::AdminDeps},
};

/// Failures while wiring the application together.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The HTTP client could not be built
    #[error("failed to build http client")]
    HttpClient(#[source] reqwest::Error),
}

/// Shared collaborators behind every view.
#[derive(Clone)]
pub struct AppContext {
    /// Storefront REST API
    pub api: Arc<dyn StorefrontApi>,
    /// Image uploader
    pub uploader: Arc<dyn ImageUploader>,
    /// Admin session store
    pub sessions: Arc<dyn SessionStore>,
    /// Notification queue shared by every view
    pub toasts: Arc<Toasts>,
    /// Image URL resolver
    pub images: ImageResolver,
    /// Store WhatsApp number for inquiries
    pub store_phone: String,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("images", &self.images)
            .field("store_phone", &self.store_phone)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let http = Client::builder()
            .user_agent(concat!("berecons/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AppInitError::HttpClient)?;

        let api = HttpApiClient::new(config.api.base_url(), http.clone());
        let uploader =
            CloudinaryUploader::new(&config.cdn.cloud_name, &config.cdn.upload_preset, http);

        Ok(Self {
            api: Arc::new(api),
            uploader: Arc::new(uploader),
            sessions: Arc::new(FileSessionStore::new(&config.session.session_file)),
            toasts: Arc::new(Toasts::default()),
            images: ImageResolver::new(Some(&config.cdn.cloud_name)),
            store_phone: config.store.whatsapp_number.clone(),
        })
    }

    /// Stored admin session, if any. Read failures are logged and treated as logged out.
    pub fn stored_session(&self) -> Option<Session> {
        self.sessions
            .load()
            .inspect_err(|error| warn!(%error, "failed to read stored session"))
            .ok()
            .flatten()
    }

    /// Public catalog view.
    pub fn inventory(&self) -> InventoryView {
        InventoryView::new(
            Arc::clone(&self.api),
            Arc::clone(&self.toasts),
            self.images.clone(),
            self.store_phone.clone(),
        )
        .with_session(self.stored_session())
    }

    /// Booking request view.
    pub fn booking(&self) -> BookingView {
        BookingView::new(Arc::clone(&self.api), Arc::clone(&self.toasts))
            .with_session(self.stored_session())
    }

    /// Wish list request view.
    pub fn wishlist(&self) -> WishlistView {
        WishlistView::new(Arc::clone(&self.api), Arc::clone(&self.toasts))
            .with_session(self.stored_session())
    }

    /// Admin console using `interaction` for confirmations and prompts.
    pub fn admin(&self, interaction: Arc<dyn Interaction>) -> Arc<AdminConsole> {
        AdminConsole::new(AdminDeps {
            api: Arc::clone(&self.api),
            uploader: Arc::clone(&self.uploader),
            sessions: Arc::clone(&self.sessions),
            interaction,
            toasts: Arc::clone(&self.toasts),
            images: self.images.clone(),
        })
    }
}
