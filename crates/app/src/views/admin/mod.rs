//! Admin console: login, navigation between the three admin views, and their data.

use std::{sync::Arc, time::Duration};

use berecons::prelude::*;
use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{
    api::{CredentialReset, Credentials, StorefrontApi},
    interaction::Interaction,
    loadable::Loadable,
    session::{Session, SessionStore, SessionStoreError},
    toasts::Toasts,
    uploads::ImageUploader,
};

mod products;
mod requests;

/// Delay before the views not on screen are fetched after login or navigation.
pub const PREFETCH_DELAY: Duration = Duration::from_millis(250);

/// Shown when an admin action needs a session and there is none.
pub const LOGIN_REQUIRED: &str = "Please log in first.";

#[derive(Debug, Default)]
struct Messages {
    login: String,
    reset: String,
    admin: String,
    products: String,
    image_upload: String,
}

#[derive(Debug, Default)]
struct AdminState {
    view: AdminView,
    session: Option<Session>,
    prefetch_done: bool,
    products: Loadable<Product>,
    bookings: Loadable<Booking>,
    booking_counter: usize,
    wishlists: Loadable<Wishlist>,
    deleting: FxHashSet<ProductId>,
    form: ProductForm,
    submitting: bool,
    uploading: bool,
    preview_url: Option<String>,
    messages: Messages,
}

/// Collaborators the console drives.
#[derive(Clone)]
pub struct AdminDeps {
    /// Storefront API.
    pub api: Arc<dyn StorefrontApi>,

    /// Image uploader for the product form.
    pub uploader: Arc<dyn ImageUploader>,

    /// Session persistence.
    pub sessions: Arc<dyn SessionStore>,

    /// Confirmation and prompt capability.
    pub interaction: Arc<dyn Interaction>,

    /// Notification queue.
    pub toasts: Arc<Toasts>,

    /// Image URL resolver for thumbnails.
    pub images: ImageResolver,
}

impl std::fmt::Debug for AdminDeps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminDeps")
            .field("images", &self.images)
            .finish_non_exhaustive()
    }
}

/// View-model behind the admin screens.
#[derive(Debug)]
pub struct AdminConsole {
    deps: AdminDeps,
    state: Mutex<AdminState>,
}

impl AdminConsole {
    /// Create a logged-out console showing the products view.
    pub fn new(deps: AdminDeps) -> Arc<Self> {
        Arc::new(Self {
            deps,
            state: Mutex::default(),
        })
    }

    /// Pick up a previously stored session. Returns whether one was found.
    ///
    /// # Errors
    ///
    /// Returns an error when the session store cannot be read.
    pub fn restore_session(&self) -> Result<bool, SessionStoreError> {
        let session = self.deps.sessions.load()?;
        let found = session.is_some();

        self.state.lock().session = session;

        Ok(found)
    }

    /// Whether an admin is logged in.
    pub fn is_logged_in(&self) -> bool {
        self.state.lock().session.is_some()
    }

    /// Logged in admin username.
    pub fn username(&self) -> Option<String> {
        self.state
            .lock()
            .session
            .as_ref()
            .map(|session| session.username().to_string())
    }

    fn session(&self) -> Option<Session> {
        self.state.lock().session.clone()
    }

    fn require_session(&self) -> Option<Session> {
        let session = self.session();

        if session.is_none() {
            self.deps.toasts.error(LOGIN_REQUIRED);
        }

        session
    }

    /// Log in, load the current view and schedule the one-shot prefetch.
    ///
    /// Returns the prefetch task when one was scheduled. Check [`Self::is_logged_in`] for the
    /// outcome.
    pub async fn login(self: &Arc<Self>, username: &str, password: &str) -> Option<JoinHandle<()>> {
        self.state.lock().messages.login.clear();

        let credentials = Credentials::new(username, password);

        let session = match self.deps.api.login(&credentials).await {
            Ok(session) => session,
            Err(error) => {
                let message = error.user_message("Login failed");
                self.state.lock().messages.login.clone_from(&message);
                self.deps.toasts.error(message);

                return None;
            }
        };

        if let Err(error) = self.deps.sessions.save(&session) {
            warn!(%error, "failed to persist admin session");
        }

        let view = {
            let mut state = self.state.lock();
            state.session = Some(session);
            state.messages.login = "Logged in".to_string();
            state.view
        };

        self.deps.toasts.success("Logged in.");
        self.load_view(view).await;

        self.prefetch_other_views(view)
    }

    /// Forget the session and re-arm the prefetch.
    pub fn logout(&self) {
        if let Err(error) = self.deps.sessions.clear() {
            warn!(%error, "failed to clear admin session");
        }

        let mut state = self.state.lock();
        state.session = None;
        state.prefetch_done = false;
    }

    /// Replace the admin credentials using the reset key.
    pub async fn reset_credentials(
        &self,
        reset_key: &str,
        new_username: &str,
        new_password: &str,
    ) -> bool {
        self.state.lock().messages.reset.clear();

        let reset = CredentialReset::new(reset_key, new_username, new_password);

        match self.deps.api.reset_credentials(&reset).await {
            Ok(()) => {
                self.state.lock().messages.reset = "Admin credentials updated".to_string();
                self.deps.toasts.success("Admin credentials updated.");
                true
            }
            Err(error) => {
                let message = error.user_message("Reset failed");
                self.state.lock().messages.reset.clone_from(&message);
                self.deps.toasts.error(message);
                false
            }
        }
    }

    /// Follow a navigation to `path`: pick the view and, when logged in, load it and schedule
    /// the prefetch.
    pub async fn navigate(self: &Arc<Self>, path: &str) -> Option<JoinHandle<()>> {
        let view = AdminView::from_path(path);

        let logged_in = {
            let mut state = self.state.lock();
            state.view = view;
            state.session.is_some()
        };

        if !logged_in {
            return None;
        }

        self.load_view(view).await;

        self.prefetch_other_views(view)
    }

    /// Switch to `view` through its canonical path.
    pub async fn switch_view(self: &Arc<Self>, view: AdminView) -> Option<JoinHandle<()>> {
        self.navigate(view.path()).await
    }

    /// Current admin view.
    pub fn view(&self) -> AdminView {
        self.state.lock().view
    }

    /// Fetch the data behind `view`.
    pub async fn load_view(&self, view: AdminView) {
        match view {
            AdminView::Products => self.load_products().await,
            AdminView::Bookings => self.load_bookings().await,
            AdminView::Wishlists => self.load_wishlists().await,
        }
    }

    fn prefetch_other_views(self: &Arc<Self>, current: AdminView) -> Option<JoinHandle<()>> {
        {
            let mut state = self.state.lock();

            if state.prefetch_done {
                return None;
            }

            state.prefetch_done = true;
        }

        let console = Arc::clone(self);

        Some(tokio::spawn(async move {
            tokio::time::sleep(PREFETCH_DELAY).await;

            if !console.is_logged_in() {
                debug!("skipping prefetch after logout");
                return;
            }

            for view in AdminView::ALL {
                if view != current {
                    console.load_view(view).await;
                }
            }
        }))
    }

    /// Open the full-size preview for an image.
    pub fn open_preview(&self, url: &str) {
        if !url.trim().is_empty() {
            self.state.lock().preview_url = Some(url.to_string());
        }
    }

    /// Close the preview.
    pub fn close_preview(&self) {
        self.state.lock().preview_url = None;
    }

    /// Image currently previewed.
    pub fn preview_url(&self) -> Option<String> {
        self.state.lock().preview_url.clone()
    }

    /// Card-sized image URL.
    pub fn thumbnail(&self, reference: &str) -> String {
        self.deps.images.thumbnail(reference)
    }

    /// Login status message, empty when none.
    pub fn login_message(&self) -> String {
        self.state.lock().messages.login.clone()
    }

    /// Credential reset status message, empty when none.
    pub fn reset_message(&self) -> String {
        self.state.lock().messages.reset.clone()
    }
}
