//! Product management in the admin console.

use berecons::prelude::*;
use tracing::debug;

use crate::uploads::{ImageFile, UploadError};

use super::AdminConsole;

impl AdminConsole {
    /// Fetch every product, sold ones included.
    pub async fn load_products(&self) {
        let ticket = self.state.lock().products.begin();

        let session = self.session();
        let result = self.deps.api.list_products(session.as_ref()).await;

        let failure = {
            let mut state = self.state.lock();

            match result {
                Ok(products) => {
                    state.products.complete(ticket, products);
                    None
                }
                Err(error) => {
                    let message = error.user_message("Unable to load products.");
                    state
                        .products
                        .fail(ticket, message.clone())
                        .then_some(message)
                }
            }
        };

        if let Some(message) = failure {
            self.deps.toasts.error(message);
        }
    }

    /// Every loaded product.
    pub fn products(&self) -> Vec<Product> {
        self.state.lock().products.items().to_vec()
    }

    /// Loaded products that are not sold.
    pub fn visible_products(&self) -> Vec<Product> {
        visible_products(self.state.lock().products.items())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Whether products are loading.
    pub fn products_loading(&self) -> bool {
        self.state.lock().products.is_loading()
    }

    /// Last product load or status error, empty when none.
    pub fn products_error(&self) -> String {
        self.state.lock().products.error().to_string()
    }

    /// Result of the last delete, empty when none.
    pub fn products_message(&self) -> String {
        self.state.lock().messages.products.clone()
    }

    /// Whether a delete of `id` is in flight.
    pub fn is_deleting(&self, id: ProductId) -> bool {
        self.state.lock().deleting.contains(&id)
    }

    /// Delete `product` after confirmation. Returns `true` when it was deleted.
    ///
    /// Unsaved products, declined confirmations and repeat deletes of an id already in flight do
    /// nothing.
    pub async fn delete_product(&self, product: &Product) -> bool {
        let Some(id) = product.id else {
            return false;
        };

        if self.is_deleting(id) {
            debug!(%id, "delete already in flight");
            return false;
        }

        if !self
            .deps
            .interaction
            .confirm(&format!("Delete \"{}\"?", product.name))
        {
            return false;
        }

        let Some(session) = self.require_session() else {
            return false;
        };

        {
            let mut state = self.state.lock();

            if !state.deleting.insert(id) {
                debug!(%id, "delete already in flight");
                return false;
            }

            state.messages.products.clear();
        }

        let result = self.deps.api.delete_product(&session, id).await;

        let mut state = self.state.lock();
        state.deleting.remove(&id);

        match result {
            Ok(()) => {
                state.products.items_mut().retain(|item| item.id != Some(id));
                state.messages.products = "Product deleted.".to_string();
                drop(state);

                self.deps.toasts.success("Product deleted.");
                true
            }
            Err(error) => {
                let message = error.user_message("Could not delete product.");
                state.messages.products.clone_from(&message);
                drop(state);

                self.deps.toasts.error(message);
                false
            }
        }
    }

    /// Load `product` into the form for editing.
    pub fn start_edit(&self, product: &Product) {
        let mut state = self.state.lock();
        state.form.start_edit(product);
        state.messages.admin.clear();
    }

    /// Clear the form and its messages.
    pub fn reset_form(&self) {
        let mut state = self.state.lock();
        state.form.reset();
        state.messages.admin.clear();
        state.messages.image_upload.clear();
    }

    /// Edit the form in place.
    pub fn edit_form(&self, change: impl FnOnce(&mut ProductForm)) {
        change(&mut self.state.lock().form);
    }

    /// Current form contents.
    pub fn form(&self) -> ProductForm {
        self.state.lock().form.clone()
    }

    /// Remove the form image at `index`.
    pub fn remove_image(&self, index: usize) {
        self.state.lock().form.remove_image(index);
    }

    /// Result of the last save, empty when none.
    pub fn admin_message(&self) -> String {
        self.state.lock().messages.admin.clone()
    }

    /// Whether a save is in flight.
    pub fn is_submitting(&self) -> bool {
        self.state.lock().submitting
    }

    /// Create or update the product in the form. Returns `true` on success.
    ///
    /// On success the form is reset and the product list reloaded.
    pub async fn save_product(&self) -> bool {
        let Some(session) = self.require_session() else {
            return false;
        };

        let prepared = {
            let mut state = self.state.lock();

            if state.submitting {
                return false;
            }

            state.messages.admin.clear();

            match state.form.to_payload() {
                Ok(payload) => {
                    state.submitting = true;
                    Ok((payload, state.form.editing()))
                }
                Err(error) => {
                    let message = error.to_string();
                    state.messages.admin.clone_from(&message);
                    Err(message)
                }
            }
        };

        let (payload, editing) = match prepared {
            Ok(prepared) => prepared,
            Err(message) => {
                self.deps.toasts.error(message);
                return false;
            }
        };

        let result = match editing {
            Some(id) => self.deps.api.update_product(&session, id, &payload).await,
            None => self.deps.api.create_product(&session, &payload).await,
        };

        match result {
            Ok(_) => {
                let message = if editing.is_some() {
                    "Product updated."
                } else {
                    "Product created."
                };

                {
                    let mut state = self.state.lock();
                    state.submitting = false;
                    state.form.reset();
                    state.messages.image_upload.clear();
                    state.messages.admin = message.to_string();
                }

                self.deps.toasts.success(message);
                self.load_products().await;

                true
            }
            Err(error) => {
                let message = error.user_message("Could not save product.");

                {
                    let mut state = self.state.lock();
                    state.submitting = false;
                    state.messages.admin.clone_from(&message);
                }

                self.deps.toasts.error(message);
                false
            }
        }
    }

    /// Change a product's status, replacing it in place with the server's copy.
    pub async fn update_product_status(&self, product: &Product, status: ProductStatus) -> bool {
        let Some(id) = product.id else {
            return false;
        };

        let Some(session) = self.require_session() else {
            return false;
        };

        match self
            .deps
            .api
            .update_product_status(&session, id, status)
            .await
        {
            Ok(updated) => {
                let mut state = self.state.lock();

                if let Some(slot) = state
                    .products
                    .items_mut()
                    .iter_mut()
                    .find(|item| item.id == updated.id)
                {
                    *slot = updated;
                }
                drop(state);

                self.deps.toasts.success("Status updated.");
                true
            }
            Err(error) => {
                debug!(%error, "product status update failed");

                let message = "Could not update status.";
                self.state.lock().products.set_error(message);
                self.deps.toasts.error(message);
                false
            }
        }
    }

    /// Whether an image upload is in flight.
    pub fn is_uploading(&self) -> bool {
        self.state.lock().uploading
    }

    /// Result of the last upload, empty when none.
    pub fn image_upload_message(&self) -> String {
        self.state.lock().messages.image_upload.clone()
    }

    /// Upload an image and append its URL to the form. Returns `true` on success.
    ///
    /// Failures leave the form's images unchanged.
    pub async fn upload_image(&self, file: ImageFile) -> bool {
        if !self.deps.uploader.is_configured() {
            self.state.lock().messages.image_upload = UploadError::NotConfigured.to_string();
            return false;
        }

        {
            let mut state = self.state.lock();
            state.uploading = true;
            state.messages.image_upload = "Uploading...".to_string();
        }

        let result = self.deps.uploader.upload(file).await;

        let mut state = self.state.lock();
        state.uploading = false;

        match result {
            Ok(url) => {
                state.form.add_image(url);
                state.messages.image_upload = "Image uploaded.".to_string();
                drop(state);

                self.deps.toasts.success("Image uploaded.");
                true
            }
            Err(error) => {
                debug!(%error, "image upload failed");

                state.messages.image_upload = "Upload failed.".to_string();
                drop(state);

                self.deps.toasts.error("Upload failed.");
                false
            }
        }
    }
}
