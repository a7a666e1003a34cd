//! Public catalog view.

use std::sync::Arc;

use berecons::prelude::*;
use parking_lot::Mutex;

use crate::{api::StorefrontApi, loadable::Loadable, session::Session, toasts::Toasts};

/// Message shown when a shopper tries to ask about a reserved item.
pub const RESERVED_MESSAGE: &str = "This item is reserved.";

#[derive(Debug, Default)]
struct InventoryState {
    products: Loadable<Product>,
    filter: CatalogFilter,
    preview_url: Option<String>,
}

/// Catalog browsing with search, status and category filters.
pub struct InventoryView {
    api: Arc<dyn StorefrontApi>,
    toasts: Arc<Toasts>,
    images: ImageResolver,
    store_phone: String,
    session: Option<Session>,
    state: Mutex<InventoryState>,
}

impl std::fmt::Debug for InventoryView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryView")
            .field("images", &self.images)
            .field("store_phone", &self.store_phone)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl InventoryView {
    /// Create the view. `store_phone` is the number inquiries are sent to.
    pub fn new(
        api: Arc<dyn StorefrontApi>,
        toasts: Arc<Toasts>,
        images: ImageResolver,
        store_phone: impl Into<String>,
    ) -> Self {
        Self {
            api,
            toasts,
            images,
            store_phone: store_phone.into(),
            session: None,
            state: Mutex::default(),
        }
    }

    /// Send `session` with catalog requests.
    #[must_use]
    pub fn with_session(mut self, session: Option<Session>) -> Self {
        self.session = session;
        self
    }

    /// Fetch the catalog.
    pub async fn load(&self) {
        let ticket = self.state.lock().products.begin();

        let result = self.api.list_products(self.session.as_ref()).await;

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
            self.toasts.error(message);
        }
    }

    /// Products matching the current filters, in catalog order. Sold items never appear.
    pub fn filtered(&self) -> Vec<Product> {
        let state = self.state.lock();

        state
            .filter
            .apply(state.products.items())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Category choices, `ALL` first.
    pub fn categories(&self) -> Vec<String> {
        categories(self.state.lock().products.items())
    }

    /// Current filters.
    pub fn filter(&self) -> CatalogFilter {
        self.state.lock().filter.clone()
    }

    /// Set the free-text search term.
    pub fn set_search(&self, term: impl Into<String>) {
        self.state.lock().filter.search_term = term.into();
    }

    /// Set the status filter.
    pub fn set_status(&self, status: StatusFilter) {
        self.state.lock().filter.status = status;
    }

    /// Set the category filter.
    pub fn set_category(&self, category: CategoryFilter) {
        self.state.lock().filter.category = category;
    }

    /// Reset every filter to `ALL` and clear the search.
    pub fn clear_filters(&self) {
        self.state.lock().filter.clear();
    }

    /// Whether the catalog is loading.
    pub fn is_loading(&self) -> bool {
        self.state.lock().products.is_loading()
    }

    /// Last load error, empty when none.
    pub fn error(&self) -> String {
        self.state.lock().products.error().to_string()
    }

    /// Whether inquiries can be sent at all.
    pub fn chat_configured(&self) -> bool {
        dialable_phone(&self.store_phone).is_some()
    }

    /// Chat link asking the store about `product`.
    ///
    /// Reserved items are blocked with an error toast. `None` also when the store number is
    /// unusable.
    pub fn inquiry_link(&self, product: &Product) -> Option<String> {
        if product.is_reserved() {
            self.toasts.error(RESERVED_MESSAGE);
            return None;
        }

        inquiry_link(&self.store_phone, product)
    }

    /// Card-sized image URL.
    pub fn thumbnail(&self, reference: &str) -> String {
        self.images.thumbnail(reference)
    }

    /// Open the full-size preview for an image. Empty references are ignored.
    pub fn open_preview(&self, reference: &str) {
        let url = self.images.resolve(reference, None);

        if !url.is_empty() {
            self.state.lock().preview_url = Some(url);
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
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        api::{ApiError, MockStorefrontApi},
        test::helpers::{product, products},
    };

    use super::*;

    fn make_view(api: MockStorefrontApi) -> (InventoryView, Arc<Toasts>) {
        let toasts = Arc::new(Toasts::default());
        let view = InventoryView::new(
            Arc::new(api),
            Arc::clone(&toasts),
            ImageResolver::new(Some("dnsu7es0c")),
            "0543210826",
        );

        (view, toasts)
    }

    #[tokio::test]
    async fn loaded_catalog_hides_sold_items() -> TestResult {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products()
            .once()
            .return_once(|_| Ok(products()));

        let (view, toasts) = make_view(api);
        view.load().await;

        let names: Vec<_> = view.filtered().into_iter().map(|p| p.name).collect();

        assert_eq!(names, ["Chest freezer", "Blender", "Desk"]);
        assert_eq!(view.categories(), ["ALL", "Kitchen", "Office"]);
        assert!(toasts.drain().is_empty(), "no toast expected");

        Ok(())
    }

    #[tokio::test]
    async fn filters_combine_and_clear() -> TestResult {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products()
            .once()
            .return_once(|_| Ok(products()));

        let (view, _) = make_view(api);
        view.load().await;

        view.set_search("  PHILIPS ");
        view.set_category("Kitchen".parse()?);

        let names: Vec<_> = view.filtered().into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["Blender"]);

        view.set_status(StatusFilter::Only(ProductStatus::Available));
        assert!(view.filtered().is_empty(), "blender is reserved");

        view.clear_filters();
        assert_eq!(view.filter(), CatalogFilter::default());
        assert_eq!(view.filtered().len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn load_failure_sets_error_and_toasts_server_message() -> TestResult {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products().once().return_once(|_| {
            Err(ApiError::Status {
                status: 503,
                body: r#"{"message": "Maintenance"}"#.to_string(),
            })
        });

        let (view, toasts) = make_view(api);
        view.load().await;

        assert_eq!(view.error(), "Maintenance");
        assert!(!view.is_loading());

        let toast = toasts.drain();
        assert_eq!(toast.len(), 1);
        assert_eq!(toast.first().map(|t| t.message.as_str()), Some("Maintenance"));

        Ok(())
    }

    #[test]
    fn reserved_items_block_inquiries() {
        let (view, toasts) = make_view(MockStorefrontApi::new());

        let mut blender = product(3, "Blender");
        blender.status = ProductStatus::Reserved;

        assert_eq!(view.inquiry_link(&blender), None);
        assert_eq!(
            toasts.drain().first().map(|t| t.message.clone()),
            Some(RESERVED_MESSAGE.to_string())
        );

        let link = view.inquiry_link(&product(1, "Desk"));
        assert!(
            link.as_deref()
                .is_some_and(|l| l.starts_with("https://wa.me/233543210826?text=Hi%2C")),
            "unexpected link {link:?}"
        );
    }

    #[test]
    fn preview_resolves_bare_identifiers() {
        let (view, _) = make_view(MockStorefrontApi::new());

        view.open_preview("  ");
        assert_eq!(view.preview_url(), None);

        view.open_preview("abc123");
        assert_eq!(
            view.preview_url().as_deref(),
            Some("https://res.cloudinary.com/dnsu7es0c/image/upload/abc123")
        );

        view.close_preview();
        assert_eq!(view.preview_url(), None);
    }
}
