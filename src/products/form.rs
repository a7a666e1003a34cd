//! Admin product form.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    prices::{DEFAULT_CURRENCY, Price, PriceError},
    products::{Condition, Product, ProductId, ProductStatus},
};

/// Reasons a product form cannot be submitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductFormError {
    /// Name is blank
    #[error("product name is required")]
    MissingName,

    /// Currency is not three ASCII letters
    #[error("currency must be a three-letter code")]
    InvalidCurrency,

    /// Price is not a valid amount
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// Editable copy of a product, bound to the admin create/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    /// Product name
    pub name: String,

    /// Brand
    pub brand: String,

    /// Category
    pub category: String,

    /// Free-form condition note
    pub condition_note: String,

    /// Asking price
    pub price: Option<Decimal>,

    /// Three-letter currency code
    pub currency: String,

    /// Sale status
    pub status: ProductStatus,

    /// Description
    pub description: String,

    /// Image URLs or CDN ids, cover first
    pub image_urls: Vec<String>,
    editing: Option<ProductId>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            brand: String::new(),
            category: String::new(),
            condition_note: Condition::New.label().to_string(),
            price: None,
            currency: DEFAULT_CURRENCY.to_string(),
            status: ProductStatus::Available,
            description: String::new(),
            image_urls: Vec::new(),
            editing: None,
        }
    }
}

impl ProductForm {
    /// Load `product` into the form for editing.
    pub fn start_edit(&mut self, product: &Product) {
        *self = Self {
            name: product.name.clone(),
            brand: product.brand.clone().unwrap_or_default(),
            category: product.category.clone().unwrap_or_default(),
            condition_note: product
                .condition_note
                .clone()
                .unwrap_or_else(|| Condition::New.label().to_string()),
            price: product.price.map(|price| *price),
            currency: product.currency().to_string(),
            status: product.status,
            description: product.description.clone().unwrap_or_default(),
            image_urls: product.image_urls.clone(),
            editing: product.id,
        };
    }

    /// Clear the form back to a new, empty product.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Id of the product being edited, if any.
    pub fn editing(&self) -> Option<ProductId> {
        self.editing
    }

    /// Append an uploaded image reference.
    pub fn add_image(&mut self, url: impl Into<String>) {
        self.image_urls.push(url.into());
    }

    /// Remove the image at `index`; out-of-range indices are ignored.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.image_urls.len() {
            self.image_urls.remove(index);
        }
    }

    /// Validate the form and build the product payload to send.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is blank, the currency is not a three-letter code, or the
    /// price is negative.
    pub fn to_payload(&self) -> Result<Product, ProductFormError> {
        let name = self.name.trim();

        if name.is_empty() {
            return Err(ProductFormError::MissingName);
        }

        let currency = self.currency.trim().to_ascii_uppercase();

        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ProductFormError::InvalidCurrency);
        }

        let price = self.price.map(Price::new).transpose()?;

        Ok(Product {
            id: None,
            name: name.to_string(),
            brand: Some(self.brand.trim().to_string()),
            category: Some(self.category.trim().to_string()),
            condition_note: Some(self.condition_note.trim().to_string()),
            description: Some(self.description.clone()),
            price,
            currency: Some(currency),
            status: self.status,
            image_urls: self.image_urls.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_form_matches_new_product_defaults() {
        let form = ProductForm::default();

        assert_eq!(form.condition_note, "New");
        assert_eq!(form.currency, "GHS");
        assert_eq!(form.status, ProductStatus::Available);
        assert!(form.editing().is_none());
    }

    #[test]
    fn start_edit_copies_product_and_fills_gaps() -> TestResult {
        let mut product = Product::named("Washer");
        product.id = Some(ProductId::new(9));
        product.price = Some(Price::new(dec!(800))?);
        product.status = ProductStatus::Reserved;
        product.image_urls = vec!["a".to_string(), "b".to_string()];

        let mut form = ProductForm::default();
        form.start_edit(&product);

        assert_eq!(form.editing(), Some(ProductId::new(9)));
        assert_eq!(form.name, "Washer");
        assert_eq!(form.brand, "");
        assert_eq!(form.condition_note, "New");
        assert_eq!(form.price, Some(dec!(800)));
        assert_eq!(form.currency, "GHS");
        assert_eq!(form.status, ProductStatus::Reserved);
        assert_eq!(form.image_urls.len(), 2);

        Ok(())
    }

    #[test]
    fn reset_clears_editing_state() {
        let mut product = Product::named("Washer");
        product.id = Some(ProductId::new(9));

        let mut form = ProductForm::default();
        form.start_edit(&product);
        form.reset();

        assert_eq!(form, ProductForm::default());
    }

    #[test]
    fn remove_image_ignores_out_of_range() {
        let mut form = ProductForm::default();
        form.add_image("one");
        form.add_image("two");

        form.remove_image(5);
        assert_eq!(form.image_urls, ["one", "two"]);

        form.remove_image(0);
        assert_eq!(form.image_urls, ["two"]);
    }

    #[test]
    fn payload_requires_a_name() {
        let form = ProductForm {
            name: "   ".to_string(),
            ..ProductForm::default()
        };

        assert_eq!(form.to_payload(), Err(ProductFormError::MissingName));
    }

    #[test]
    fn payload_rejects_negative_price() {
        let form = ProductForm {
            name: "Fan".to_string(),
            price: Some(dec!(-5)),
            ..ProductForm::default()
        };

        assert_eq!(
            form.to_payload(),
            Err(ProductFormError::Price(PriceError::Negative))
        );
    }

    #[test]
    fn payload_normalises_currency() -> TestResult {
        let form = ProductForm {
            name: " Fan ".to_string(),
            currency: "usd".to_string(),
            ..ProductForm::default()
        };

        let payload = form.to_payload()?;

        assert_eq!(payload.name, "Fan");
        assert_eq!(payload.currency(), "USD");
        assert!(payload.id.is_none());

        Ok(())
    }

    #[test]
    fn payload_rejects_bad_currency() {
        let form = ProductForm {
            name: "Fan".to_string(),
            currency: "CEDI".to_string(),
            ..ProductForm::default()
        };

        assert_eq!(form.to_payload(), Err(ProductFormError::InvalidCurrency));
    }
}
