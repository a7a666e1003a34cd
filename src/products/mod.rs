//! Products

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::{
    ids::TypedId,
    prices::{DEFAULT_CURRENCY, Price},
};

pub mod form;

pub use form::{ProductForm, ProductFormError};

/// Product Id
pub type ProductId = TypedId<Product>;

/// Inventory item as exchanged with the storefront API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend id, absent until the product is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,

    /// Display name
    pub name: String,

    /// Brand
    #[serde(default)]
    pub brand: Option<String>,

    /// Category used by the catalog category filter
    #[serde(default)]
    pub category: Option<String>,

    /// Free-form condition note, e.g. `New` or `Used`
    #[serde(default)]
    pub condition_note: Option<String>,

    /// Longer description
    #[serde(default)]
    pub description: Option<String>,

    /// Asking price, absent for "price on request"
    #[serde(default)]
    pub price: Option<Price>,

    /// ISO currency code; [`DEFAULT_CURRENCY`] when absent
    #[serde(default)]
    pub currency: Option<String>,

    /// Availability status
    #[serde(default)]
    pub status: ProductStatus,

    /// Absolute image URLs or bare CDN identifiers, in display order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_urls: Vec<String>,
}

impl Product {
    /// Create an unsaved product with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            brand: None,
            category: None,
            condition_note: None,
            description: None,
            price: None,
            currency: None,
            status: ProductStatus::default(),
            image_urls: Vec::new(),
        }
    }

    /// Currency code, falling back to [`DEFAULT_CURRENCY`].
    pub fn currency(&self) -> &str {
        self.currency
            .as_deref()
            .map(str::trim)
            .filter(|currency| !currency.is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
    }

    /// Category, with an absent category read as empty text.
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    /// Condition derived from the free-form condition note.
    pub fn condition(&self) -> Condition {
        Condition::from_note(self.condition_note.as_deref())
    }

    /// Whether the product is held for another customer.
    pub fn is_reserved(&self) -> bool {
        self.status == ProductStatus::Reserved
    }

    /// Whether the product has been sold.
    pub fn is_sold(&self) -> bool {
        self.status == ProductStatus::Sold
    }

    /// First image reference, used as the listing thumbnail.
    pub fn cover_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Product availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProductStatus {
    /// Listed and purchasable
    #[default]
    Available,

    /// Held for a customer
    Reserved,

    /// Sold; hidden from every public view
    Sold,
}

impl ProductStatus {
    /// All statuses in admin display order.
    pub const ALL: [Self; 3] = [Self::Available, Self::Reserved, Self::Sold];

    /// Canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Reserved => "RESERVED",
            Self::Sold => "SOLD",
        }
    }

    /// Parse a status word, treating absent or unknown words as [`ProductStatus::Available`].
    pub fn from_lenient(value: Option<&str>) -> Self {
        value.and_then(|value| value.parse().ok()).unwrap_or_default()
    }
}

/// Error for a status word that names no [`ProductStatus`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown product status `{0}`")]
pub struct UnknownProductStatus(pub String);

impl FromStr for ProductStatus {
    type Err = UnknownProductStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();

        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownProductStatus(trimmed.to_string()))
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProductStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProductStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;

        Ok(Self::from_lenient(value.as_deref()))
    }
}

/// Physical condition shown next to a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Condition {
    /// Unused stock
    #[default]
    New,

    /// Secondhand stock
    Used,
}

impl Condition {
    /// Read a condition note; only `USED` (any case, surrounding space ignored) means used.
    pub fn from_note(note: Option<&str>) -> Self {
        match note.map(str::trim) {
            Some(note) if note.eq_ignore_ascii_case("USED") => Self::Used,
            _ => Self::New,
        }
    }

    /// Human label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Used => "Used",
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn status_parses_case_insensitively() -> TestResult {
        assert_eq!("sold".parse::<ProductStatus>()?, ProductStatus::Sold);
        assert_eq!(" Reserved ".parse::<ProductStatus>()?, ProductStatus::Reserved);

        Ok(())
    }

    #[test]
    fn unknown_status_is_an_error_but_lenient_parse_defaults() {
        assert!("ARCHIVED".parse::<ProductStatus>().is_err());
        assert_eq!(
            ProductStatus::from_lenient(Some("ARCHIVED")),
            ProductStatus::Available
        );
        assert_eq!(ProductStatus::from_lenient(None), ProductStatus::Available);
    }

    #[test]
    fn product_deserializes_with_defaults() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{"id": 3, "name": "Fridge", "price": null, "status": null, "imageUrls": null}"#,
        )?;

        assert_eq!(product.id, Some(ProductId::new(3)));
        assert_eq!(product.status, ProductStatus::Available);
        assert_eq!(product.currency(), "GHS");
        assert!(product.price.is_none());
        assert!(product.image_urls.is_empty());

        Ok(())
    }

    #[test]
    fn product_deserializes_lowercase_status() -> TestResult {
        let product: Product = serde_json::from_str(r#"{"name": "Sofa", "status": "sold"}"#)?;

        assert!(product.is_sold());

        Ok(())
    }

    #[test]
    fn product_serializes_camel_case_without_missing_id() -> TestResult {
        let mut product = Product::named("Sofa");
        product.condition_note = Some("Used".to_string());
        product.image_urls = vec!["abc".to_string()];

        let json = serde_json::to_value(&product)?;

        assert!(json.get("id").is_none(), "unsaved product should not send an id");
        assert_eq!(json["conditionNote"], "Used");
        assert_eq!(json["status"], "AVAILABLE");
        assert_eq!(json["imageUrls"][0], "abc");

        Ok(())
    }

    #[test]
    fn condition_only_recognises_used() {
        assert_eq!(Condition::from_note(Some(" used ")), Condition::Used);
        assert_eq!(Condition::from_note(Some("Like new")), Condition::New);
        assert_eq!(Condition::from_note(None), Condition::New);
    }
}
