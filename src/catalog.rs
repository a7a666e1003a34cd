//! Catalog
//!
//! Read-side filtering over the product list shown to shoppers.

use std::{collections::BTreeSet, convert::Infallible, fmt, str::FromStr};

use smallvec::SmallVec;

use crate::products::{Product, ProductStatus};

/// Filter value that lets everything through.
pub const ALL: &str = "ALL";

/// Separator between the parts of a product title.
pub const TITLE_SEPARATOR: &str = " • ";

/// Status selection in the catalog filter bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every status
    #[default]
    All,

    /// One status only
    Only(ProductStatus),
}

impl StatusFilter {
    /// Whether `status` passes the filter.
    pub fn matches(self, status: ProductStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = <ProductStatus as FromStr>::Err;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }

        value.parse().map(Self::Only)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

/// Category selection in the catalog filter bar; matches exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category
    #[default]
    All,

    /// One exact category
    Only(String),
}

impl CategoryFilter {
    /// Whether a product in `category` passes the filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        })
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(category) => f.write_str(category),
        }
    }
}

/// Search, status and category selections, all of which must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Free-text search over name, brand and category
    pub search_term: String,

    /// Status selection
    pub status: StatusFilter,

    /// Category selection
    pub category: CategoryFilter,
}

impl CatalogFilter {
    /// Reset every selection.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether `product` is shown. Sold products never are.
    pub fn matches(&self, product: &Product) -> bool {
        if product.is_sold() {
            return false;
        }

        let term = self.search_term.trim().to_lowercase();

        let matches_term = term.is_empty() || search_text(product).contains(&term);

        matches_term
            && self.status.matches(product.status)
            && self.category.matches(product.category())
    }

    /// Apply the filter, keeping input order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .collect()
    }
}

/// Filter `products` for the public catalog, keeping input order.
pub fn filter_products<'a>(
    products: &'a [Product],
    search_term: &str,
    status: StatusFilter,
    category: &CategoryFilter,
) -> Vec<&'a Product> {
    let filter = CatalogFilter {
        search_term: search_term.to_string(),
        status,
        category: category.clone(),
    };

    filter.apply(products)
}

/// Every product that is not sold, in input order.
pub fn visible_products(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|product| !product.is_sold()).collect()
}

/// Category choices: [`ALL`] followed by each distinct non-empty category, sorted.
pub fn categories(products: &[Product]) -> Vec<String> {
    let unique: BTreeSet<&str> = products
        .iter()
        .filter_map(|product| product.category.as_deref())
        .filter(|category| !category.is_empty())
        .collect();

    std::iter::once(ALL)
        .chain(unique)
        .map(ToString::to_string)
        .collect()
}

/// One-line listing title: name, brand, category, condition and price.
pub fn product_title(product: &Product) -> String {
    let condition = product.condition();
    let price = product
        .price
        .map(|price| format!("{} {price}", product.currency()));

    let parts: SmallVec<[&str; 5]> = [
        Some(product.name.as_str()),
        product.brand.as_deref(),
        product.category.as_deref(),
        Some(condition.label()),
        price.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect();

    parts.join(TITLE_SEPARATOR)
}

fn search_text(product: &Product) -> String {
    format!(
        "{} {} {}",
        product.name,
        product.brand.as_deref().unwrap_or_default(),
        product.category(),
    )
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use testresult::TestResult;

    use crate::prices::Price;

    use super::*;

    fn product(name: &str, brand: Option<&str>, category: Option<&str>, status: ProductStatus) -> Product {
        let mut product = Product::named(name);
        product.brand = brand.map(ToString::to_string);
        product.category = category.map(ToString::to_string);
        product.status = status;
        product
    }

    fn inventory() -> Vec<Product> {
        vec![
            product("Fridge", Some("LG"), Some("Kitchen"), ProductStatus::Available),
            product("Sofa", None, Some("Living"), ProductStatus::Sold),
            product("Microwave", Some("Samsung"), Some("Kitchen"), ProductStatus::Reserved),
            product("Lamp", None, None, ProductStatus::Available),
        ]
    }

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|product| product.name.clone()).collect()
    }

    #[test]
    fn no_filters_returns_everything_but_sold_in_order() {
        let products = inventory();

        let result = filter_products(&products, "", StatusFilter::All, &CategoryFilter::All);

        assert_eq!(names(&result), ["Fridge", "Microwave", "Lamp"]);
    }

    #[test]
    fn sold_is_hidden_even_when_requested() {
        let products = inventory();

        let result = filter_products(
            &products,
            "sofa",
            StatusFilter::Only(ProductStatus::Sold),
            &CategoryFilter::Only("Living".to_string()),
        );

        assert!(result.is_empty());
    }

    #[test]
    fn search_matches_name_brand_or_category() {
        let products = inventory();

        let by_brand = filter_products(&products, "  SAMSUNG ", StatusFilter::All, &CategoryFilter::All);
        let by_category = filter_products(&products, "kitchen", StatusFilter::All, &CategoryFilter::All);

        assert_eq!(names(&by_brand), ["Microwave"]);
        assert_eq!(names(&by_category), ["Fridge", "Microwave"]);
    }

    #[test]
    fn status_and_category_filters_are_anded() -> TestResult {
        let products = inventory();

        let result = filter_products(
            &products,
            "",
            "reserved".parse()?,
            &CategoryFilter::Only("Kitchen".to_string()),
        );

        assert_eq!(names(&result), ["Microwave"]);

        Ok(())
    }

    #[test]
    fn category_filter_is_exact() {
        let products = inventory();

        let result = filter_products(
            &products,
            "",
            StatusFilter::All,
            &CategoryFilter::Only("kitchen".to_string()),
        );

        assert!(result.is_empty());
    }

    #[test]
    fn status_filter_parses_all_case_insensitively() -> TestResult {
        assert_eq!("all".parse::<StatusFilter>()?, StatusFilter::All);
        assert!("bogus".parse::<StatusFilter>().is_err());

        Ok(())
    }

    #[test]
    fn clear_resets_filter() {
        let mut filter = CatalogFilter {
            search_term: "lamp".to_string(),
            status: StatusFilter::Only(ProductStatus::Available),
            category: CategoryFilter::Only("Kitchen".to_string()),
        };

        filter.clear();

        assert_eq!(filter, CatalogFilter::default());
    }

    #[test]
    fn visible_products_drops_only_sold() {
        let products = inventory();

        assert_eq!(names(&visible_products(&products)), ["Fridge", "Microwave", "Lamp"]);
    }

    #[test]
    fn categories_are_sorted_and_unique() {
        let products = inventory();

        assert_eq!(categories(&products), ["ALL", "Kitchen", "Living"]);
    }

    #[test]
    fn title_joins_present_parts() -> TestResult {
        let mut fridge = product("Fridge", Some("LG"), Some("Kitchen"), ProductStatus::Available);
        fridge.condition_note = Some("used".to_string());
        fridge.price = Some(Price::new(dec!(1500))?);

        assert_eq!(product_title(&fridge), "Fridge • LG • Kitchen • Used • GHS 1500");

        let lamp = product("Lamp", None, Some(""), ProductStatus::Available);

        assert_eq!(product_title(&lamp), "Lamp • New");

        Ok(())
    }
}
