//! Test Helpers

use berecons::prelude::*;

pub(crate) fn product(id: u64, name: &str) -> Product {
    Product {
        id: Some(ProductId::new(id)),
        ..Product::named(name)
    }
}

fn with(id: u64, name: &str, brand: Option<&str>, category: &str, status: ProductStatus) -> Product {
    Product {
        brand: brand.map(ToString::to_string),
        category: Some(category.to_string()),
        status,
        ..product(id, name)
    }
}

/// Five products: three visible (one reserved) and two sold.
pub(crate) fn products() -> Vec<Product> {
    vec![
        with(1, "Chest freezer", Some("Haier"), "Kitchen", ProductStatus::Available),
        with(2, "Office chair", None, "Office", ProductStatus::Sold),
        with(3, "Blender", Some("Philips"), "Kitchen", ProductStatus::Reserved),
        with(4, "Desk", None, "Office", ProductStatus::Available),
        with(5, "Rice cooker", None, "Kitchen", ProductStatus::Sold),
    ]
}

pub(crate) fn booking(id: u64, status: BookingStatus) -> Booking {
    Booking {
        id: BookingId::new(id),
        customer_name: Some("Yaw".to_string()),
        customer_phone: Some("0243334444".to_string()),
        whatsapp_number: None,
        product_id: Some(ProductId::new(1)),
        product_name: Some("Chest freezer".to_string()),
        preferred_date: Some("2026-11-02".to_string()),
        preferred_time: Some("10:00".to_string()),
        notes: None,
        status,
        status_reason: None,
    }
}

pub(crate) fn wishlist(id: u64, status: WishlistStatus) -> Wishlist {
    Wishlist {
        id: WishlistId::new(id),
        customer_name: Some("Efua".to_string()),
        customer_phone: Some("0201112222".to_string()),
        whatsapp_number: None,
        desired_items: Some("Fridge".to_string()),
        notes: None,
        status,
    }
}
