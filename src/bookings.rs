//! Bookings
//!
//! A booking is a customer's request to view an item in person.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    contact::{ContactDetails, ContactRecord, ContactSubmission},
    ids::TypedId,
    products::ProductId,
};

/// Booking Id
pub type BookingId = TypedId<Booking>;

/// Review state of a booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    /// Awaiting a decision
    #[default]
    Pending,

    /// Viewing confirmed
    Approved,

    /// Viewing turned down
    Declined,

    /// Any other status word, kept upper-cased
    Other(String),
}

impl BookingStatus {
    /// Upper-case status word.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Declined => "DECLINED",
            Self::Other(status) => status,
        }
    }
}

impl FromStr for BookingStatus {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let upper = value.trim().to_ascii_uppercase();

        Ok(match upper.as_str() {
            "" | "PENDING" => Self::Pending,
            "APPROVED" => Self::Approved,
            "DECLINED" => Self::Declined,
            _ => Self::Other(upper),
        })
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BookingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?.unwrap_or_default();

        let Ok(status) = value.parse::<Self>();

        Ok(status)
    }
}

/// Booking record as listed in the admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Booking id
    pub id: BookingId,

    /// Customer name
    #[serde(default)]
    pub customer_name: Option<String>,

    /// Customer phone number
    #[serde(default)]
    pub customer_phone: Option<String>,

    /// WhatsApp number, when it differs from the phone
    #[serde(default)]
    pub whatsapp_number: Option<String>,

    /// Catalog id of the item to view
    #[serde(default)]
    pub product_id: Option<ProductId>,

    /// Name of the item to view
    #[serde(default)]
    pub product_name: Option<String>,

    /// Requested viewing date
    #[serde(default)]
    pub preferred_date: Option<String>,

    /// Requested viewing time
    #[serde(default)]
    pub preferred_time: Option<String>,

    /// Customer notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Review status
    #[serde(default)]
    pub status: BookingStatus,

    /// Reason given with a decline
    #[serde(default)]
    pub status_reason: Option<String>,
}

impl Booking {
    /// Item name used in messages, `your item` when unknown.
    pub fn item_name(&self) -> &str {
        self.product_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("your item")
    }

    /// Whether the booking still awaits a decision.
    pub fn is_pending(&self) -> bool {
        self.status == BookingStatus::Pending
    }
}

impl ContactRecord for Booking {
    fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    fn customer_phone(&self) -> Option<&str> {
        self.customer_phone.as_deref()
    }

    fn whatsapp_number(&self) -> Option<&str> {
        self.whatsapp_number.as_deref()
    }
}

/// Number of bookings still awaiting a decision.
pub fn pending_count(bookings: &[Booking]) -> usize {
    bookings.iter().filter(|booking| booking.is_pending()).count()
}

/// Booking payload sent by the public booking form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Customer contact details
    #[serde(flatten)]
    pub contact: ContactSubmission,

    /// Catalog id of the item, when known
    pub product_id: Option<ProductId>,

    /// Item name
    pub product_name: String,

    /// Requested viewing date
    pub preferred_date: String,

    /// Requested viewing time
    pub preferred_time: String,

    /// Customer notes
    pub notes: String,
}

/// State of the public booking form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    /// Customer contact fields
    pub contact: ContactDetails,

    /// Catalog id taken from the query
    pub product_id: Option<ProductId>,

    /// Item name
    pub product_name: String,

    /// Requested viewing date
    pub preferred_date: String,

    /// Requested viewing time
    pub preferred_time: String,

    /// Customer notes
    pub notes: String,
}

impl BookingForm {
    /// Pre-fill the product from `productId` / `productName` query values.
    ///
    /// A product id that is not a number is ignored.
    pub fn apply_query(&mut self, product_id: Option<&str>, product_name: Option<&str>) {
        if let Some(id) = product_id.and_then(|id| id.parse::<ProductId>().ok()) {
            self.product_id = Some(id);
        }

        if let Some(name) = product_name.filter(|name| !name.is_empty()) {
            self.product_name = name.to_string();
        }

        self.contact.sync_whatsapp();
    }

    /// Synchronise contact fields and build the request payload.
    pub fn to_request(&mut self) -> BookingRequest {
        BookingRequest {
            contact: self.contact.to_submission(),
            product_id: self.product_id,
            product_name: self.product_name.clone(),
            preferred_date: self.preferred_date.clone(),
            preferred_time: self.preferred_time.clone(),
            notes: self.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn status_keeps_unknown_words_upper_cased() {
        let Ok(status) = "on hold".parse::<BookingStatus>();

        assert_eq!(status, BookingStatus::Other("ON HOLD".to_string()));
        assert_eq!(status.to_string(), "ON HOLD");
    }

    #[test]
    fn missing_status_is_pending() -> TestResult {
        let booking: Booking = serde_json::from_str(r#"{"id": 1, "status": null}"#)?;

        assert!(booking.is_pending());
        assert_eq!(booking.item_name(), "your item");

        Ok(())
    }

    #[test]
    fn pending_count_only_counts_pending() -> TestResult {
        let bookings: Vec<Booking> = serde_json::from_str(
            r#"[
                {"id": 1, "status": "PENDING"},
                {"id": 2, "status": "approved"},
                {"id": 3}
            ]"#,
        )?;

        assert_eq!(pending_count(&bookings), 2);

        Ok(())
    }

    #[test]
    fn query_prefill_ignores_non_numeric_ids() {
        let mut form = BookingForm::default();
        form.apply_query(Some("abc"), Some("Fridge"));

        assert_eq!(form.product_id, None);
        assert_eq!(form.product_name, "Fridge");

        form.apply_query(Some("12"), None);

        assert_eq!(form.product_id, Some(ProductId::new(12)));
        assert_eq!(form.product_name, "Fridge");
    }

    #[test]
    fn request_serializes_flat_camel_case() -> TestResult {
        let mut form = BookingForm::default();
        form.contact.customer_name = "Ama".to_string();
        form.contact.customer_phone = "0543210826".to_string();
        form.preferred_date = "2026-10-20".to_string();

        let json = serde_json::to_value(form.to_request())?;

        assert_eq!(json["customerName"], "Ama");
        assert_eq!(json["whatsappNumber"], "0543210826");
        assert_eq!(json["preferredDate"], "2026-10-20");
        assert!(json["productId"].is_null());

        Ok(())
    }
}
