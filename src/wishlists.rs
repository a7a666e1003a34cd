//! Wishlists
//!
//! A wishlist is a customer's request for items the shop does not currently list.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    contact::{ContactDetails, ContactRecord, ContactSubmission},
    ids::TypedId,
};

/// Wishlist Id
pub type WishlistId = TypedId<Wishlist>;

/// Follow-up state of a wishlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum WishlistStatus {
    /// Not yet followed up
    #[default]
    New,

    /// Customer has been contacted
    Contacted,

    /// Request fulfilled or dropped
    Closed,

    /// Any other status word, kept upper-cased
    Other(String),
}

impl WishlistStatus {
    /// Upper-case status word.
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "NEW",
            Self::Contacted => "CONTACTED",
            Self::Closed => "CLOSED",
            Self::Other(status) => status,
        }
    }
}

impl FromStr for WishlistStatus {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let upper = value.trim().to_ascii_uppercase();

        Ok(match upper.as_str() {
            "" | "NEW" => Self::New,
            "CONTACTED" => Self::Contacted,
            "CLOSED" => Self::Closed,
            _ => Self::Other(upper),
        })
    }
}

impl fmt::Display for WishlistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for WishlistStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WishlistStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?.unwrap_or_default();

        let Ok(status) = value.parse::<Self>();

        Ok(status)
    }
}

/// Wishlist record as listed in the admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    /// Wishlist id
    pub id: WishlistId,

    /// Customer name
    #[serde(default)]
    pub customer_name: Option<String>,

    /// Customer phone number
    #[serde(default)]
    pub customer_phone: Option<String>,

    /// WhatsApp number, when it differs from the phone
    #[serde(default)]
    pub whatsapp_number: Option<String>,

    /// Items the customer is looking for
    #[serde(default)]
    pub desired_items: Option<String>,

    /// Customer notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Follow-up status
    #[serde(default)]
    pub status: WishlistStatus,
}

impl ContactRecord for Wishlist {
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

/// Wishlist payload sent by the public wishlist form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistRequest {
    /// Customer contact details
    #[serde(flatten)]
    pub contact: ContactSubmission,

    /// Items the customer is looking for
    pub desired_items: String,

    /// Customer notes
    pub notes: String,
}

/// State of the public wishlist form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishlistForm {
    /// Customer contact fields
    pub contact: ContactDetails,

    /// Items the customer is looking for
    pub desired_items: String,

    /// Customer notes
    pub notes: String,
}

impl WishlistForm {
    /// Synchronise contact fields and build the request payload.
    pub fn to_request(&mut self) -> WishlistRequest {
        WishlistRequest {
            contact: self.contact.to_submission(),
            desired_items: self.desired_items.clone(),
            notes: self.notes.clone(),
        }
    }
}
