//! Customer contact details shared by booking and wishlist requests.

use serde::{Deserialize, Serialize};

/// Name and phone numbers a customer leaves with a request.
///
/// Unless [`ContactDetails::use_phone_for_whatsapp`] is switched off, the WhatsApp number mirrors
/// the customer phone. Call [`ContactDetails::sync_whatsapp`] right before building a submission so
/// edits made in any order are reconciled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    /// Customer name
    pub customer_name: String,

    /// Customer phone number
    pub customer_phone: String,

    /// WhatsApp number
    pub whatsapp_number: String,

    /// Mirror the phone into the WhatsApp number
    pub use_phone_for_whatsapp: bool,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            customer_phone: String::new(),
            whatsapp_number: String::new(),
            use_phone_for_whatsapp: true,
        }
    }
}

impl ContactDetails {
    /// Copy the customer phone into the WhatsApp number unless it has been overridden.
    pub fn sync_whatsapp(&mut self) {
        if self.use_phone_for_whatsapp {
            self.whatsapp_number.clone_from(&self.customer_phone);
        }
    }

    /// Set the customer phone and re-sync the WhatsApp number.
    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.customer_phone = phone.into();
        self.sync_whatsapp();
    }

    /// Provide a separate WhatsApp number, turning mirroring off.
    pub fn override_whatsapp(&mut self, number: impl Into<String>) {
        self.use_phone_for_whatsapp = false;
        self.whatsapp_number = number.into();
    }

    /// Synchronise and produce the wire representation.
    pub fn to_submission(&mut self) -> ContactSubmission {
        self.sync_whatsapp();

        ContactSubmission {
            customer_name: self.customer_name.clone(),
            customer_phone: self.customer_phone.clone(),
            whatsapp_number: Some(self.whatsapp_number.clone()),
        }
    }
}

/// Contact fields as sent to the API, flattened into request payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Customer name
    pub customer_name: String,

    /// Customer phone number
    pub customer_phone: String,

    /// WhatsApp number to reply on
    #[serde(default)]
    pub whatsapp_number: Option<String>,
}

/// Anything carrying a customer's chat and phone numbers.
pub trait ContactRecord {
    /// Customer name, if given.
    fn customer_name(&self) -> Option<&str>;

    /// Customer phone, if given.
    fn customer_phone(&self) -> Option<&str>;

    /// Dedicated WhatsApp number, if given.
    fn whatsapp_number(&self) -> Option<&str>;

    /// Number to open a chat with: the WhatsApp number, else the customer phone.
    fn chat_number(&self) -> &str {
        self.whatsapp_number()
            .filter(|number| !number.is_empty())
            .or_else(|| self.customer_phone())
            .unwrap_or_default()
    }

    /// Name used in greetings, `there` when unknown.
    fn greeting_name(&self) -> &str {
        self.customer_name()
            .filter(|name| !name.is_empty())
            .unwrap_or("there")
    }
}
