//! Store Config

use clap::Args;

/// Store contact settings.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// WhatsApp number shoppers message about listed items
    #[arg(long, env = "STORE_WHATSAPP_NUMBER", default_value = "233543210826")]
    pub whatsapp_number: String,
}
