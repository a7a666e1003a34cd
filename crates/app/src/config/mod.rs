//! Application configuration.

use clap::Args;

pub use self::{
    api::ApiConfig,
    cdn::CdnConfig,
    logging::{LogFormat, LoggingConfig},
    session::SessionConfig,
    store::StoreConfig,
};

mod api;
mod cdn;
mod logging;
mod session;
mod store;

/// Settings shared by every command, read from flags or the environment.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Storefront API settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Image CDN settings.
    #[command(flatten)]
    pub cdn: CdnConfig,

    /// Store contact settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Admin session persistence settings.
    #[command(flatten)]
    pub session: SessionConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
