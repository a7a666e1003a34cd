//! API Config

use clap::Args;

/// API base used when running against a local backend.
pub const LOCAL_API_BASE: &str = "http://localhost:8080/api";

/// API base used everywhere else.
pub const PRODUCTION_API_BASE: &str = "https://api.bereconstrading.com/api";

/// Storefront API settings.
#[derive(Debug, Clone, Default, Args)]
pub struct ApiConfig {
    /// Storefront API base URL; overrides the host-derived default
    #[arg(long = "api-base", env = "APP_API_BASE")]
    pub api_base: Option<String>,

    /// Host the storefront is served from (`localhost` selects the local backend)
    #[arg(long = "host", env = "APP_HOST")]
    pub host: Option<String>,
}

impl ApiConfig {
    /// Resolve the API base URL, without a trailing slash.
    ///
    /// An explicit, non-blank base wins. Otherwise `localhost`/`127.0.0.1` select
    /// [`LOCAL_API_BASE`] and any other host, or none, selects [`PRODUCTION_API_BASE`].
    #[must_use]
    pub fn base_url(&self) -> String {
        let explicit = self
            .api_base
            .as_deref()
            .map(str::trim)
            .filter(|base| !base.is_empty());

        let base = explicit.unwrap_or_else(|| match self.host.as_deref().map(str::trim) {
            Some("localhost" | "127.0.0.1") => LOCAL_API_BASE,
            _ => PRODUCTION_API_BASE,
        });

        base.trim_end_matches('/').to_string()
    }
}
