//! CDN Config

use clap::Args;

/// Image CDN settings.
#[derive(Debug, Clone, Args)]
pub struct CdnConfig {
    /// CDN cloud (account) name used for delivery and uploads
    #[arg(long, env = "CLOUDINARY_CLOUD_NAME", default_value = "dnsu7es0c")]
    pub cloud_name: String,

    /// Unsigned upload preset
    #[arg(long, env = "CLOUDINARY_UPLOAD_PRESET", default_value = "berecons")]
    pub upload_preset: String,
}
