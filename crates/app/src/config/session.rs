//! Session Config

use std::path::PathBuf;

use clap::Args;

/// Admin session persistence settings.
#[derive(Debug, Clone, Args)]
pub struct SessionConfig {
    /// File the admin session token is kept in between commands
    #[arg(long, env = "BERECONS_SESSION_FILE", default_value = ".berecons-session.json")]
    pub session_file: PathBuf,
}
