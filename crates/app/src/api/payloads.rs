//! Request and response bodies.

use std::fmt;

use berecons::prelude::*;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Admin login credentials.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Credentials for `username`.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Username being logged in.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Credential replacement authorised by a reset key.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialReset {
    reset_key: String,
    new_username: String,
    new_password: String,
}

impl CredentialReset {
    /// Replace the admin login with `new_username` / `new_password`.
    pub fn new(
        reset_key: impl Into<String>,
        new_username: impl Into<String>,
        new_password: impl Into<String>,
    ) -> Self {
        Self {
            reset_key: reset_key.into(),
            new_username: new_username.into(),
            new_password: new_password.into(),
        }
    }

    /// New admin username.
    pub fn new_username(&self) -> &str {
        &self.new_username
    }
}

impl fmt::Debug for CredentialReset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialReset")
            .field("reset_key", &"<redacted>")
            .field("new_username", &self.new_username)
            .field("new_password", &"<redacted>")
            .finish()
    }
}

impl Drop for CredentialReset {
    fn drop(&mut self) {
        self.reset_key.zeroize();
        self.new_password.zeroize();
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct LoginResponse {
    pub token: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub(super) struct ProductStatusUpdate {
    pub status: ProductStatus,
}

#[derive(Debug, Serialize)]
pub(super) struct WishlistStatusUpdate<'a> {
    pub status: &'a WishlistStatus,
}

#[derive(Debug, Serialize)]
pub(super) struct BookingStatusUpdate<'a> {
    pub status: &'a BookingStatus,
    pub reason: &'a str,
}
