//! Direct image uploads to the CDN.
//!
//! Uploads go straight to the CDN with an unsigned preset. They never carry the admin bearer
//! token.

use std::path::Path;

use async_trait::async_trait;
use mockall::automock;
use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

/// CDN upload API host.
pub const UPLOAD_HOST: &str = "https://api.cloudinary.com";

/// Errors raised while uploading an image.
#[derive(Debug, Error)]
pub enum UploadError {
    /// No cloud name or upload preset is configured.
    #[error("Set Cloudinary cloud name and upload preset.")]
    NotConfigured,

    /// Reading the local file failed.
    #[error("failed to read image file")]
    Io(#[from] std::io::Error),

    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The CDN rejected the upload.
    #[error("upload rejected with status {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,

        /// Response body as text.
        body: String,
    },
}

/// An image ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Original file name.
    pub file_name: String,

    /// File contents.
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Read an image from disk.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read.
    pub async fn read(path: &Path) -> Result<Self, UploadError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "image".to_string(), |name| name.to_string_lossy().into_owned());

        Ok(Self { file_name, bytes })
    }
}

/// Uploads product images and returns their delivery URLs.
#[automock]
#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Whether uploads can be attempted at all.
    fn is_configured(&self) -> bool;

    /// Upload `file` and return its secure delivery URL.
    async fn upload(&self, file: ImageFile) -> Result<String, UploadError>;
}

/// Unsigned-preset uploader for the image CDN.
#[derive(Debug, Clone)]
pub struct CloudinaryUploader {
    cloud_name: Option<String>,
    upload_preset: Option<String>,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl CloudinaryUploader {
    /// Uploader for the given account and preset. Blank values count as unset.
    pub fn new(cloud_name: &str, upload_preset: &str, http: Client) -> Self {
        let non_blank = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        Self {
            cloud_name: non_blank(cloud_name),
            upload_preset: non_blank(upload_preset),
            http,
        }
    }

    fn endpoint(cloud_name: &str) -> String {
        format!("{UPLOAD_HOST}/v1_1/{cloud_name}/image/upload")
    }
}

#[async_trait]
impl ImageUploader for CloudinaryUploader {
    fn is_configured(&self) -> bool {
        self.cloud_name.is_some() && self.upload_preset.is_some()
    }

    async fn upload(&self, file: ImageFile) -> Result<String, UploadError> {
        let (Some(cloud_name), Some(upload_preset)) = (&self.cloud_name, &self.upload_preset)
        else {
            return Err(UploadError::NotConfigured);
        };

        let size = file.bytes.len();
        let form = Form::new()
            .part("file", Part::bytes(file.bytes).file_name(file.file_name))
            .text("upload_preset", upload_preset.clone());

        let response = self
            .http
            .post(Self::endpoint(cloud_name))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            warn!(%status, "image upload rejected");

            return Err(UploadError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let uploaded: UploadResponse = response.json().await?;

        info!(bytes = size, url = %uploaded.secure_url, "image uploaded");

        Ok(uploaded.secure_url)
    }
}
