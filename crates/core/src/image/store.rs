//! Image store implementation using Apache OpenDAL.

use bytes::Bytes;
use opendal::{ErrorKind, Operator, services};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::config::ImageStoreConfig;
use super::error::ImageError;

/// Image bytes together with the name they were actually read from.
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Resolved file name (the default image name on fallback).
    pub name: String,
    /// File contents.
    pub data: Bytes,
}

/// Returns the content-addressed file name for `data`.
///
/// Format: `{hex(sha256(data))}.jpg`
#[must_use]
pub fn content_name(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    format!("{}{}", hex::encode(digest), ImageStoreConfig::EXTENSION)
}

/// Local image store.
pub struct ImageStore {
    operator: Operator,
    config: ImageStoreConfig,
}

impl ImageStore {
    /// Create a new image store from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory cannot be used.
    pub fn from_config(config: ImageStoreConfig) -> Result<Self, ImageError> {
        let root = config
            .root
            .to_str()
            .ok_or_else(|| ImageError::configuration("invalid path"))?;
        let builder = services::Fs::default().root(root);

        let operator = Operator::new(builder)
            .map_err(|e| ImageError::configuration(e.to_string()))?
            .finish();

        Ok(Self { operator, config })
    }

    /// Check that `name` may be served from the image directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is wrong or the name could escape
    /// the image directory.
    pub fn validate_name(name: &str) -> Result<(), ImageError> {
        if !name.ends_with(ImageStoreConfig::EXTENSION) {
            return Err(ImageError::InvalidExtension {
                extension: ImageStoreConfig::EXTENSION,
            });
        }

        if name.starts_with('.') || name.contains(['/', '\\']) || name.contains("..") {
            return Err(ImageError::InvalidName(name.to_string()));
        }

        Ok(())
    }

    /// Write `data` under its content-addressed name and return that name.
    ///
    /// An existing file with the same name is overwritten; its bytes are
    /// identical by construction.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn save(&self, data: Bytes) -> Result<String, ImageError> {
        let name = content_name(&data);
        let size = data.len();
        self.operator.write(&name, data).await?;
        debug!(image_name = %name, size, "Image stored");
        Ok(name)
    }

    /// Resolve `name` to a file that exists, falling back to the default image.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or the store cannot be queried.
    pub async fn resolve(&self, name: &str) -> Result<String, ImageError> {
        Self::validate_name(name)?;

        if self.exists(name).await? {
            Ok(name.to_string())
        } else {
            debug!(image_name = %name, "Image not found, serving default");
            Ok(self.config.default_image.clone())
        }
    }

    /// Read the image called `name`, or the default image if it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid, or if neither the image nor
    /// the default image can be read.
    pub async fn load(&self, name: &str) -> Result<StoredImage, ImageError> {
        let resolved = self.resolve(name).await?;
        let data = self.operator.read(&resolved).await?.to_bytes();

        Ok(StoredImage {
            name: resolved,
            data,
        })
    }

    /// Check if a file exists in the store.
    ///
    /// # Errors
    ///
    /// Returns an error for failures other than the file being absent.
    pub async fn exists(&self, name: &str) -> Result<bool, ImageError> {
        match self.operator.stat(name).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether the fallback image is present.
    pub async fn has_default_image(&self) -> bool {
        self.exists(&self.config.default_image)
            .await
            .unwrap_or(false)
    }
}
