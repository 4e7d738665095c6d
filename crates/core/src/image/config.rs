//! Image store configuration.

use std::path::PathBuf;

use bazaar_shared::config::ImagesConfig;

/// Image store configuration.
#[derive(Debug, Clone)]
pub struct ImageStoreConfig {
    /// Root directory holding the image files.
    pub root: PathBuf,
    /// Name of the file served in place of a missing image.
    pub default_image: String,
}

impl ImageStoreConfig {
    /// Extension every stored and served image carries.
    pub const EXTENSION: &'static str = ".jpg";
    /// Default fallback image name.
    pub const DEFAULT_IMAGE: &'static str = "default.jpg";

    /// Create a new image store config with default settings.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            default_image: Self::DEFAULT_IMAGE.to_string(),
        }
    }

    /// Set the fallback image name.
    #[must_use]
    pub fn with_default_image(mut self, name: impl Into<String>) -> Self {
        self.default_image = name.into();
        self
    }
}

impl From<&ImagesConfig> for ImageStoreConfig {
    fn from(config: &ImagesConfig) -> Self {
        Self::new(&config.dir).with_default_image(&config.default_image)
    }
}
