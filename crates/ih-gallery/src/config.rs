//! Gallery configuration.

use ih_core::Rgb;
use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

/// Where the icons come from and how they are shown.
///
/// Deserializes from camelCase JSON; every missing field keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Folder inside the repository that holds the icons.
    pub folder: String,
    /// Explicit listing URL, overriding the one derived from the fields
    /// above.
    pub listing_url: Option<String>,
    /// Width and height of each mounted icon, in pixels.
    pub icon_size: u32,
    /// Target color applied to the copies before the user picks one.
    pub initial_color: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            owner: String::from("PKief"),
            repo: String::from("vscode-material-icon-theme"),
            folder: String::from("icons"),
            listing_url: None,
            icon_size: 128,
            initial_color: String::from("#2196f3"),
        }
    }
}

impl GalleryConfig {
    /// URL of the directory listing to fetch.
    #[must_use]
    pub fn listing_url(&self) -> String {
        match &self.listing_url {
            Some(url) => url.clone(),
            None => format!(
                "https://api.github.com/repos/{}/{}/contents/{}",
                self.owner, self.repo, self.folder
            ),
        }
    }

    /// Check that the initial color is one the colorizer accepts.
    pub fn validate(&self) -> Result<(), GalleryError> {
        self.initial_color.parse::<Rgb>()?;
        Ok(())
    }
}
