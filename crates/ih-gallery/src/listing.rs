//! Repository directory listing.
//!
//! The listing has the shape of the GitHub contents API: a JSON array of
//! entries, each with a name, a type and (for files) a download URL.

use serde::{Deserialize, Serialize};

use crate::error::GalleryError;
use crate::fetch::Fetcher;

/// One entry of a directory listing. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// An icon file selected from the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconSource {
    pub name: String,
    pub download_url: String,
}

pub fn parse_listing(json: &str) -> Result<Vec<RepoEntry>, GalleryError> {
    Ok(serde_json::from_str(json)?)
}

/// Keep the SVG files that can be downloaded, in listing order.
pub fn select_icons<I>(entries: I) -> Vec<IconSource>
where
    I: IntoIterator<Item = RepoEntry>,
{
    entries
        .into_iter()
        .filter(|entry| entry.kind == "file" && entry.name.ends_with(".svg"))
        .filter_map(|entry| {
            let download_url = entry.download_url?;
            Some(IconSource {
                name: entry.name,
                download_url,
            })
        })
        .collect()
}

/// Fetch and filter the listing at `url`.
pub async fn fetch_listing<F: Fetcher>(
    fetcher: &F,
    url: &str,
) -> Result<Vec<IconSource>, GalleryError> {
    let body = fetcher.fetch_text(url).await?;
    Ok(select_icons(parse_listing(&body)?))
}
