//! Catalog records consumed by the composer and the slides it produces.
//!
//! Input records arrive as camelCase JSON straight from the catalog. They are
//! only ever borrowed: the composer reads them and builds owned [`Slide`]s.

use serde::{Deserialize, Serialize};

/// Fixed thumbnail width the carousel uses for video slides.
pub const VIDEO_THUMB_WIDTH: u32 = 300;

/// A product image as supplied by the catalog.
///
/// Two URL shapes exist in the wild:
/// - `imageUrls`: ordered list of size variants, the first is the primary URL
/// - `imageUrl`: legacy single-URL field
///
/// [`primary_url`](Self::primary_url) resolves whichever one is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Alt text. Also the field hidden-image patterns are matched against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_text: Option<String>,
    /// Size thresholds paired with `image_urls`. Not read by the composer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Vec<f64>>,
}

impl ImageRecord {
    /// `imageUrls[0]` when the list is present and non-empty, else `imageUrl`.
    pub fn primary_url(&self) -> Option<&str> {
        self.image_urls
            .as_ref()
            .and_then(|urls| urls.first())
            .or(self.image_url.as_ref())
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }

    /// Descriptive text, with an empty string treated as absent.
    pub fn text(&self) -> Option<&str> {
        self.image_text.as_deref().filter(|t| !t.is_empty())
    }
}

/// A product video as supplied by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoRecord {
    pub video_url: String,
}

/// One entry of the carousel.
///
/// Serialized with a `kind` tag so the presentation layer can switch on it:
///
/// ```text
/// {"kind":"image","url":"a.jpg","alt":"front","thumbUrl":"a-thumb.jpg"}
/// {"kind":"video","src":"v.mp4","thumbWidth":300}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Slide {
    #[serde(rename_all = "camelCase")]
    Image {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        thumb_url: String,
    },
    #[serde(rename_all = "camelCase")]
    Video { src: String, thumb_width: u32 },
}

impl Slide {
    /// The URL the slide displays: `url` for images, `src` for videos.
    pub fn locator(&self) -> &str {
        match self {
            Slide::Image { url, .. } => url,
            Slide::Video { src, .. } => src,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Slide::Video { .. })
    }
}
