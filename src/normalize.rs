//! Configuration normalizer.
//!
//! Catalog props arrive in several shapes: `hiddenImages` may be one string or
//! a list, zoom settings exist both as the deprecated nested `zoomProps` object
//! and as flat `zoomMode`/`zoomFactor` fields, and `contentOrder` is a free
//! string. Everything here resolves those shapes once, up front, so the
//! composer only ever sees canonical values.
//!
//! All functions are pure.

use crate::config::ZoomMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("Invalid configuration: {field} = {value:?} (expected one of: {expected})")]
    InvalidConfiguration {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Patterns applied when the caller expresses no preference.
///
/// The catalog convention is to tag SKU swatch images (a flat color used by
/// the SKU selector) with this text so the product gallery can skip them.
/// Pass an empty list to disable exclusions entirely.
pub const DEFAULT_HIDDEN_IMAGES: &[&str] = &["skuvariation"];

/// `hiddenImages` as written by the caller: a single pattern or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HiddenImages {
    One(String),
    Many(Vec<String>),
}

/// Resolve `hiddenImages` to a list of patterns.
///
/// - absent → [`DEFAULT_HIDDEN_IMAGES`]
/// - `"pattern"` → `["pattern"]`
/// - `[...]` → unchanged (an empty list stays empty)
pub fn normalize_hidden_images(input: Option<&HiddenImages>) -> Vec<String> {
    match input {
        None => DEFAULT_HIDDEN_IMAGES.iter().map(|p| p.to_string()).collect(),
        Some(HiddenImages::One(pattern)) => vec![pattern.clone()],
        Some(HiddenImages::Many(patterns)) => patterns.clone(),
    }
}

/// Deprecated nested zoom settings, still forwarded to the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoomProps {
    pub zoom_type: String,
}

impl Default for ZoomProps {
    fn default() -> Self {
        Self {
            zoom_type: "in-page".to_string(),
        }
    }
}

/// Zoom settings as handed to the presentation layer.
///
/// Both the deprecated and the current forms travel side by side. They are
/// never reconciled against each other; the carousel decides which one wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomConfig {
    pub zoom_props: ZoomProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_mode: Option<ZoomMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_factor: Option<f64>,
}

/// Fill the default nested `zoomProps` and pass the flat fields through.
pub fn normalize_zoom_config(
    zoom_props: Option<&ZoomProps>,
    zoom_mode: Option<ZoomMode>,
    zoom_factor: Option<f64>,
) -> ZoomConfig {
    ZoomConfig {
        zoom_props: zoom_props.cloned().unwrap_or_default(),
        zoom_mode,
        zoom_factor,
    }
}

/// Whether image slides or video slides come first in the carousel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentOrder {
    #[default]
    ImagesFirst,
    VideosFirst,
}

impl ContentOrder {
    const EXPECTED: &'static str = "images-first, videos-first";

    pub fn as_str(self) -> &'static str {
        match self {
            ContentOrder::ImagesFirst => "images-first",
            ContentOrder::VideosFirst => "videos-first",
        }
    }
}

impl fmt::Display for ContentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentOrder {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "images-first" => Ok(ContentOrder::ImagesFirst),
            "videos-first" => Ok(ContentOrder::VideosFirst),
            other => Err(NormalizeError::InvalidConfiguration {
                field: "contentOrder",
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

/// Resolve `contentOrder`, defaulting to `images-first` when absent.
pub fn normalize_content_order(input: Option<&str>) -> Result<ContentOrder, NormalizeError> {
    input.map_or(Ok(ContentOrder::default()), |s| s.parse())
}
