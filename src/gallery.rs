//! Product gallery assembly.
//!
//! [`ProductImages`] takes the catalog props for one product and produces the
//! [`CarouselPayload`] the presentation layer renders:
//!
//! ```text
//! GalleryProps ──normalize──▶ patterns, order, zoom
//!              ──compose────▶ slides
//!              ──forward────▶ display settings
//!                              └────────▶ CarouselPayload
//! ```
//!
//! The payload is handed over read-only. How the carousel draws it, swipes
//! through it or zooms into it is its own business.

use crate::compose::{self, ComposeError, HiddenImageFilter};
use crate::config::{DisplayConfig, ZoomMode};
use crate::host::{ClassNameResolver, RuntimeContext};
use crate::normalize::{
    self, HiddenImages, NormalizeError, ZoomConfig, ZoomProps, normalize_content_order,
};
use crate::types::{ImageRecord, Slide, VideoRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Compose(#[from] ComposeError),
}

/// Logical class handles the gallery container is styled with, in class-list
/// order.
pub const CSS_HANDLES: &[&str] = &["productImagesContainer", "content"];

/// Utility class appended after the resolved handles.
const FULL_WIDTH: &str = "w-100";

/// Catalog props for one product gallery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryProps {
    pub images: Vec<ImageRecord>,
    pub videos: Vec<VideoRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_images: Option<HiddenImages>,
    /// Validated by the normalizer, not by deserialization, so a bad value
    /// surfaces as an invalid-configuration error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_props: Option<ZoomProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_mode: Option<ZoomMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_factor: Option<f64>,
    #[serde(flatten)]
    pub display: DisplayConfig,
}

/// Everything the carousel needs, in one object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselPayload {
    pub slides: Vec<Slide>,
    #[serde(flatten)]
    pub display: DisplayConfig,
    #[serde(flatten)]
    pub zoom: ZoomConfig,
    pub container_class: String,
}

impl CarouselPayload {
    pub fn image_count(&self) -> usize {
        self.slides.iter().filter(|s| !s.is_video()).count()
    }

    pub fn video_count(&self) -> usize {
        self.slides.iter().filter(|s| s.is_video()).count()
    }
}

/// Renders product galleries against a fixed pair of host services.
///
/// Holds no state between renders: every call rebuilds the slide list from
/// the props it is given.
pub struct ProductImages<C, R> {
    classes: C,
    runtime: R,
}

impl<C: ClassNameResolver, R: RuntimeContext> ProductImages<C, R> {
    pub fn new(classes: C, runtime: R) -> Self {
        Self { classes, runtime }
    }

    /// Class list for the gallery container element.
    pub fn container_class(&self) -> String {
        let mut classes: Vec<String> = CSS_HANDLES
            .iter()
            .map(|handle| self.classes.resolve(handle))
            .collect();
        classes.push(FULL_WIDTH.to_string());
        classes.join(" ")
    }

    /// Normalize the props, compose the slides, and assemble the payload.
    pub fn render(&self, props: &GalleryProps) -> Result<CarouselPayload, GalleryError> {
        let patterns = normalize::normalize_hidden_images(props.hidden_images.as_ref());
        let order = normalize_content_order(props.content_order.as_deref())?;
        let zoom = normalize::normalize_zoom_config(
            props.zoom_props.as_ref(),
            props.zoom_mode,
            props.zoom_factor,
        );

        let filter = HiddenImageFilter::compile(&patterns)?;
        let images = compose::image_slides(&props.images, &filter)?;
        let videos = compose::video_slides(&props.videos)?;
        log::debug!(
            "account {} ({}): {} of {} images kept, {} videos, {} (mobile: {})",
            self.runtime.account(),
            self.runtime.currency(),
            images.len(),
            props.images.len(),
            videos.len(),
            order,
            self.runtime.is_mobile()
        );
        let slides = compose::order_slides(order, images, videos);

        Ok(CarouselPayload {
            slides,
            display: props.display.clone(),
            zoom,
            container_class: self.container_class(),
        })
    }
}
