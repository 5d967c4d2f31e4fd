//! Shared test utilities for the product-images test suite.
//!
//! Record builders keep catalog fixtures to one line each, and the slide
//! extractors turn composed output into plain vectors that `assert_eq!` can
//! compare.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let images = vec![image("a.jpg"), labeled_image("swatch.jpg", "skuvariation")];
//! let videos = vec![video("v.mp4")];
//! let slides = compose_slides(&images, &videos, &["skuvariation"], ContentOrder::ImagesFirst)?;
//!
//! assert_eq!(locators(&slides), vec!["a.jpg", "v.mp4"]);
//! assert_kinds(&slides, &["image", "video"]);
//! ```

use crate::types::{ImageRecord, Slide, VideoRecord};

// =========================================================================
// Record builders
// =========================================================================

/// Image record with only the legacy `imageUrl` set.
pub fn image(url: &str) -> ImageRecord {
    ImageRecord {
        image_url: Some(url.to_string()),
        ..Default::default()
    }
}

/// Image record with a URL and descriptive text.
pub fn labeled_image(url: &str, text: &str) -> ImageRecord {
    ImageRecord {
        image_url: Some(url.to_string()),
        image_text: Some(text.to_string()),
        ..Default::default()
    }
}

pub fn video(url: &str) -> VideoRecord {
    VideoRecord {
        video_url: url.to_string(),
    }
}

// =========================================================================
// Slide extractors
// =========================================================================

/// Primary locators (`url` or `src`) in slide order.
pub fn locators(slides: &[Slide]) -> Vec<&str> {
    slides.iter().map(Slide::locator).collect()
}

/// Slide kinds in order, as the tag strings the carousel sees.
pub fn kinds(slides: &[Slide]) -> Vec<&'static str> {
    slides
        .iter()
        .map(|s| if s.is_video() { "video" } else { "image" })
        .collect()
}

/// Assert the sequence of slide kinds.
pub fn assert_kinds(slides: &[Slide], expected: &[&str]) {
    assert_eq!(kinds(slides), expected.to_vec(), "slide kinds mismatch");
}
