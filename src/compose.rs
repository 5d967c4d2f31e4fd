//! Slide composition.
//!
//! Turns catalog records into the ordered slide list the carousel renders:
//!
//! ```text
//! images ──filter(hidden patterns)──map──┐
//!                                        ├──order(contentOrder)──▶ slides
//! videos ───────────────────────────map──┘
//! ```
//!
//! ## Filtering
//!
//! An image is dropped iff it has non-empty `imageText` and at least one hidden
//! pattern matches that text. Patterns are case-insensitive regular expressions
//! searched anywhere in the text (not anchored). Lookaround and backreferences
//! are accepted, so patterns written for browser regex engines keep working.
//! Images without text are always kept. Videos carry no text and are never
//! filtered.
//!
//! An invalid pattern fails the whole composition. Treating it as "matches
//! nothing" would silently show images the merchant asked to hide.
//!
//! ## Ordering
//!
//! Plain concatenation, `images ++ videos` or `videos ++ images`. Relative order
//! within each kind is the catalog order. The result is rebuilt on every call;
//! there is no cache to invalidate.

use crate::normalize::ContentOrder;
use crate::types::{ImageRecord, Slide, VIDEO_THUMB_WIDTH, VideoRecord};
use fancy_regex::{Regex, RegexBuilder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Invalid hidden image pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },
    #[error("Hidden image pattern {pattern:?} failed on {text:?}: {source}")]
    PatternMatch {
        pattern: String,
        text: String,
        #[source]
        source: fancy_regex::Error,
    },
    #[error("Image #{index} has no URL (neither imageUrls nor imageUrl is set)")]
    MissingImageUrl { index: usize },
    #[error("Video #{index} has an empty videoUrl")]
    MissingVideoUrl { index: usize },
}

/// Compiled hidden-image patterns.
#[derive(Debug, Clone)]
pub struct HiddenImageFilter {
    regexes: Vec<Regex>,
}

impl HiddenImageFilter {
    /// Compile every pattern case-insensitively. Fails on the first invalid one.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ComposeError> {
        let regexes = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| ComposeError::InvalidPattern {
                        pattern: pattern.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { regexes })
    }

    /// Whether the image should be left out of the carousel.
    ///
    /// Errors only when a backtracking pattern exceeds the engine's step limit.
    pub fn is_hidden(&self, image: &ImageRecord) -> Result<bool, ComposeError> {
        let Some(text) = image.text() else {
            return Ok(false);
        };
        for re in &self.regexes {
            let matched = re.is_match(text).map_err(|source| ComposeError::PatternMatch {
                pattern: re.as_str().to_string(),
                text: text.to_string(),
                source,
            })?;
            if matched {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Map an image record to an image slide.
///
/// `thumbUrl` is `thumbnailUrl` when present, otherwise the primary URL.
pub fn image_slide(index: usize, image: &ImageRecord) -> Result<Slide, ComposeError> {
    let url = image
        .primary_url()
        .ok_or(ComposeError::MissingImageUrl { index })?;
    let thumb_url = image
        .thumbnail_url
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(url);
    Ok(Slide::Image {
        url: url.to_string(),
        alt: image.image_text.clone(),
        thumb_url: thumb_url.to_string(),
    })
}

/// Map a video record to a video slide.
pub fn video_slide(index: usize, video: &VideoRecord) -> Result<Slide, ComposeError> {
    if video.video_url.is_empty() {
        return Err(ComposeError::MissingVideoUrl { index });
    }
    Ok(Slide::Video {
        src: video.video_url.clone(),
        thumb_width: VIDEO_THUMB_WIDTH,
    })
}

/// Filter and map images, keeping catalog order.
///
/// `index` in errors refers to the position in `images`, before filtering.
pub fn image_slides(
    images: &[ImageRecord],
    filter: &HiddenImageFilter,
) -> Result<Vec<Slide>, ComposeError> {
    let mut slides = Vec::with_capacity(images.len());
    for (index, image) in images.iter().enumerate() {
        if !filter.is_hidden(image)? {
            slides.push(image_slide(index, image)?);
        }
    }
    Ok(slides)
}

/// Map videos, keeping catalog order.
pub fn video_slides(videos: &[VideoRecord]) -> Result<Vec<Slide>, ComposeError> {
    videos
        .iter()
        .enumerate()
        .map(|(index, video)| video_slide(index, video))
        .collect()
}

/// Concatenate the two kinds according to `order`.
pub fn order_slides(order: ContentOrder, images: Vec<Slide>, videos: Vec<Slide>) -> Vec<Slide> {
    let (mut first, second) = match order {
        ContentOrder::ImagesFirst => (images, videos),
        ContentOrder::VideosFirst => (videos, images),
    };
    first.extend(second);
    first
}

/// Filter, map, and order in one pass.
///
/// Nothing is returned on error: a bad pattern or a URL-less record fails the
/// whole call.
pub fn compose_slides<S: AsRef<str>>(
    images: &[ImageRecord],
    videos: &[VideoRecord],
    hidden_patterns: &[S],
    content_order: ContentOrder,
) -> Result<Vec<Slide>, ComposeError> {
    let filter = HiddenImageFilter::compile(hidden_patterns)?;
    let images = image_slides(images, &filter)?;
    let videos = video_slides(videos)?;
    Ok(order_slides(content_order, images, videos))
}
