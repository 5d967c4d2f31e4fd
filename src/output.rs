//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every slide leads with its positional index and kind, followed by its alt
//! text when it has one. URLs are secondary context on indented lines, so the
//! listing reads like a content inventory of the carousel.
//!
//! ```text
//! Slides (images-first)
//! 001 image Front view
//!     Source: https://cdn.example/1.jpg
//!     Thumbnail: https://cdn.example/1-thumb.jpg
//! 002 video
//!     Source: https://cdn.example/spin.mp4
//!
//! Hidden
//!     1 of 3 images matched a hidden pattern
//!
//! Display
//!     position: left
//!     thumbnailsOrientation: vertical
//!     zoomProps.zoomType: in-page
//!
//! Container
//!     product-images-productImagesContainer product-images-content w-100
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::gallery::{CarouselPayload, GalleryProps};
use crate::normalize::ContentOrder;
use crate::types::Slide;
use std::path::Path;

const MAX_ALT_LEN: usize = 60;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// Header line plus indented URL lines for one slide.
///
/// ```text
/// 001 image Front view
///     Source: a.jpg
///     Thumbnail: a-thumb.jpg     // only when it differs from Source
/// ```
fn slide_lines(index: usize, slide: &Slide) -> Vec<String> {
    match slide {
        Slide::Image { url, alt, thumb_url } => {
            let header = match alt.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => {
                    format!("{} image {}", format_index(index), truncate(text, MAX_ALT_LEN))
                }
                _ => format!("{} image", format_index(index)),
            };
            let mut lines = vec![header, format!("{}Source: {}", indent(1), url)];
            if thumb_url != url {
                lines.push(format!("{}Thumbnail: {}", indent(1), thumb_url));
            }
            lines
        }
        Slide::Video { src, .. } => vec![
            format!("{} video", format_index(index)),
            format!("{}Source: {}", indent(1), src),
        ],
    }
}

/// Flatten the payload's forwarded settings into `key: value` pairs, in the
/// order the carousel documents them. Unset optional values are skipped.
fn setting_lines(payload: &CarouselPayload) -> Vec<String> {
    let display = &payload.display;
    let zoom = &payload.zoom;
    let mut pairs: Vec<(&str, String)> = vec![
        ("position", enum_name(&display.position)),
        ("thumbnailsOrientation", enum_name(&display.thumbnails_orientation)),
        (
            "displayThumbnailsArrows",
            display.display_thumbnails_arrows.to_string(),
        ),
    ];
    let optional = [
        ("aspectRatio", display.aspect_ratio.clone()),
        ("maxHeight", display.max_height.map(|h| h.to_string())),
        ("thumbnailAspectRatio", display.thumbnail_aspect_ratio.clone()),
        (
            "thumbnailMaxHeight",
            display.thumbnail_max_height.map(|h| h.to_string()),
        ),
        (
            "showNavigationArrows",
            display.show_navigation_arrows.map(|b| b.to_string()),
        ),
        (
            "showPaginationDots",
            display.show_pagination_dots.map(|b| b.to_string()),
        ),
        ("zoomMode", zoom.zoom_mode.as_ref().map(enum_name)),
        ("zoomFactor", zoom.zoom_factor.map(|f| f.to_string())),
    ];
    pairs.extend(optional.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))));
    pairs.push(("zoomProps.zoomType", zoom.zoom_props.zoom_type.clone()));

    pairs
        .into_iter()
        .map(|(key, value)| format!("{}{}: {}", indent(1), key, value))
        .collect()
}

/// Wire name of a serde-renamed unit enum (`"in-place-click"`, `"left"`).
fn enum_name<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => String::new(),
    }
}

/// Format the `compose` command output: slides, hidden count, settings.
pub fn format_compose_output(
    props: &GalleryProps,
    payload: &CarouselPayload,
    order: ContentOrder,
) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Slides ({})", order));
    if payload.slides.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, slide) in payload.slides.iter().enumerate() {
        lines.extend(slide_lines(i + 1, slide));
    }

    let hidden = props.images.len().saturating_sub(payload.image_count());
    if hidden > 0 {
        lines.push(String::new());
        lines.push("Hidden".to_string());
        lines.push(format!(
            "{}{} of {} images matched a hidden pattern",
            indent(1),
            hidden,
            props.images.len()
        ));
    }

    lines.push(String::new());
    lines.push("Display".to_string());
    lines.extend(setting_lines(payload));

    lines.push(String::new());
    lines.push("Container".to_string());
    lines.push(format!("{}{}", indent(1), payload.container_class));

    lines
}

/// Print compose output to stdout.
pub fn print_compose_output(
    props: &GalleryProps,
    payload: &CarouselPayload,
    order: ContentOrder,
) {
    for line in format_compose_output(props, payload, order) {
        println!("{}", line);
    }
}

/// One-line summary for the `check` command.
///
/// ```text
/// props.json: 3 slides (2 images, 1 video), 1 hidden
/// ```
pub fn format_check_summary(
    source: &Path,
    props: &GalleryProps,
    payload: &CarouselPayload,
) -> String {
    let images = payload.image_count();
    let videos = payload.video_count();
    let hidden = props.images.len().saturating_sub(images);
    format!(
        "{}: {} {} ({} {}, {} {}), {} hidden",
        source.display(),
        payload.slides.len(),
        plural(payload.slides.len(), "slide"),
        images,
        plural(images, "image"),
        videos,
        plural(videos, "video"),
        hidden
    )
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
