//! # Product Images
//!
//! Composes the media gallery of a product page. The catalog supplies image
//! and video records plus display settings; this crate turns them into one
//! ordered, filtered list of slides and hands that list, together with the
//! untouched display settings, to a carousel that does the actual rendering.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Normalize   props  →  canonical settings   (shapes, defaults, enums)
//! 2. Compose     records + settings  →  slides  (filter, map, order)
//! ```
//!
//! Both stages are pure and synchronous. They run on every render and keep no
//! state between calls.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Catalog records (`ImageRecord`, `VideoRecord`) and the output `Slide` |
//! | [`normalize`] | Stage 1 — `hiddenImages` shape coercion, zoom settings, content order |
//! | [`compose`] | Stage 2 — hidden-pattern filtering, slide mapping, ordering |
//! | [`config`] | Display settings and the layered `gallery.toml` defaults |
//! | [`host`] | Injected storefront services: class-name resolution, runtime context |
//! | [`gallery`] | Props → carousel payload, wiring the two stages together |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Shapes Are Resolved Once
//!
//! `hiddenImages` may be a string or a list, and zoom settings exist in a
//! deprecated nested form and a current flat form. The normalizer turns each
//! into a single canonical shape at the boundary; nothing downstream branches
//! on input shape.
//!
//! ## Explicit Default Patterns
//!
//! When `hiddenImages` is absent the gallery hides images tagged
//! `skuvariation` (see [`normalize::DEFAULT_HIDDEN_IMAGES`]). An explicit empty
//! list means "hide nothing", so "no preference" and "no exclusions" stay
//! distinguishable.
//!
//! ## Fail Loudly on Bad Patterns
//!
//! An invalid hidden-image pattern is an error, never "match nothing". The
//! caller decides whether to render a fallback.
//!
//! ## No Ambient State
//!
//! Storefront services (scoped class names, session context) are traits passed
//! to [`gallery::ProductImages::new`], not globals.

pub mod compose;
pub mod config;
pub mod gallery;
pub mod host;
pub mod normalize;
pub mod output;
pub mod types;

pub use compose::{ComposeError, compose_slides};
pub use gallery::{CarouselPayload, GalleryError, GalleryProps, ProductImages};
pub use normalize::{ContentOrder, HiddenImages, NormalizeError};
pub use types::{ImageRecord, Slide, VideoRecord};

#[cfg(test)]
pub(crate) mod test_helpers;
