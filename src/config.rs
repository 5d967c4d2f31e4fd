//! Display configuration and the `gallery.toml` defaults layer.
//!
//! Catalog props are resolved from three layers, later ones winning key by key:
//!
//! ```text
//! stock defaults          (Default impls below)
//!   └── gallery.toml      (site-wide settings, optional)
//!         └── props.json  (per-product catalog payload)
//! ```
//!
//! ## Config File
//!
//! `gallery.toml` uses the same camelCase names as the catalog props, so a
//! setting can be moved between the two without renaming:
//!
//! ```toml
//! hiddenImages = ["skuvariation"]
//! contentOrder = "videos-first"
//! position = "right"
//! thumbnailsOrientation = "horizontal"
//! zoomMode = "open-modal"
//! zoomFactor = 2
//! ```
//!
//! Catalog records (`images`, `videos`) are not settings and are rejected here,
//! as are unknown keys, to catch typos early.
//!
//! ## Display Settings
//!
//! [`DisplayConfig`] is opaque to the composer. Enumerated fields are checked for
//! membership in [`resolve_props`], where an out-of-set value becomes
//! [`NormalizeError::InvalidConfiguration`]; everything else is forwarded
//! verbatim to the carousel.

use crate::gallery::GalleryProps;
use crate::normalize::{NormalizeError, normalize_content_order};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Invalid(#[from] NormalizeError),
}

/// Name of the settings file looked up in the config directory.
pub const CONFIG_FILE: &str = "gallery.toml";

/// Keys accepted in `gallery.toml`.
pub const SETTING_KEYS: &[&str] = &[
    "hiddenImages",
    "contentOrder",
    "zoomProps",
    "zoomMode",
    "zoomFactor",
    "position",
    "thumbnailsOrientation",
    "displayThumbnailsArrows",
    "aspectRatio",
    "maxHeight",
    "thumbnailAspectRatio",
    "thumbnailMaxHeight",
    "showNavigationArrows",
    "showPaginationDots",
];

/// Which side of the main image the thumbnail strip sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailPosition {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailsOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// How the carousel zooms into an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoomMode {
    Disabled,
    InPlaceClick,
    InPlaceHover,
    OpenModal,
}

/// Presentation settings forwarded untouched to the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayConfig {
    pub position: ThumbnailPosition,
    pub thumbnails_orientation: ThumbnailsOrientation,
    pub display_thumbnails_arrows: bool,
    /// Main image aspect ratio, e.g. `"auto"` or `"3:4"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    /// Main image max height in pixels. Fractional values pass through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_aspect_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_max_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_navigation_arrows: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_pagination_dots: Option<bool>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            position: ThumbnailPosition::Left,
            thumbnails_orientation: ThumbnailsOrientation::Vertical,
            display_thumbnails_arrows: false,
            aspect_ratio: None,
            max_height: None,
            thumbnail_aspect_ratio: None,
            thumbnail_max_height: None,
            show_navigation_arrows: None,
            show_pagination_dots: None,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Recursively merge `overlay` on top of `base`.
///
/// - Objects are merged key-by-key (overlay keys override base keys).
/// - Non-object values in overlay replace base values entirely, so a
///   `hiddenImages` list in props replaces the configured list rather than
///   appending to it.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_values(base: serde_json::Value, overlay: serde_json::Value) -> serde_json::Value {
    use serde_json::Value;
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => merge_values(base_val, overlay_val),
                    None => overlay_val,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Check that a settings table only uses known keys.
pub fn validate_settings(settings: &toml::Value) -> Result<(), ConfigError> {
    let table = settings.as_table().ok_or_else(|| {
        ConfigError::Validation(format!("{CONFIG_FILE} must be a table of settings"))
    })?;
    for key in table.keys() {
        if key == "images" || key == "videos" {
            return Err(ConfigError::Validation(format!(
                "'{key}' is catalog data and belongs in the props file, not {CONFIG_FILE}"
            )));
        }
        if !SETTING_KEYS.contains(&key.as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown setting '{key}' in {CONFIG_FILE}"
            )));
        }
    }
    Ok(())
}

/// Load `gallery.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `gallery.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        log::debug!("no {} in {}", CONFIG_FILE, dir.display());
        return Ok(None);
    }
    log::debug!("loading {}", config_path.display());
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load the settings layer from `gallery.toml` in the given directory.
///
/// An absent file yields an empty layer. Unknown keys are rejected, and the
/// settings must resolve to valid props on their own.
pub fn load_config(dir: &Path) -> Result<serde_json::Value, ConfigError> {
    let Some(raw) = load_raw_config(dir)? else {
        return Ok(serde_json::Value::Object(Default::default()));
    };
    validate_settings(&raw)?;
    let layer = serde_json::to_value(raw)?;
    resolve_props(layer.clone(), serde_json::Value::Object(Default::default()))?;
    Ok(layer)
}

/// Reject an enumerated field whose value is outside its declared set.
///
/// Absent and `null` fields pass; their defaults apply later.
fn check_member<T: DeserializeOwned>(
    props: &serde_json::Value,
    field: &'static str,
    expected: &'static str,
) -> Result<(), NormalizeError> {
    let Some(value) = props.get(field).filter(|v| !v.is_null()) else {
        return Ok(());
    };
    T::deserialize(value)
        .map(|_| ())
        .map_err(|_| NormalizeError::InvalidConfiguration {
            field,
            value: value
                .as_str()
                .map_or_else(|| value.to_string(), str::to_string),
            expected,
        })
}

/// Check every enumerated setting in a merged props object.
pub fn validate_enumerated(props: &serde_json::Value) -> Result<(), NormalizeError> {
    if let Some(order) = props.get("contentOrder").and_then(serde_json::Value::as_str) {
        normalize_content_order(Some(order))?;
    }
    check_member::<ThumbnailPosition>(props, "position", "left, right")?;
    check_member::<ThumbnailsOrientation>(
        props,
        "thumbnailsOrientation",
        "vertical, horizontal",
    )?;
    check_member::<ZoomMode>(
        props,
        "zoomMode",
        "disabled, in-place-click, in-place-hover, open-modal",
    )?;
    Ok(())
}

/// Merge catalog props on top of the settings layer and deserialize.
///
/// Enumerated fields are checked first, so an unknown `position` fails the
/// same way an unknown `contentOrder` does.
pub fn resolve_props(
    settings: serde_json::Value,
    props: serde_json::Value,
) -> Result<GalleryProps, ConfigError> {
    let merged = merge_values(settings, props);
    validate_enumerated(&merged)?;
    let props = serde_json::from_value(merged)?;
    Ok(props)
}

/// Returns a fully-commented stock `gallery.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Product Images Configuration
# ============================
# Site-wide defaults for the product image gallery. Every key is optional and
# uses the same name as the matching catalog prop. Values set in a props file
# override the values here.
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Composition
# ---------------------------------------------------------------------------

# Case-insensitive regular expressions matched against each image's imageText.
# Matching images are left out of the gallery. A single string is also
# accepted. Set to [] to show every image.
hiddenImages = ["skuvariation"]

# "images-first" or "videos-first".
contentOrder = "images-first"

# ---------------------------------------------------------------------------
# Thumbnails
# ---------------------------------------------------------------------------

# "left" or "right" of the main image.
position = "left"

# "vertical" or "horizontal".
thumbnailsOrientation = "vertical"

# Show arrows on the thumbnail strip.
displayThumbnailsArrows = false

# thumbnailAspectRatio = "1:1"
# thumbnailMaxHeight = 150

# ---------------------------------------------------------------------------
# Main image
# ---------------------------------------------------------------------------

# aspectRatio = "auto"
# maxHeight = 600
# showNavigationArrows = true
# showPaginationDots = true

# ---------------------------------------------------------------------------
# Zoom
# ---------------------------------------------------------------------------

# "disabled", "in-place-click", "in-place-hover" or "open-modal".
# zoomMode = "in-place-click"
# zoomFactor = 2

# Deprecated nested form, still forwarded alongside zoomMode/zoomFactor.
[zoomProps]
zoomType = "in-page"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn default_display_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.position, ThumbnailPosition::Left);
        assert_eq!(config.thumbnails_orientation, ThumbnailsOrientation::Vertical);
        assert!(!config.display_thumbnails_arrows);
        assert_eq!(config.max_height, None);
    }

    #[test]
    fn display_config_serializes_only_set_fields() {
        let config = DisplayConfig {
            max_height: Some(600.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            json!({
                "position": "left",
                "thumbnailsOrientation": "vertical",
                "displayThumbnailsArrows": false,
                "maxHeight": 600.0
            })
        );
    }

    #[test]
    fn parse_partial_display_config() {
        let config: DisplayConfig =
            serde_json::from_value(json!({"position": "right", "showPaginationDots": false}))
                .unwrap();
        assert_eq!(config.position, ThumbnailPosition::Right);
        assert_eq!(config.show_pagination_dots, Some(false));
        // Defaults preserved
        assert_eq!(config.thumbnails_orientation, ThumbnailsOrientation::Vertical);
    }

    // =========================================================================
    // Enumerated values
    // =========================================================================

    #[test]
    fn unknown_position_rejected() {
        let result: Result<DisplayConfig, _> = serde_json::from_value(json!({"position": "top"}));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown variant"));
    }

    #[test]
    fn unknown_orientation_rejected() {
        let result: Result<DisplayConfig, _> =
            serde_json::from_value(json!({"thumbnailsOrientation": "diagonal"}));
        assert!(result.is_err());
    }

    #[test]
    fn zoom_mode_values() {
        let modes: Vec<ZoomMode> = serde_json::from_value(json!([
            "disabled",
            "in-place-click",
            "in-place-hover",
            "open-modal"
        ]))
        .unwrap();
        assert_eq!(
            modes,
            vec![
                ZoomMode::Disabled,
                ZoomMode::InPlaceClick,
                ZoomMode::InPlaceHover,
                ZoomMode::OpenModal
            ]
        );
        assert!(serde_json::from_value::<ZoomMode>(json!("fullscreen")).is_err());
    }

    // =========================================================================
    // merge_values tests
    // =========================================================================

    #[test]
    fn merge_values_scalar_override() {
        let merged = merge_values(
            json!({"contentOrder": "images-first"}),
            json!({"contentOrder": "videos-first"}),
        );
        assert_eq!(merged["contentOrder"], "videos-first");
    }

    #[test]
    fn merge_values_preserves_base_keys() {
        let merged = merge_values(json!({"a": 1, "b": 2}), json!({"a": 10}));
        assert_eq!(merged, json!({"a": 10, "b": 2}));
    }

    #[test]
    fn merge_values_nested_objects() {
        let merged = merge_values(
            json!({"zoomProps": {"zoomType": "in-page", "extra": 1}}),
            json!({"zoomProps": {"zoomType": "no-zoom"}}),
        );
        assert_eq!(merged, json!({"zoomProps": {"zoomType": "no-zoom", "extra": 1}}));
    }

    #[test]
    fn merge_values_arrays_replace() {
        let merged = merge_values(
            json!({"hiddenImages": ["a", "b"]}),
            json!({"hiddenImages": []}),
        );
        assert_eq!(merged, json!({"hiddenImages": []}));
    }

    #[test]
    fn merge_values_shape_change_replaces() {
        let merged = merge_values(
            json!({"hiddenImages": ["a", "b"]}),
            json!({"hiddenImages": "c"}),
        );
        assert_eq!(merged["hiddenImages"], "c");
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_empty_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let layer = load_config(tmp.path()).unwrap();
        assert_eq!(layer, json!({}));
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
contentOrder = "videos-first"
position = "right"
zoomFactor = 2
"#,
        )
        .unwrap();

        let layer = load_config(tmp.path()).unwrap();
        assert_eq!(layer["contentOrder"], "videos-first");
        assert_eq!(layer["position"], "right");
        assert_eq!(layer["zoomFactor"], 2);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "this is not valid toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), r#"contentOrdr = "videos-first""#).unwrap();
        let err = load_config(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("contentOrdr"));
    }

    #[test]
    fn load_config_rejects_catalog_records() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
[[images]]
imageUrl = "x.jpg"
"#,
        )
        .unwrap();
        let err = load_config(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("catalog data"));
    }

    #[test]
    fn load_config_rejects_bad_enum_value() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), r#"position = "top""#).unwrap();
        let err = load_config(tmp.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(NormalizeError::InvalidConfiguration {
                field: "position",
                ..
            })
        ));
        assert!(err.to_string().contains("left, right"));
    }

    #[test]
    fn load_config_rejects_bad_content_order() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), r#"contentOrder = "newest""#).unwrap();
        let err = load_config(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("newest"));
    }

    #[test]
    fn load_raw_config_returns_none_when_no_file() {
        let tmp = TempDir::new().unwrap();
        assert!(load_raw_config(tmp.path()).unwrap().is_none());
    }

    // =========================================================================
    // resolve_props tests
    // =========================================================================

    #[test]
    fn resolve_props_props_override_settings() {
        let settings = json!({"contentOrder": "videos-first", "position": "right"});
        let props = json!({"contentOrder": "images-first"});
        let resolved = resolve_props(settings, props).unwrap();
        assert_eq!(resolved.content_order.as_deref(), Some("images-first"));
        assert_eq!(resolved.display.position, ThumbnailPosition::Right);
    }

    #[test]
    fn resolve_props_enum_errors_are_invalid_configuration() {
        let cases = [
            (json!({"position": "top"}), "position", "top"),
            (
                json!({"thumbnailsOrientation": "diagonal"}),
                "thumbnailsOrientation",
                "diagonal",
            ),
            (json!({"zoomMode": "fullscreen"}), "zoomMode", "fullscreen"),
            (json!({"contentOrder": "shuffle"}), "contentOrder", "shuffle"),
            (json!({"position": 3}), "position", "3"),
        ];
        for (props, expected_field, expected_value) in cases {
            match resolve_props(json!({}), props) {
                Err(ConfigError::Invalid(NormalizeError::InvalidConfiguration {
                    field,
                    value,
                    ..
                })) => {
                    assert_eq!(field, expected_field);
                    assert_eq!(value, expected_value);
                }
                other => panic!("expected invalid {expected_field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn resolve_props_null_enum_uses_default() {
        let resolved = resolve_props(json!({}), json!({"zoomMode": null})).unwrap();
        assert_eq!(resolved.zoom_mode, None);
    }

    #[test]
    fn resolve_props_fractional_heights_pass_through() {
        let resolved =
            resolve_props(json!({}), json!({"maxHeight": 480.5, "thumbnailMaxHeight": 90.25}))
                .unwrap();
        assert_eq!(resolved.display.max_height, Some(480.5));
        assert_eq!(resolved.display.thumbnail_max_height, Some(90.25));
    }

    #[test]
    fn resolve_props_empty_layers_give_defaults() {
        let resolved = resolve_props(json!({}), json!({})).unwrap();
        assert!(resolved.images.is_empty());
        assert!(resolved.videos.is_empty());
        assert!(resolved.hidden_images.is_none());
        assert_eq!(resolved.display, DisplayConfig::default());
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_settings() {
        let value: toml::Value = toml::from_str(stock_config_toml()).unwrap();
        validate_settings(&value).unwrap();
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let value: toml::Value = toml::from_str(stock_config_toml()).unwrap();
        let layer = serde_json::to_value(value).unwrap();
        let resolved = resolve_props(layer, json!({})).unwrap();
        assert_eq!(resolved.display, DisplayConfig::default());
        assert_eq!(resolved.content_order.as_deref(), Some("images-first"));
        assert_eq!(
            resolved.zoom_props.map(|z| z.zoom_type).as_deref(),
            Some("in-page")
        );
    }

    #[test]
    fn stock_config_toml_mentions_every_setting() {
        let content = stock_config_toml();
        for key in SETTING_KEYS {
            assert!(content.contains(key), "stock config is missing {key}");
        }
    }
}
