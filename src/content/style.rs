//! Per-image styling directives
//!
//! Mirrors the shape of `image-config.json`:
//! `{"esquie1.jpg": {"objectFit": "contain", "objectPosition": "center center"}}`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::defaults::{
    DEFAULT_OBJECT_FIT, DEFAULT_OBJECT_POSITION, FALLBACK_FIT_OVERRIDES, IMAGES,
};

/// Fit mode and position for one image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStyle {
    #[serde(default = "default_object_fit")]
    pub object_fit: String,
    #[serde(default = "default_object_position")]
    pub object_position: String,
}

fn default_object_fit() -> String {
    DEFAULT_OBJECT_FIT.to_string()
}

fn default_object_position() -> String {
    DEFAULT_OBJECT_POSITION.to_string()
}

impl Default for ImageStyle {
    fn default() -> Self {
        Self {
            object_fit: default_object_fit(),
            object_position: default_object_position(),
        }
    }
}

/// Styling map keyed by image filename
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageConfig(BTreeMap<String, ImageStyle>);

impl ImageConfig {
    /// Built-in map covering every canonical image
    pub fn builtin() -> Self {
        let map = IMAGES
            .iter()
            .map(|image| {
                let fit = FALLBACK_FIT_OVERRIDES
                    .iter()
                    .find(|(name, _)| name == image)
                    .map_or(DEFAULT_OBJECT_FIT, |(_, fit)| *fit);
                let style = ImageStyle {
                    object_fit: fit.to_string(),
                    object_position: DEFAULT_OBJECT_POSITION.to_string(),
                };
                ((*image).to_string(), style)
            })
            .collect();
        Self(map)
    }

    /// Style for an image, falling back to the default directive
    pub fn style_for(&self, image: &str) -> ImageStyle {
        self.0.get(image).cloned().unwrap_or_default()
    }

    pub fn contains(&self, image: &str) -> bool {
        self.0.contains_key(image)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
