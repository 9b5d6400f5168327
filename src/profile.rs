//! TOML render profiles
//!
//! A profile pre-sets canvas and stroke settings so a batch of exports can
//! share one look without repeating flags. Profiles are plain TOML files
//! with an optional metadata table:
//!
//! ```toml
//! [metadata]
//! name = "Poster"
//! description = "Wide canvas, heavy roads"
//!
//! [render]
//! width = 2048
//! zoom = 14.0
//!
//! [stroke-scale]
//! roads = 1.8
//! buildings = 0.6
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::RenderOptions;

/// Errors that can occur when loading or parsing render profiles
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse profile TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A named bundle of render settings. Unset fields leave the corresponding
/// option untouched when applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderProfile {
    /// Optional name for the profile
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    pub width: Option<f64>,
    pub zoom: Option<f64>,
    pub roads: Option<f64>,
    pub outlines: Option<f64>,
    pub water: Option<f64>,
    pub buildings: Option<f64>,
}

/// TOML structure for deserializing profiles
#[derive(Deserialize)]
struct TomlProfile {
    metadata: Option<TomlMetadata>,
    render: Option<TomlRender>,
    #[serde(rename = "stroke-scale")]
    stroke_scale: Option<TomlStrokeScale>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlRender {
    width: Option<f64>,
    zoom: Option<f64>,
}

#[derive(Deserialize)]
struct TomlStrokeScale {
    roads: Option<f64>,
    outlines: Option<f64>,
    water: Option<f64>,
    buildings: Option<f64>,
}

impl RenderProfile {
    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a profile from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ProfileError> {
        let parsed: TomlProfile = toml::from_str(content)?;
        let render = parsed.render;
        let strokes = parsed.stroke_scale;

        Ok(RenderProfile {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            width: render.as_ref().and_then(|r| r.width),
            zoom: render.as_ref().and_then(|r| r.zoom),
            roads: strokes.as_ref().and_then(|s| s.roads),
            outlines: strokes.as_ref().and_then(|s| s.outlines),
            water: strokes.as_ref().and_then(|s| s.water),
            buildings: strokes.as_ref().and_then(|s| s.buildings),
        })
    }

    /// Overlay the profile's set fields onto existing options.
    pub fn apply(&self, mut options: RenderOptions) -> RenderOptions {
        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(zoom) = self.zoom {
            options.zoom = zoom;
        }
        if let Some(roads) = self.roads {
            options.stroke_scale.roads = roads;
        }
        if let Some(outlines) = self.outlines {
            options.stroke_scale.outlines = outlines;
        }
        if let Some(water) = self.water {
            options.stroke_scale.water = water;
        }
        if let Some(buildings) = self.buildings {
            options.stroke_scale.buildings = buildings;
        }
        options
    }
}
