//! Typed GeoJSON data model
//!
//! Deserializes the subset of GeoJSON the renderer consumes: a
//! `FeatureCollection` of features whose properties may carry an OSM-style
//! `tags` mapping. Geometry types the renderer does not draw (for example
//! `GeometryCollection`) deserialize into [`Geometry::Unknown`] and are
//! skipped downstream instead of failing the parse.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Errors raised while parsing GeoJSON input text.
#[derive(Error, Debug)]
pub enum GeojsonError {
    #[error("failed to parse GeoJSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single longitude/latitude position in degrees.
///
/// GeoJSON positions are arrays of two or more numbers; altitude and any
/// further elements are accepted and ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl<'de> Deserialize<'de> for LngLat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PositionVisitor;

        impl<'de> Visitor<'de> for PositionVisitor {
            type Value = LngLat;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a GeoJSON position array of at least two numbers")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<LngLat, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let lng: f64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let lat: f64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(LngLat { lng, lat })
            }
        }

        deserializer.deserialize_seq(PositionVisitor)
    }
}

/// Geometry variants the renderer understands.
///
/// Anything else lands in `Unknown` via the catch-all tag and produces no
/// markup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: LngLat },
    MultiPoint { coordinates: Vec<LngLat> },
    LineString { coordinates: Vec<LngLat> },
    MultiLineString { coordinates: Vec<Vec<LngLat>> },
    Polygon { coordinates: Vec<Vec<LngLat>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<LngLat>>> },
    #[serde(other)]
    Unknown,
}

/// Free-form feature properties; only the OSM tag mapping is consumed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub tags: Option<BTreeMap<String, String>>,
}

/// One GeoJSON feature: an optional geometry plus properties. Features are
/// read-only input; the engine never mutates them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Properties>,
}

impl Feature {
    /// Look up an OSM tag value, if the feature carries one.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.properties
            .as_ref()?
            .tags
            .as_ref()?
            .get(key)
            .map(String::as_str)
    }
}

/// A GeoJSON feature collection, as produced by OSM-to-GeoJSON conversion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Parse a collection from GeoJSON text.
    pub fn from_str(text: &str) -> Result<Self, GeojsonError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a collection from an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, GeojsonError> {
        Ok(serde_json::from_value(value)?)
    }
}
