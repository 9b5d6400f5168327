//! Map Vector Forge - OpenStreetMap GeoJSON to layered SVG conversion
//!
//! This library renders a bounded geographic window of OpenStreetMap vector
//! data into a flat, static SVG document: features are projected through a
//! Web-Mercator transform, converted to path data, classified into four
//! visual layers (water, buildings, roads, outlines), and assembled into a
//! single deterministic document with zoom-driven stroke weights.
//!
//! # Example
//!
//! ```rust
//! use map_vector_forge::{geojson_to_svg, Bounds, FeatureCollection, RenderOptions};
//!
//! let collection = FeatureCollection::default();
//! let bounds = Bounds::new(1.0, 0.0, 1.0, 0.0);
//! let svg = geojson_to_svg(&collection, &bounds, &RenderOptions::default());
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.ends_with("</svg>"));
//! ```

pub mod classify;
pub mod geo;
pub mod geojson;
pub mod profile;
pub mod projection;
pub mod renderer;
pub mod style;

pub use classify::{classify, Layer};
pub use geo::{Bounds, BoundsError};
pub use geojson::{Feature, FeatureCollection, GeojsonError, Geometry, LngLat};
pub use profile::{ProfileError, RenderProfile};
pub use projection::Projection;
pub use renderer::{geojson_to_svg, preview_svg, RenderOptions};
pub use style::{StrokeScale, StrokeWidths};

use thiserror::Error;

/// Errors that can occur before the conversion engine runs. The engine
/// itself degrades instead of failing: malformed geometries are skipped and
/// degenerate windows are floored by machine epsilon.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while parsing GeoJSON input text
    #[error("geojson error: {0}")]
    Geojson(#[from] GeojsonError),

    /// Caller-supplied bounds rejected at the input boundary
    #[error("bounds error: {0}")]
    Bounds(#[from] BoundsError),
}

/// Parse GeoJSON text and render the layered export document.
///
/// This is the convenience entry point for callers holding raw text: it
/// validates the bounds, parses the collection, and converts. The
/// conversion itself cannot fail.
///
/// # Example
///
/// ```rust
/// use map_vector_forge::{render_json, Bounds, RenderOptions};
///
/// let svg = render_json(
///     r#"{ "type": "FeatureCollection", "features": [] }"#,
///     &Bounds::new(1.0, 0.0, 1.0, 0.0),
///     &RenderOptions::default(),
/// )
/// .unwrap();
///
/// assert!(svg.contains("<g class=\"roads\">"));
/// ```
pub fn render_json(
    text: &str,
    bounds: &Bounds,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    bounds.validate()?;
    let collection = FeatureCollection::from_str(text)?;
    Ok(geojson_to_svg(&collection, bounds, options))
}
