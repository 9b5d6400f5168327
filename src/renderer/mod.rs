//! SVG renderer for the conversion pipeline
//!
//! This module turns a feature collection plus a projection into the final
//! SVG document string, in two variants: the classified layered export and
//! the uncategorized preview.

pub mod config;
pub mod path;
pub mod svg;

pub use config::RenderOptions;
pub use svg::{geojson_to_svg, preview_svg};
