//! Geometry-to-path conversion
//!
//! Converts projected GeoJSON geometries into SVG path `d` strings and
//! point markers. Empty coordinate lists produce empty strings, which the
//! callers drop.

use crate::geojson::{Geometry, LngLat};
use crate::projection::Projection;

/// Path data produced from a single geometry, split by rendering category.
/// Categories the geometry does not populate stay empty.
#[derive(Debug, Default, PartialEq)]
pub struct GeometryPaths {
    /// Open line work (`M … L …`).
    pub lines: String,
    /// Closed area subpaths (`M … L … Z`).
    pub areas: String,
    /// Finished `<circle />` markers for point features.
    pub points: String,
}

/// Convert one geometry into path data. Unsupported variants yield all-empty
/// output and are silently skipped by the callers.
pub fn geometry_to_paths(
    geometry: &Geometry,
    projection: &Projection,
    point_radius: f64,
) -> GeometryPaths {
    match geometry {
        Geometry::LineString { coordinates } => GeometryPaths {
            lines: line_to_path(coordinates, projection),
            ..GeometryPaths::default()
        },
        Geometry::MultiLineString { coordinates } => {
            let parts: Vec<String> = coordinates
                .iter()
                .map(|segment| line_to_path(segment, projection))
                .filter(|path| !path.is_empty())
                .collect();
            GeometryPaths {
                lines: parts.join(" "),
                ..GeometryPaths::default()
            }
        }
        Geometry::Polygon { coordinates } => GeometryPaths {
            areas: polygon_to_path(coordinates, projection),
            ..GeometryPaths::default()
        },
        Geometry::MultiPolygon { coordinates } => {
            let shapes: Vec<String> = coordinates
                .iter()
                .map(|shape| polygon_to_path(shape, projection))
                .filter(|path| !path.is_empty())
                .collect();
            GeometryPaths {
                areas: shapes.join(" "),
                ..GeometryPaths::default()
            }
        }
        Geometry::Point { coordinates } => GeometryPaths {
            points: circle_marker(*coordinates, projection, point_radius),
            ..GeometryPaths::default()
        },
        Geometry::MultiPoint { coordinates } => {
            let markers: String = coordinates
                .iter()
                .map(|position| circle_marker(*position, projection, point_radius))
                .collect();
            GeometryPaths {
                points: markers,
                ..GeometryPaths::default()
            }
        }
        Geometry::Unknown => GeometryPaths::default(),
    }
}

/// `M x0 y0 L x1 y1 …` through every coordinate; empty input yields "".
fn line_to_path(coords: &[LngLat], projection: &Projection) -> String {
    if coords.is_empty() {
        return String::new();
    }
    let (start_x, start_y) = projection.to_svg_point(coords[0].lng, coords[0].lat);
    let mut path = format!("M{} {}", fmt_coord(start_x), fmt_coord(start_y));
    for position in &coords[1..] {
        let (x, y) = projection.to_svg_point(position.lng, position.lat);
        path.push_str(&format!(" L{} {}", fmt_coord(x), fmt_coord(y)));
    }
    path
}

/// Each non-empty ring becomes a closed subpath (`… Z`); rings join with a
/// single space. Shells and holes are not distinguished; both render as
/// closed subpaths in the same path element.
fn polygon_to_path(rings: &[Vec<LngLat>], projection: &Projection) -> String {
    let parts: Vec<String> = rings
        .iter()
        .map(|ring| line_to_path(ring, projection))
        .filter(|path| !path.is_empty())
        .map(|path| format!("{} Z", path))
        .collect();
    parts.join(" ")
}

fn circle_marker(position: LngLat, projection: &Projection, radius: f64) -> String {
    let (cx, cy) = projection.to_svg_point(position.lng, position.lat);
    format!(
        r#"<circle cx="{}" cy="{}" r="{}" />"#,
        fmt_coord(cx),
        fmt_coord(cy),
        fmt_coord(radius)
    )
}

/// Shortest decimal form of an already-rounded coordinate: `0`, `1.5`,
/// `100.01`. No trailing zeros, negative zero collapsed.
pub(crate) fn fmt_coord(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Collapse whitespace runs to single spaces and trim the ends, so path
/// data embeds as a minimal attribute value.
pub(crate) fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
