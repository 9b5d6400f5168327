//! SVG document assembly
//!
//! Builds the final document from per-feature path data. Two variants share
//! the same skeleton:
//!
//! - the **layered** document groups paths into four styled layers (water,
//!   buildings, roads, outlines) with zoom-driven stroke widths; this is
//!   the export output;
//! - the **preview** document keeps the uncategorized polygon/line/point
//!   grouping and fixed styling of the on-screen preview.
//!
//! Both are deterministic for identical inputs and never fail: malformed or
//! unsupported geometries simply contribute no markup.

use crate::classify::{classify, LayerBuckets};
use crate::geo::Bounds;
use crate::geojson::FeatureCollection;
use crate::projection::Projection;
use crate::style::StrokeWidths;

use super::config::RenderOptions;
use super::path::{geometry_to_paths, normalize_whitespace};

// Fixed layer paints; not configurable.
const WATER_FILL: &str = "#b7d3e6";
const WATER_STROKE: &str = "#7aa8c9";
const BUILDING_FILL: &str = "#d9d2c7";
const BUILDING_STROKE: &str = "#a89f92";
const ROAD_STROKE: &str = "#3b3f46";
const OUTLINE_STROKE: &str = "#8b9099";

const PREVIEW_STYLES: &str = concat!(
    ".geom-lines{fill:none;stroke:#555;stroke-width:1;stroke-linecap:round;stroke-linejoin:round;}",
    ".geom-polygons{fill:#9ec5fe33;stroke:#2b59c3;stroke-width:0.6;stroke-linejoin:round;}",
    ".geom-points{fill:#d9534f;stroke:#ffffff;stroke-width:0.6;}"
);

/// Render the layered export document.
///
/// Layer groups appear in fixed paint order (water, buildings, roads,
/// outlines) so area work underlies line work. Point features are not part
/// of this variant and are discarded.
pub fn geojson_to_svg(
    collection: &FeatureCollection,
    bounds: &Bounds,
    options: &RenderOptions,
) -> String {
    let projection = Projection::prepare(bounds, options.width);
    let widths = StrokeWidths::compute(options.zoom, &options.stroke_scale);

    let mut buckets = LayerBuckets::default();
    for feature in &collection.features {
        let geometry = match &feature.geometry {
            Some(geometry) => geometry,
            None => continue,
        };
        let paths = geometry_to_paths(geometry, &projection, options.point_radius);
        let layer = classify(feature);
        if !paths.areas.is_empty() {
            buckets.push_area(layer, path_element(&paths.areas));
        }
        if !paths.lines.is_empty() {
            buckets.push_line(layer, path_element(&paths.lines));
        }
    }

    let mut svg = document_open(&projection);
    svg.push_str("<defs><style>");
    svg.push_str(&layer_styles(&widths));
    svg.push_str("</style></defs>");
    push_group(&mut svg, "water", &buckets.water);
    push_group(&mut svg, "buildings", &buckets.buildings);
    push_group(&mut svg, "roads", &buckets.roads);
    push_group(&mut svg, "outlines", &buckets.outlines);
    svg.push_str("</svg>");
    svg
}

/// Render the preview document: uncategorized polygons, lines, and point
/// markers with fixed styling.
pub fn preview_svg(
    collection: &FeatureCollection,
    bounds: &Bounds,
    options: &RenderOptions,
) -> String {
    let projection = Projection::prepare(bounds, options.width);

    let mut polygon_elements = Vec::new();
    let mut line_elements = Vec::new();
    let mut point_markup = String::new();
    for feature in &collection.features {
        let geometry = match &feature.geometry {
            Some(geometry) => geometry,
            None => continue,
        };
        let paths = geometry_to_paths(geometry, &projection, options.point_radius);
        if !paths.areas.is_empty() {
            polygon_elements.push(path_element(&paths.areas));
        }
        if !paths.lines.is_empty() {
            line_elements.push(path_element(&paths.lines));
        }
        if !paths.points.is_empty() {
            point_markup.push_str(&paths.points);
        }
    }

    let mut svg = document_open(&projection);
    svg.push_str("<defs><style>");
    svg.push_str(PREVIEW_STYLES);
    svg.push_str("</style></defs>");
    push_group(&mut svg, "geom-polygons", &polygon_elements);
    push_group(&mut svg, "geom-lines", &line_elements);
    // Markers are already complete elements
    svg.push_str(r#"<g class="geom-points">"#);
    svg.push_str(&point_markup);
    svg.push_str("</g>");
    svg.push_str("</svg>");
    svg
}

fn document_open(projection: &Projection) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.2} {:.2}">"#,
        projection.width, projection.height, projection.width, projection.height
    )
}

fn path_element(data: &str) -> String {
    format!(r#"<path d="{}" />"#, normalize_whitespace(data))
}

fn push_group(svg: &mut String, class: &str, elements: &[String]) {
    svg.push_str(&format!(r#"<g class="{}">"#, class));
    for element in elements {
        svg.push_str(element);
    }
    svg.push_str("</g>");
}

fn layer_styles(widths: &StrokeWidths) -> String {
    let mut css = String::new();
    css.push_str(&format!(
        ".water{{fill:{};stroke:{};stroke-width:{};stroke-linejoin:round;}}",
        WATER_FILL,
        WATER_STROKE,
        fmt_width(widths.water)
    ));
    css.push_str(&format!(
        ".buildings{{fill:{};stroke:{};stroke-width:{};stroke-linejoin:round;}}",
        BUILDING_FILL,
        BUILDING_STROKE,
        fmt_width(widths.buildings)
    ));
    css.push_str(&format!(
        ".roads{{fill:none;stroke:{};stroke-width:{};stroke-linecap:round;stroke-linejoin:round;}}",
        ROAD_STROKE,
        fmt_width(widths.roads)
    ));
    css.push_str(&format!(
        ".outlines{{fill:none;stroke:{};stroke-width:{};stroke-linecap:round;stroke-linejoin:round;}}",
        OUTLINE_STROKE,
        fmt_width(widths.outlines)
    ));
    css
}

/// Stroke widths keep four decimals so the clamp floors (0.0015, 0.002)
/// survive formatting; trailing zeros are dropped.
fn fmt_width(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_bounds() -> Bounds {
        Bounds::new(1.0, 0.0, 1.0, 0.0)
    }

    #[test]
    fn test_document_open_rounds_attributes() {
        let projection = Projection::prepare(&unit_bounds(), 100.0);
        let open = document_open(&projection);
        assert!(open.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
        assert!(open.contains(r#"width="100" height="100""#));
        assert!(open.contains(r#"viewBox="0 0 100.00 100.01""#));
    }

    #[test]
    fn test_path_element_normalizes_whitespace() {
        assert_eq!(
            path_element("M0 0  L1 1 Z "),
            r#"<path d="M0 0 L1 1 Z" />"#
        );
    }

    #[test]
    fn test_layer_styles_use_computed_widths() {
        let widths = StrokeWidths {
            roads: 1.6,
            outlines: 0.8,
            water: 0.9,
            buildings: 0.32,
        };
        let css = layer_styles(&widths);
        assert!(css.contains(".roads{fill:none;stroke:#3b3f46;stroke-width:1.6;"));
        assert!(css.contains(".outlines{fill:none;stroke:#8b9099;stroke-width:0.8;"));
        assert!(css.contains(".water{fill:#b7d3e6;stroke:#7aa8c9;stroke-width:0.9;"));
        assert!(css.contains(".buildings{fill:#d9d2c7;stroke:#a89f92;stroke-width:0.32;"));
    }

    #[test]
    fn test_fmt_width_keeps_clamp_floors() {
        assert_eq!(fmt_width(0.0015), "0.0015");
        assert_eq!(fmt_width(0.002), "0.002");
        assert_eq!(fmt_width(1.6), "1.6");
        assert_eq!(fmt_width(0.8 * 0.4), "0.32");
    }

    #[test]
    fn test_empty_collection_has_all_groups() {
        let svg = geojson_to_svg(
            &FeatureCollection::default(),
            &unit_bounds(),
            &RenderOptions::default(),
        );
        assert!(svg.contains(r#"<g class="water"></g>"#));
        assert!(svg.contains(r#"<g class="buildings"></g>"#));
        assert!(svg.contains(r#"<g class="roads"></g>"#));
        assert!(svg.contains(r#"<g class="outlines"></g>"#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_group_paint_order() {
        let svg = geojson_to_svg(
            &FeatureCollection::default(),
            &unit_bounds(),
            &RenderOptions::default(),
        );
        let water = svg.find(r#"<g class="water">"#).unwrap();
        let buildings = svg.find(r#"<g class="buildings">"#).unwrap();
        let roads = svg.find(r#"<g class="roads">"#).unwrap();
        let outlines = svg.find(r#"<g class="outlines">"#).unwrap();
        assert!(water < buildings);
        assert!(buildings < roads);
        assert!(roads < outlines);
    }

    #[test]
    fn test_preview_group_order() {
        let svg = preview_svg(
            &FeatureCollection::default(),
            &unit_bounds(),
            &RenderOptions::default(),
        );
        let polygons = svg.find(r#"<g class="geom-polygons">"#).unwrap();
        let lines = svg.find(r#"<g class="geom-lines">"#).unwrap();
        let points = svg.find(r#"<g class="geom-points">"#).unwrap();
        assert!(polygons < lines);
        assert!(lines < points);
    }
}
