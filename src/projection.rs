//! Conformal cylindrical (Web-Mercator) projection
//!
//! Maps WGS84 degrees onto a target pixel canvas through a linear transform
//! derived once per conversion call. Mercator preserves local angles, so
//! shapes read correctly at any latitude within the window, and the forward
//! projection is closed-form.

use crate::geo::Bounds;

/// Forward Web-Mercator projection: degrees to projected plane units.
///
/// `x` is the longitude in radians and `y = ln(tan(π/4 + φ/2))`.
///
/// Latitude must lie strictly inside (-90, 90); at the poles `y` diverges.
/// No clamping happens here; callers keep bounds away from the poles.
pub fn project_lng_lat(lng: f64, lat: f64) -> (f64, f64) {
    let lambda = lng.to_radians();
    let phi = lat.to_radians();
    let x = lambda;
    let y = (std::f64::consts::FRAC_PI_4 + phi / 2.0).tan().ln();
    (x, y)
}

/// Linear transform from the projected plane to pixel space.
///
/// Owned exclusively by one conversion call; never cached or shared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Target canvas width in pixels.
    pub width: f64,
    /// Canvas height preserving the aspect ratio of the projected window.
    pub height: f64,
    /// Pixels per projected unit.
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Projection {
    /// Derive the transform from a bounding box and target pixel width.
    ///
    /// The projected extent is floored by machine epsilon so a degenerate
    /// box yields a trivial canvas instead of a division by zero.
    pub fn prepare(bounds: &Bounds, target_width: f64) -> Self {
        let (min_x, min_y) = project_lng_lat(bounds.west, bounds.south);
        let (max_x, max_y) = project_lng_lat(bounds.east, bounds.north);

        let projected_width = (max_x - min_x).max(f64::EPSILON);
        let scale = target_width / projected_width;
        let height = ((max_y - min_y) * scale).max(f64::EPSILON);

        Self {
            width: target_width,
            height,
            scale,
            translate_x: -min_x,
            translate_y: -min_y,
        }
    }

    /// Project a position into pixel coordinates: translate, scale, and flip
    /// the vertical axis (SVG's origin is top-left while projected Y grows
    /// northward). Both coordinates are rounded to two decimals.
    pub fn to_svg_point(&self, lng: f64, lat: f64) -> (f64, f64) {
        let (x, y) = project_lng_lat(lng, lat);
        let px = (x + self.translate_x) * self.scale;
        let py = self.height - (y + self.translate_y) * self.scale;
        (round2(px), round2(py))
    }
}

/// Round to two decimal places, the output coordinate precision.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_bounds() -> Bounds {
        Bounds::new(1.0, 0.0, 1.0, 0.0)
    }

    #[test]
    fn test_project_origin() {
        let (x, y) = project_lng_lat(0.0, 0.0);
        assert_eq!(x, 0.0);
        assert!(y.abs() < 1e-12);
    }

    #[test]
    fn test_projection_is_symmetric_about_equator() {
        let (_, y_north) = project_lng_lat(0.0, 45.0);
        let (_, y_south) = project_lng_lat(0.0, -45.0);
        assert!((y_north + y_south).abs() < 1e-12);
    }

    #[test]
    fn test_prepare_scales_to_target_width() {
        let projection = Projection::prepare(&unit_bounds(), 100.0);
        assert_eq!(projection.width, 100.0);
        // One degree of longitude at the equator spans the full width
        let (max_x, _) = project_lng_lat(1.0, 1.0);
        assert!((projection.scale * max_x - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_corners_map_to_canvas_corners() {
        let bounds = unit_bounds();
        let projection = Projection::prepare(&bounds, 100.0);

        let (x, y) = projection.to_svg_point(bounds.west, bounds.north);
        assert_eq!((x, y), (0.0, 0.0));

        let (x, y) = projection.to_svg_point(bounds.east, bounds.south);
        assert_eq!(x, 100.0);
        assert_eq!(y, round2(projection.height));
    }

    #[test]
    fn test_vertical_axis_is_flipped() {
        let bounds = unit_bounds();
        let projection = Projection::prepare(&bounds, 100.0);
        let (_, y_top) = projection.to_svg_point(0.0, 1.0);
        let (_, y_bottom) = projection.to_svg_point(0.0, 0.0);
        assert!(y_top < y_bottom);
    }

    #[test]
    fn test_height_slightly_exceeds_width_off_equator() {
        // Mercator stretches latitude, so a square-degree window projects
        // slightly taller than wide
        let projection = Projection::prepare(&unit_bounds(), 100.0);
        assert!(projection.height > 100.0);
        assert!(projection.height < 101.0);
    }

    #[test]
    fn test_degenerate_box_is_floored() {
        let bounds = Bounds::new(1.0, 1.0, 1.0, 1.0);
        let projection = Projection::prepare(&bounds, 100.0);
        assert!(projection.scale.is_finite());
        assert!(projection.height >= f64::EPSILON);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(-2.346), -2.35);
        assert_eq!(round2(100.0), 100.0);
    }
}
