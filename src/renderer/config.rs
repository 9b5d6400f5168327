//! Configuration for one conversion call

use crate::style::{StrokeScale, BASE_ZOOM};

/// Default target canvas width in pixels.
pub const DEFAULT_WIDTH: f64 = 1024.0;

/// Default marker radius for point features (preview variant only).
pub const DEFAULT_POINT_RADIUS: f64 = 3.0;

/// Options for one conversion call. All fields have sensible defaults; use
/// the builder methods to override individual settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Target canvas width in pixels.
    pub width: f64,

    /// Zoom level driving stroke weights.
    pub zoom: f64,

    /// Per-layer stroke multipliers.
    pub stroke_scale: StrokeScale,

    /// Marker radius for point features; only the preview variant draws
    /// points.
    pub point_radius: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            zoom: BASE_ZOOM,
            stroke_scale: StrokeScale::default(),
            point_radius: DEFAULT_POINT_RADIUS,
        }
    }
}

impl RenderOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target canvas width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the zoom level.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set the per-layer stroke multipliers.
    pub fn with_stroke_scale(mut self, stroke_scale: StrokeScale) -> Self {
        self.stroke_scale = stroke_scale;
        self
    }

    /// Set the point marker radius.
    pub fn with_point_radius(mut self, point_radius: f64) -> Self {
        self.point_radius = point_radius;
        self
    }
}
