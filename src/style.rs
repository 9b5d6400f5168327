//! Stroke-width computation
//!
//! Stroke weights grow super-linearly with zoom so line work stays legible
//! as finer detail becomes visible, and each layer carries an independent
//! caller multiplier. The bases, ranges, and exponent are empirically tuned
//! visual constants; they are kept as named constants for reproducibility.

/// Zoom level at which the base widths apply unscaled.
pub const BASE_ZOOM: f64 = 13.0;

/// Exponent driving super-linear growth of stroke weight with zoom.
pub const ZOOM_EXPONENT: f64 = 1.4;

pub const ROAD_BASE_WIDTH: f64 = 1.6;
pub const ROAD_WIDTH_RANGE: (f64, f64) = (0.002, 3.0);

pub const OUTLINE_BASE_WIDTH: f64 = 0.8;
pub const OUTLINE_WIDTH_RANGE: (f64, f64) = (0.0015, 1.4);

pub const WATER_BASE_WIDTH: f64 = 0.9;
pub const WATER_WIDTH_RANGE: (f64, f64) = (0.01, 2.1);

/// Building strokes are a fixed fraction of the computed outline width.
pub const BUILDING_OUTLINE_FRACTION: f64 = 0.4;

/// Caller-supplied per-layer stroke multipliers, each defaulting to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeScale {
    pub roads: f64,
    pub outlines: f64,
    pub water: f64,
    pub buildings: f64,
}

impl Default for StrokeScale {
    fn default() -> Self {
        Self {
            roads: 1.0,
            outlines: 1.0,
            water: 1.0,
            buildings: 1.0,
        }
    }
}

/// Computed per-layer stroke widths, embedded into the document style block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeWidths {
    pub roads: f64,
    pub outlines: f64,
    pub water: f64,
    pub buildings: f64,
}

impl StrokeWidths {
    /// Derive the four widths from the zoom level and caller multipliers.
    ///
    /// The building width rides on the computed outline width rather than a
    /// base of its own, and is the only one not re-clamped.
    pub fn compute(zoom: f64, scale: &StrokeScale) -> Self {
        let ratio = zoom_ratio(zoom);
        let roads = scale_width(ROAD_BASE_WIDTH, ROAD_WIDTH_RANGE, ratio, scale.roads);
        let outlines = scale_width(OUTLINE_BASE_WIDTH, OUTLINE_WIDTH_RANGE, ratio, scale.outlines);
        let water = scale_width(WATER_BASE_WIDTH, WATER_WIDTH_RANGE, ratio, scale.water);
        let buildings = outlines * BUILDING_OUTLINE_FRACTION * scale.buildings;
        Self {
            roads,
            outlines,
            water,
            buildings,
        }
    }
}

/// Normalized zoom driving the width curve; zoom is floored at 1.
pub fn zoom_ratio(zoom: f64) -> f64 {
    zoom.max(1.0) / BASE_ZOOM
}

fn scale_width(base: f64, (min, max): (f64, f64), ratio: f64, multiplier: f64) -> f64 {
    (base * ratio.powf(ZOOM_EXPONENT) * multiplier).clamp(min, max)
}
