//! Feature classification into visual layers
//!
//! Every feature lands in exactly one of four stylistic layers, decided by
//! its OSM tags in a fixed priority order. The geometry's shape then decides
//! which layer group the finished path ends up in: area paths and line paths
//! route differently (an area tagged as a road has no road-fill bucket and
//! falls back to outlines).

use crate::geojson::Feature;

/// The four stylistic buckets a feature can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Road,
    Water,
    Building,
    Outline,
}

impl Layer {
    /// CSS class of the layer's `<g>` group in the output document.
    pub fn css_class(self) -> &'static str {
        match self {
            Layer::Road => "roads",
            Layer::Water => "water",
            Layer::Building => "buildings",
            Layer::Outline => "outlines",
        }
    }
}

/// Assign a layer from OSM tags, in fixed priority order: highway, then
/// building, then waterway / natural=water, then the outline catch-all.
pub fn classify(feature: &Feature) -> Layer {
    if has_tag(feature, "highway") {
        return Layer::Road;
    }
    if has_tag(feature, "building") {
        return Layer::Building;
    }
    if has_tag(feature, "waterway") || feature.tag("natural") == Some("water") {
        return Layer::Water;
    }
    Layer::Outline
}

fn has_tag(feature: &Feature, key: &str) -> bool {
    feature.tag(key).map_or(false, |value| !value.is_empty())
}

/// Per-layer accumulators for finished `<path />` elements, kept in paint
/// order: water, buildings, roads, outlines.
#[derive(Debug, Default)]
pub struct LayerBuckets {
    pub water: Vec<String>,
    pub buildings: Vec<String>,
    pub roads: Vec<String>,
    pub outlines: Vec<String>,
}

impl LayerBuckets {
    /// Route an area path. Water and building polygons keep their layer;
    /// everything else, road polygons included, falls to outlines.
    pub fn push_area(&mut self, layer: Layer, element: String) {
        match layer {
            Layer::Water => self.water.push(element),
            Layer::Building => self.buildings.push(element),
            Layer::Road | Layer::Outline => self.outlines.push(element),
        }
    }

    /// Route a line path. Roads and waterways keep their layer; building
    /// outlines drawn as lines fall to outlines.
    pub fn push_line(&mut self, layer: Layer, element: String) {
        match layer {
            Layer::Road => self.roads.push(element),
            Layer::Water => self.water.push(element),
            Layer::Building | Layer::Outline => self.outlines.push(element),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geojson::FeatureCollection;

    fn feature_with_tags(tags: &[(&str, &str)]) -> Feature {
        let pairs: Vec<String> = tags
            .iter()
            .map(|(key, value)| format!(r#""{}": "{}""#, key, value))
            .collect();
        let json = format!(
            r#"{{ "features": [{{ "properties": {{ "tags": {{ {} }} }} }}] }}"#,
            pairs.join(", ")
        );
        FeatureCollection::from_str(&json)
            .expect("should parse")
            .features
            .remove(0)
    }

    #[test]
    fn test_highway_wins_over_building() {
        let feature = feature_with_tags(&[("highway", "residential"), ("building", "yes")]);
        assert_eq!(classify(&feature), Layer::Road);
    }

    #[test]
    fn test_building() {
        let feature = feature_with_tags(&[("building", "yes")]);
        assert_eq!(classify(&feature), Layer::Building);
    }

    #[test]
    fn test_waterway() {
        let feature = feature_with_tags(&[("waterway", "stream")]);
        assert_eq!(classify(&feature), Layer::Water);
    }

    #[test]
    fn test_natural_water() {
        let feature = feature_with_tags(&[("natural", "water")]);
        assert_eq!(classify(&feature), Layer::Water);
    }

    #[test]
    fn test_natural_other_is_outline() {
        let feature = feature_with_tags(&[("natural", "wood")]);
        assert_eq!(classify(&feature), Layer::Outline);
    }

    #[test]
    fn test_empty_tag_value_is_skipped() {
        let feature = feature_with_tags(&[("highway", ""), ("building", "yes")]);
        assert_eq!(classify(&feature), Layer::Building);
    }

    #[test]
    fn test_untagged_is_outline() {
        assert_eq!(classify(&Feature::default()), Layer::Outline);
    }

    #[test]
    fn test_area_road_routes_to_outlines() {
        let mut buckets = LayerBuckets::default();
        buckets.push_area(Layer::Road, "<path />".to_string());
        assert!(buckets.roads.is_empty());
        assert_eq!(buckets.outlines.len(), 1);
    }

    #[test]
    fn test_line_building_routes_to_outlines() {
        let mut buckets = LayerBuckets::default();
        buckets.push_line(Layer::Building, "<path />".to_string());
        assert!(buckets.buildings.is_empty());
        assert_eq!(buckets.outlines.len(), 1);
    }

    #[test]
    fn test_water_takes_both_shapes() {
        let mut buckets = LayerBuckets::default();
        buckets.push_area(Layer::Water, "a".to_string());
        buckets.push_line(Layer::Water, "b".to_string());
        assert_eq!(buckets.water, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(Layer::Road.css_class(), "roads");
        assert_eq!(Layer::Water.css_class(), "water");
        assert_eq!(Layer::Building.css_class(), "buildings");
        assert_eq!(Layer::Outline.css_class(), "outlines");
    }
}
