//! Map Vector Forge CLI
//!
//! Usage:
//!   map-vector-forge [OPTIONS] --bounds <S,W,N,E> [FILE]
//!
//! Reads a GeoJSON FeatureCollection from FILE (or stdin) and writes the
//! rendered SVG document to stdout.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use map_vector_forge::{
    classify, geojson_to_svg, preview_svg, Bounds, FeatureCollection, Layer, RenderOptions,
    RenderProfile,
};

#[derive(Parser)]
#[command(name = "map-vector-forge")]
#[command(about = "Render OpenStreetMap GeoJSON into a layered SVG document")]
struct Cli {
    /// Input GeoJSON file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Geographic window as south,west,north,east degrees
    #[arg(short, long, value_parser = parse_bounds)]
    bounds: Option<Bounds>,

    /// Target canvas width in pixels
    #[arg(long)]
    width: Option<f64>,

    /// Zoom level driving stroke weights
    #[arg(long)]
    zoom: Option<f64>,

    /// Stroke multiplier for the roads layer
    #[arg(long)]
    roads: Option<f64>,

    /// Stroke multiplier for the outlines layer
    #[arg(long)]
    outlines: Option<f64>,

    /// Stroke multiplier for the water layer
    #[arg(long)]
    water: Option<f64>,

    /// Stroke multiplier for the buildings layer
    #[arg(long)]
    buildings: Option<f64>,

    /// Render profile file (TOML); explicit flags win over profile values
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Emit the uncategorized preview variant instead of layered output
    #[arg(long)]
    preview: bool,

    /// Debug mode: print per-layer feature counts to stderr
    #[arg(short, long)]
    debug: bool,
}

fn parse_bounds(raw: &str) -> Result<Bounds, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err("expected four comma-separated values: south,west,north,east".to_string());
    }
    let mut edges = [0.0f64; 4];
    for (slot, part) in edges.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("invalid coordinate '{}'", part))?;
    }
    let bounds = Bounds {
        south: edges[0],
        west: edges[1],
        north: edges[2],
        east: edges[3],
    };
    bounds.validate().map_err(|e| e.to_string())?;
    Ok(bounds)
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let bounds = match cli.bounds {
        Some(bounds) => bounds,
        None => {
            eprintln!("Error: --bounds is required (south,west,north,east degrees)");
            std::process::exit(2);
        }
    };

    // Profile first, explicit flags on top
    let mut options = RenderOptions::default();
    if let Some(path) = &cli.profile {
        match RenderProfile::from_file(path) {
            Ok(profile) => {
                options = profile.apply(options);
            }
            Err(e) => {
                eprintln!("Error loading profile '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }
    if let Some(width) = cli.width {
        options.width = width;
    }
    if let Some(zoom) = cli.zoom {
        options.zoom = zoom;
    }
    if let Some(roads) = cli.roads {
        options.stroke_scale.roads = roads;
    }
    if let Some(outlines) = cli.outlines {
        options.stroke_scale.outlines = outlines;
    }
    if let Some(water) = cli.water {
        options.stroke_scale.water = water;
    }
    if let Some(buildings) = cli.buildings {
        options.stroke_scale.buildings = buildings;
    }

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let collection = match FeatureCollection::from_str(&source) {
        Ok(collection) => collection,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.debug {
        print_layer_counts(&collection);
    }

    let svg = if cli.preview {
        preview_svg(&collection, &bounds, &options)
    } else {
        geojson_to_svg(&collection, &bounds, &options)
    };
    println!("{}", svg);
}

fn print_layer_counts(collection: &FeatureCollection) {
    let mut roads = 0usize;
    let mut water = 0usize;
    let mut buildings = 0usize;
    let mut outlines = 0usize;
    let mut skipped = 0usize;

    for feature in &collection.features {
        if feature.geometry.is_none() {
            skipped += 1;
            continue;
        }
        match classify(feature) {
            Layer::Road => roads += 1,
            Layer::Water => water += 1,
            Layer::Building => buildings += 1,
            Layer::Outline => outlines += 1,
        }
    }

    eprintln!("=== Layer Debug ===");
    eprintln!("features:  {}", collection.features.len());
    eprintln!("roads:     {}", roads);
    eprintln!("water:     {}", water);
    eprintln!("buildings: {}", buildings);
    eprintln!("outlines:  {}", outlines);
    eprintln!("no geom:   {}", skipped);
    eprintln!("===================");
}

fn print_intro() {
    println!(
        r#"Map Vector Forge - OpenStreetMap GeoJSON to layered SVG

USAGE:
    map-vector-forge --bounds S,W,N,E [OPTIONS] [FILE]
    cat area.geojson | map-vector-forge --bounds S,W,N,E

OPTIONS:
    -b, --bounds     Geographic window in degrees (south,west,north,east)
    --width          Target canvas width in pixels (default 1024)
    --zoom           Zoom level driving stroke weights (default 13)
    --roads, --outlines, --water, --buildings
                     Per-layer stroke multipliers (default 1.0)
    -p, --profile    Render profile file (TOML)
    --preview        Uncategorized preview output with point markers
    -d, --debug      Per-layer feature counts on stderr
    -h, --help       Print help

QUICK START:
    map-vector-forge --bounds 52.51,13.38,52.53,13.41 area.geojson > map.svg

The input is a GeoJSON FeatureCollection as produced by OSM-to-GeoJSON
conversion; features keep their OSM tags under properties.tags."#
    );
}
