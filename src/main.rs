#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use structopt::StructOpt;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use marker_tool::output::{self, Format};
use marker_tool::zip_util::features_from_zip;
use marker_tool::{geojson, register_all, Classifier, Feature, MarkerManager, Registries};

#[derive(StructOpt)]
#[structopt(name = "marker_tool", about = "Builds map markers from airfield and waypoint GeoJSON")]
struct Args {
    /// GeoJSON feature collections, or zip bundles of them
    #[structopt(name = "input", parse(from_os_str), required = true)]
    inputs: Vec<PathBuf>,
    #[structopt(
        short = "o",
        long = "output",
        parse(from_os_str),
        default_value = "./markers.json"
    )]
    output: PathBuf,
    /// json or kml
    #[structopt(short = "f", long = "format", default_value = "json")]
    format: Format,
    /// Priority / minimum zoom handed to the marker registries
    #[structopt(short = "p", long = "priority", default_value = "10")]
    priority: u32,
    /// Keep only features of these regions (e.g. CH, FR)
    #[structopt(short = "r", long = "region")]
    regions: Vec<String>,
    /// Fail features of unknown type instead of skipping them
    #[structopt(long = "strict")]
    strict: bool,
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn is_zip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

fn load(path: &Path) -> marker_tool::Result<Vec<Feature>> {
    let file = BufReader::new(File::open(path)?);
    if !is_zip(path) {
        return geojson::from_reader(file);
    }

    let mut features = Vec::new();
    for (name, collection) in features_from_zip(file)? {
        debug!(entry = %name, count = collection.len(), "Unpacked bundle entry");
        features.extend(collection);
    }
    Ok(features)
}

fn in_regions(feature: &Feature, regions: &[String]) -> bool {
    regions.is_empty() || regions.iter().any(|r| *r == feature.attributes.region)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::from_args();
    init_logging(args.verbose);

    let mut features = Vec::new();
    for input in &args.inputs {
        info!(path = %input.display(), "Loading features...");
        let collection = load(input)?;
        let total = collection.len();
        let before = features.len();
        features.extend(collection.into_iter().filter(|f| in_regions(f, &args.regions)));
        debug!(total, kept = features.len() - before, "Applied region filter");
    }

    info!(count = features.len(), "Classifying features...");
    let classifier = Classifier::new(args.priority, args.strict);
    let batch = classifier.classify_batch(&features);

    for (i, e) in &batch.errors {
        let f = &features[*i];
        warn!(
            id = %f.attributes.id,
            name = %f.attributes.name,
            flags = %f.flags,
            "Bad feature #{}: {}, ignoring!",
            i,
            e
        );
    }
    if batch.skipped > 0 {
        debug!(skipped = batch.skipped, "Skipped features of unrecognized type");
    }

    let mut airfields = MarkerManager::new();
    let mut waypoints = MarkerManager::new();
    let registered = register_all(
        batch.markers,
        &mut Registries {
            airfield: &mut airfields,
            waypoint: &mut waypoints,
        },
    );
    info!(
        registered,
        airfields = airfields.len(),
        waypoints = waypoints.len(),
        "Registered markers"
    );

    info!(path = %args.output.display(), "Outputing markers...");
    let mut out = BufWriter::new(File::create(&args.output)?);
    output::write(args.format, &mut out, &airfields, &waypoints)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_bundles_detected_by_extension() {
        assert!(is_zip(Path::new("data/alps.zip")));
        assert!(is_zip(Path::new("ALPS.ZIP")));
        assert!(!is_zip(Path::new("airfield.geojson")));
        assert!(!is_zip(Path::new("zip")));
    }
}
