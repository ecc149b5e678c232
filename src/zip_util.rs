use crate::error::Result;
use crate::feature::Feature;
use crate::geojson;
use std::io::prelude::*;
use std::io::{Cursor, Seek};
use zip::read::{ZipArchive, ZipFile};

type PseudoFile = Cursor<Vec<u8>>;

fn is_geojson(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name.ends_with(".geojson") || name.ends_with(".json")
}

pub fn zip_to_pseudofile(mut zip: ZipFile) -> std::io::Result<PseudoFile> {
    let mut tmp = Cursor::new(Vec::with_capacity(zip.size() as usize));
    zip.read_to_end(tmp.get_mut())?;
    Ok(tmp)
}

/// Decodes every GeoJSON entry of a bundle, keyed by entry name, in archive
/// order. Other entries are ignored.
pub fn features_from_zip<R: Read + Seek>(reader: R) -> Result<Vec<(String, Vec<Feature>)>> {
    let mut archive = ZipArchive::new(reader)?;
    let mut collections = Vec::new();

    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        let name = entry.name().to_owned();
        if entry.is_dir() || !is_geojson(&name) {
            continue;
        }
        let file = zip_to_pseudofile(entry)?;
        collections.push((name, geojson::from_reader(file)?));
    }

    Ok(collections)
}
