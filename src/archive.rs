//! Zip archiver for the results tree.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::ExtractResult;

/// Write everything under `source` into a zip archive at `destination`,
/// with entries named by their path relative to `source`.
///
/// Directories get explicit entries so empty ones survive the round trip.
/// Returns only after the archive has been finished and flushed to disk.
pub fn zip_dir(source: &Path, destination: &Path) -> ExtractResult<()> {
    let file = File::create(destination)?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default();

    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .expect("walked entry is under the archive root");
        let name = entry_name(relative);

        if entry.file_type().is_dir() {
            writer.add_directory(name, options)?;
        } else {
            writer.start_file(name, options)?;
            let mut input = File::open(entry.path())?;
            io::copy(&mut input, &mut writer)?;
        }
    }

    let mut inner = writer.finish()?;
    inner.flush()?;
    Ok(())
}

/// Archive entry name: relative path components joined with `/`.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
