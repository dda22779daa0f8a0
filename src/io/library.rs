//! Loader for the glazing-type library stream.
//!
//! The library is a flat list of glass types and forms its own tree root
//! beside the building. Its stream opens with a single discarded title line
//! followed by the usual two section headings.

use super::record::RecordReader;
use super::{check_capacity, LoadError};
use crate::model::library::{GlassType, Library};
use crate::model::limits::MAX_GLASS_TYPES;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Loads a glazing-type library from a reader.
pub fn read_library<R: BufRead>(input: R, diag: &mut dyn Write) -> Result<Library, LoadError> {
    let mut r = RecordReader::new(input);

    r.skip_line()?;
    r.skip_headings()?;
    let nglass = r.count_field()?;
    check_capacity("GLASS TYPES", nglass, MAX_GLASS_TYPES, diag)?;

    let mut library = Library::default();
    for _ in 0..nglass {
        r.skip_headings()?;
        let name = r.str_field()?;
        let diffuse_trans = r.real_field()?;
        let inside_refl = r.real_field()?;
        let mut coefs = [0.0; 6];
        for c in coefs.iter_mut() {
            *c = r.real_field()?;
        }
        library.glass.push(GlassType {
            name,
            diffuse_trans,
            inside_refl,
            coefs,
        });
    }

    Ok(library)
}

/// Opens and loads a glazing-type library file.
pub fn read_library_file(path: &Path, diag: &mut dyn Write) -> Result<Library> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open library: {}", path.display()))?;
    read_library(BufReader::new(file), diag)
        .with_context(|| format!("Failed to load library: {}", path.display()))
}
