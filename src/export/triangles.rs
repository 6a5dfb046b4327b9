//! Triangle index file writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::core::types::Result;
use crate::export::LINE_TERMINATOR;

/// Write a flat index array as `i0 i1 i2` triangle lines
///
/// Indices are grouped into consecutive triples; trailing leftover indices
/// that do not fill a triangle are silently dropped.
pub fn write_triangle_file(path: &Path, indices: &[i32]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for triangle in indices.chunks_exact(3) {
        write!(
            writer,
            "{} {} {}{}",
            triangle[0], triangle[1], triangle[2], LINE_TERMINATOR
        )?;
    }
    writer.flush()?;
    debug!(
        "wrote {} triangles to {}",
        indices.len() / 3,
        path.display()
    );
    Ok(())
}
