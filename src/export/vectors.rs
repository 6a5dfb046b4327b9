//! Vector and point file writers/readers

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::core::error::Error;
use crate::core::types::{Result, Vec3};
use crate::export::LINE_TERMINATOR;

/// Write vectors as `x y z` lines, six fractional digits, no header
pub fn write_vector_file(path: &Path, vectors: &[Vec3]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for v in vectors {
        write!(writer, "{:.6} {:.6} {:.6}{}", v.x, v.y, v.z, LINE_TERMINATOR)?;
    }
    writer.flush()?;
    debug!("wrote {} vectors to {}", vectors.len(), path.display());
    Ok(())
}

/// Write simulation points as `px py pz nx ny nz` lines
///
/// Positions and normals must have the same length.
pub fn write_point_file(path: &Path, positions: &[Vec3], normals: &[Vec3]) -> Result<()> {
    if positions.len() != normals.len() {
        return Err(Error::Export(format!(
            "point buffers disagree: {} positions, {} normals",
            positions.len(),
            normals.len()
        )));
    }
    let mut writer = BufWriter::new(File::create(path)?);
    for (p, n) in positions.iter().zip(normals) {
        write!(
            writer,
            "{:.6} {:.6} {:.6} {:.6} {:.6} {:.6}{}",
            p.x, p.y, p.z, n.x, n.y, n.z, LINE_TERMINATOR
        )?;
    }
    writer.flush()?;
    debug!("wrote {} points to {}", positions.len(), path.display());
    Ok(())
}

/// Read a vector file written by [`write_vector_file`]
pub fn read_vector_file(path: &Path) -> Result<Vec<Vec3>> {
    let contents = std::fs::read_to_string(path)?;
    let mut vectors = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let fields = parse_floats(line, 3, index)?;
        vectors.push(Vec3::new(fields[0], fields[1], fields[2]));
    }
    Ok(vectors)
}

/// Read a point file written by [`write_point_file`]
///
/// Returns parallel position and normal arrays.
pub fn read_point_file(path: &Path) -> Result<(Vec<Vec3>, Vec<Vec3>)> {
    let contents = std::fs::read_to_string(path)?;
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let fields = parse_floats(line, 6, index)?;
        positions.push(Vec3::new(fields[0], fields[1], fields[2]));
        normals.push(Vec3::new(fields[3], fields[4], fields[5]));
    }
    Ok((positions, normals))
}

/// Parse exactly `count` whitespace-separated floats from one line
fn parse_floats(line: &str, count: usize, index: usize) -> Result<Vec<f32>> {
    let fields: Vec<f32> = line
        .split_whitespace()
        .map(|f| f.parse::<f32>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| Error::Export(format!("line {}: {}", index + 1, e)))?;
    if fields.len() != count {
        return Err(Error::Export(format!(
            "line {}: expected {} fields, found {}",
            index + 1,
            count,
            fields.len()
        )));
    }
    Ok(fields)
}
