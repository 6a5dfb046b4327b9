//! Plain-text export of simulation buffers
//!
//! Three line-oriented formats, all headerless with the platform line
//! terminator: vector files (`x y z` per line), point files
//! (`px py pz nx ny nz` per line, the `.xyz` dump of simulation particles),
//! and triangle files (`i0 i1 i2` per line). Values are written with six
//! fractional digits; readers for the vector and point formats are provided
//! so exported data round-trips.

pub mod vectors;
pub mod triangles;

pub use vectors::{read_point_file, read_vector_file, write_point_file, write_vector_file};
pub use triangles::write_triangle_file;

/// Line terminator used by all text exports
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
/// Line terminator used by all text exports
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";
