//! Rest-pose vertex buffers

use crate::core::error::Error;
use crate::core::types::{Result, Vec3};

/// Rest-pose vertex data in object space: parallel position, normal, and
/// tangent buffers of equal length.
#[derive(Clone, Debug, Default)]
pub struct RestMesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    tangents: Vec<Vec3>,
}

impl RestMesh {
    /// Create a rest mesh from parallel buffers
    ///
    /// Fails if the buffers disagree on vertex count.
    pub fn new(positions: Vec<Vec3>, normals: Vec<Vec3>, tangents: Vec<Vec3>) -> Result<Self> {
        if normals.len() != positions.len() || tangents.len() != positions.len() {
            return Err(Error::Binding(format!(
                "rest mesh buffer lengths disagree: {} positions, {} normals, {} tangents",
                positions.len(),
                normals.len(),
                tangents.len()
            )));
        }
        Ok(Self { positions, normals, tangents })
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if the mesh has no vertices
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Rest position of a vertex
    pub fn position(&self, vertex: usize) -> Vec3 {
        self.positions[vertex]
    }

    /// Rest normal of a vertex
    pub fn normal(&self, vertex: usize) -> Vec3 {
        self.normals[vertex]
    }

    /// Rest tangent of a vertex
    pub fn tangent(&self, vertex: usize) -> Vec3 {
        self.tangents[vertex]
    }

    /// All rest positions
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// All rest normals
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// All rest tangents
    pub fn tangents(&self) -> &[Vec3] {
        &self.tangents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_create() {
        let mesh = RestMesh::new(
            vec![Vec3::ZERO, Vec3::X],
            vec![Vec3::Z, Vec3::Z],
            vec![Vec3::X, Vec3::Y],
        )
        .unwrap();
        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.position(1), Vec3::X);
        assert_eq!(mesh.normal(0), Vec3::Z);
    }

    #[test]
    fn test_mesh_length_mismatch() {
        let result = RestMesh::new(vec![Vec3::ZERO, Vec3::X], vec![Vec3::Z], vec![Vec3::X]);
        assert!(matches!(result, Err(Error::Binding(_))));
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = RestMesh::default();
        assert!(mesh.is_empty());
        assert_eq!(mesh.len(), 0);
    }
}
