//! Soft asset and asset-kind dispatch

use crate::asset::binding::VertexBindings;
use crate::asset::mesh::RestMesh;
use crate::asset::settings::SoftSettings;
use crate::core::error::Error;
use crate::core::types::{Result, Vec3};

/// A mesh augmented with cluster-binding data for soft-body simulation.
///
/// Invariants checked at construction: at least one cluster, and the binding
/// table covers exactly the mesh's vertex count. Cluster indices in the
/// bindings are validated against the transform snapshot at skin time, not
/// here, since the snapshot length is not known yet.
#[derive(Clone, Debug)]
pub struct SoftAsset {
    mesh: RestMesh,
    centers: Vec<Vec3>,
    bindings: VertexBindings,
    settings: SoftSettings,
}

impl SoftAsset {
    /// Create a soft asset from its authored parts
    pub fn new(
        mesh: RestMesh,
        centers: Vec<Vec3>,
        bindings: VertexBindings,
        settings: SoftSettings,
    ) -> Result<Self> {
        if centers.is_empty() {
            return Err(Error::Asset("soft asset has no clusters".to_string()));
        }
        if bindings.vertex_count() != mesh.len() {
            return Err(Error::Binding(format!(
                "binding table covers {} vertices but the mesh has {}",
                bindings.vertex_count(),
                mesh.len()
            )));
        }
        Ok(Self { mesh, centers, bindings, settings })
    }

    /// Rest-pose vertex buffers
    pub fn mesh(&self) -> &RestMesh {
        &self.mesh
    }

    /// Cluster rest centers, object space
    pub fn centers(&self) -> &[Vec3] {
        &self.centers
    }

    /// Number of clusters
    pub fn cluster_count(&self) -> usize {
        self.centers.len()
    }

    /// Per-vertex cluster bindings
    pub fn bindings(&self) -> &VertexBindings {
        &self.bindings
    }

    /// Authoring-time sampling settings
    pub fn settings(&self) -> &SoftSettings {
        &self.settings
    }
}

/// A cloth asset; carried only for kind dispatch, cloth is not skinned here
#[derive(Clone, Debug)]
pub struct ClothAsset {
    pub mesh: RestMesh,
    pub stretch_stiffness: f32,
    pub bend_stiffness: f32,
}

/// A rigid asset; carried only for kind dispatch
#[derive(Clone, Debug)]
pub struct RigidAsset {
    pub mesh: RestMesh,
    pub stiffness: f32,
}

/// Tagged asset kind
///
/// Replaces runtime downcasting with an explicit variant: cluster skinning is
/// defined only for [`FlexAsset::Soft`].
#[derive(Clone, Debug)]
pub enum FlexAsset {
    Soft(SoftAsset),
    Cloth(ClothAsset),
    Rigid(RigidAsset),
}

impl FlexAsset {
    /// Human-readable kind name for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            FlexAsset::Soft(_) => "soft",
            FlexAsset::Cloth(_) => "cloth",
            FlexAsset::Rigid(_) => "rigid",
        }
    }

    /// The soft asset, if this is one
    pub fn as_soft(&self) -> Option<&SoftAsset> {
        match self {
            FlexAsset::Soft(soft) => Some(soft),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::binding::BindingSlot;

    fn one_vertex_mesh() -> RestMesh {
        RestMesh::new(vec![Vec3::ZERO], vec![Vec3::Z], vec![Vec3::X]).unwrap()
    }

    #[test]
    fn test_soft_asset_create() {
        let bindings =
            VertexBindings::from_slots(vec![BindingSlot::new(0, 1.0); 4]).unwrap();
        let asset = SoftAsset::new(
            one_vertex_mesh(),
            vec![Vec3::ZERO],
            bindings,
            SoftSettings::default(),
        )
        .unwrap();
        assert_eq!(asset.cluster_count(), 1);
        assert_eq!(asset.mesh().len(), 1);
    }

    #[test]
    fn test_soft_asset_requires_clusters() {
        let bindings = VertexBindings::from_slots(vec![BindingSlot::empty(); 4]).unwrap();
        let result = SoftAsset::new(one_vertex_mesh(), vec![], bindings, SoftSettings::default());
        assert!(matches!(result, Err(Error::Asset(_))));
    }

    #[test]
    fn test_soft_asset_binding_count_mismatch() {
        let bindings = VertexBindings::from_slots(vec![BindingSlot::empty(); 8]).unwrap();
        let result = SoftAsset::new(
            one_vertex_mesh(),
            vec![Vec3::ZERO],
            bindings,
            SoftSettings::default(),
        );
        assert!(matches!(result, Err(Error::Binding(_))));
    }

    #[test]
    fn test_kind_dispatch() {
        let cloth = FlexAsset::Cloth(ClothAsset {
            mesh: one_vertex_mesh(),
            stretch_stiffness: 1.0,
            bend_stiffness: 1.0,
        });
        assert_eq!(cloth.kind(), "cloth");
        assert!(cloth.as_soft().is_none());
    }
}
