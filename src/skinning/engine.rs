//! The cluster-weighted skinning engine

use glam::Vec4;
use log::warn;

use crate::asset::soft::{FlexAsset, SoftAsset};
use crate::core::error::Error;
use crate::core::types::{Quat, Result, Vec3};
use crate::math::rigid::RigidTransform;
use crate::skinning::transforms::ClusterTransforms;

/// Deformed vertex data produced by one [`skin`] call.
///
/// Positions are in component-local space. Normals and tangents are left in
/// object/world orientation and are NOT taken through the component
/// transform; downstream consumers relying on component-local normals must
/// rotate them themselves. This asymmetry matches the original FleX render
/// path and is pinned by tests.
#[derive(Clone, Debug)]
pub struct SkinResult {
    /// Deformed positions, component-local space
    pub positions: Vec<Vec3>,
    /// Deformed normals, object-space orientation
    pub normals: Vec<Vec3>,
    /// Deformed tangents, object-space orientation
    pub tangents: Vec<Vec3>,
    /// Linear average of the raw quaternion components of the mean clusters.
    /// Not normalized and not a spherical average; only meaningful when the
    /// cluster rotations are close to each other.
    pub mean_rotation: Quat,
    /// Mean cluster translation, component-local space
    pub mean_translation: Vec3,
    /// Number of clusters folded into the mean transform.
    ///
    /// The mean covers cluster indices strictly below the highest index
    /// referenced by an active binding slot, so the highest-index cluster is
    /// itself excluded and trailing unreferenced clusters never contribute.
    /// When this is 0 the mean is identity/zero and carries no information.
    pub mean_cluster_count: usize,
}

impl SkinResult {
    /// True if the mean transform averaged at least one cluster
    pub fn has_mean(&self) -> bool {
        self.mean_cluster_count > 0
    }
}

/// Skin a soft asset against a cluster transform snapshot.
///
/// Reconstructs each vertex's deformed position, normal, and tangent by
/// blending the rigid transforms of the up-to-four clusters bound to it,
/// then converts positions into component-local space via `component`.
///
/// Fails with [`Error::Asset`] if `asset` is not a soft asset, and with
/// [`Error::Binding`] if any binding slot references a cluster outside
/// `transforms` or outside the asset's rest centers; no partial output is
/// produced on either path.
pub fn skin(
    asset: &FlexAsset,
    transforms: &ClusterTransforms,
    component: &RigidTransform,
) -> Result<SkinResult> {
    let Some(soft) = asset.as_soft() else {
        warn!("passed a {} asset, only soft assets can be skinned", asset.kind());
        return Err(Error::Asset(format!(
            "cannot skin a {} asset",
            asset.kind()
        )));
    };

    validate_bindings(soft, transforms)?;

    let mesh = soft.mesh();
    let centers = soft.centers();
    let rotations = transforms.rotations();
    let translations = transforms.translations();

    let num_vertices = mesh.len();
    let mut positions = Vec::with_capacity(num_vertices);
    let mut normals = Vec::with_capacity(num_vertices);
    let mut tangents = Vec::with_capacity(num_vertices);

    // Highest cluster index referenced by an active slot; bounds the mean
    let mut max_seen = 0usize;

    for vertex in 0..num_vertices {
        let mut soft_pos = Vec3::ZERO;
        let mut soft_normal = Vec3::ZERO;
        let mut soft_tangent = Vec3::ZERO;

        for slot in soft.bindings().slots(vertex) {
            if !slot.is_active() {
                continue;
            }
            let cluster = slot.cluster as usize;
            if cluster > max_seen {
                max_seen = cluster;
            }

            let rotation = rotations[cluster];
            let translation = translations[cluster];

            let local_pos = mesh.position(vertex) - centers[cluster];
            soft_pos += (rotation * local_pos + translation) * slot.weight;
            soft_normal += (rotation * mesh.normal(vertex)) * slot.weight;
            soft_tangent += (rotation * mesh.tangent(vertex)) * slot.weight;
        }

        positions.push(component.inverse_transform_point(soft_pos));
        normals.push(soft_normal);
        tangents.push(soft_tangent);
    }

    // Aggregate mean over clusters 0..max_seen, the max-index cluster excluded
    let mut rotation_sum = Vec4::ZERO;
    let mut translation_sum = Vec3::ZERO;
    for (rotation, translation) in rotations[..max_seen]
        .iter()
        .zip(&translations[..max_seen])
    {
        rotation_sum += Vec4::new(rotation.x, rotation.y, rotation.z, rotation.w);
        translation_sum += *translation;
    }

    let (mean_rotation, mean_translation) = if max_seen > 0 {
        let count = max_seen as f32;
        let averaged = rotation_sum / count;
        (
            Quat::from_xyzw(averaged.x, averaged.y, averaged.z, averaged.w),
            component.inverse_transform_point(translation_sum / count),
        )
    } else {
        (Quat::IDENTITY, Vec3::ZERO)
    };

    Ok(SkinResult {
        positions,
        normals,
        tangents,
        mean_rotation,
        mean_translation,
        mean_cluster_count: max_seen,
    })
}

/// Reject bindings that index outside the snapshot or the rest centers
fn validate_bindings(soft: &SoftAsset, transforms: &ClusterTransforms) -> Result<()> {
    let cluster_limit = transforms.len().min(soft.cluster_count());
    for vertex in 0..soft.bindings().vertex_count() {
        for slot in soft.bindings().slots(vertex) {
            if slot.is_active() && slot.cluster as usize >= cluster_limit {
                return Err(Error::Binding(format!(
                    "vertex {} references cluster {} but only {} transforms and {} rest centers are available",
                    vertex,
                    slot.cluster,
                    transforms.len(),
                    soft.cluster_count()
                )));
            }
        }
    }
    Ok(())
}
