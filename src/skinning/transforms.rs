//! Per-cluster transform snapshot

use crate::core::error::Error;
use crate::core::types::{Quat, Result, Vec3};

/// Snapshot of per-cluster rigid transforms for one simulation step.
///
/// The solver refreshes its transform buffers every step; callers capture a
/// snapshot between steps and hand it to [`crate::skinning::skin`]. Rotations
/// and translations are in the same space as the asset's rest positions.
#[derive(Clone, Debug, Default)]
pub struct ClusterTransforms {
    rotations: Vec<Quat>,
    translations: Vec<Vec3>,
}

impl ClusterTransforms {
    /// Create from typed rotation and translation arrays
    pub fn from_parts(rotations: Vec<Quat>, translations: Vec<Vec3>) -> Result<Self> {
        if rotations.len() != translations.len() {
            return Err(Error::Binding(format!(
                "transform buffer lengths disagree: {} rotations, {} translations",
                rotations.len(),
                translations.len()
            )));
        }
        Ok(Self { rotations, translations })
    }

    /// Create from the solver's flat float buffers
    ///
    /// `rotations` holds 4 floats per cluster in xyzw order, `translations`
    /// 3 floats per cluster. Both must describe the same cluster count.
    pub fn from_raw(rotations: &[f32], translations: &[f32]) -> Result<Self> {
        if rotations.len() % 4 != 0 || translations.len() % 3 != 0 {
            return Err(Error::Binding(format!(
                "raw transform buffers misaligned: {} rotation floats, {} translation floats",
                rotations.len(),
                translations.len()
            )));
        }
        let quats: Vec<Quat> = rotations
            .chunks_exact(4)
            .map(|q| Quat::from_xyzw(q[0], q[1], q[2], q[3]))
            .collect();
        let vecs: Vec<Vec3> = translations
            .chunks_exact(3)
            .map(|t| Vec3::new(t[0], t[1], t[2]))
            .collect();
        Self::from_parts(quats, vecs)
    }

    /// Number of clusters in the snapshot
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    /// True if the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    /// Rotation of a cluster, if in range
    pub fn rotation(&self, cluster: usize) -> Option<Quat> {
        self.rotations.get(cluster).copied()
    }

    /// Translation of a cluster, if in range
    pub fn translation(&self, cluster: usize) -> Option<Vec3> {
        self.translations.get(cluster).copied()
    }

    /// All rotations
    pub fn rotations(&self) -> &[Quat] {
        &self.rotations
    }

    /// All translations
    pub fn translations(&self) -> &[Vec3] {
        &self.translations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let snapshot = ClusterTransforms::from_parts(
            vec![Quat::IDENTITY, Quat::IDENTITY],
            vec![Vec3::ZERO, Vec3::X],
        )
        .unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.translation(1), Some(Vec3::X));
        assert_eq!(snapshot.translation(2), None);
    }

    #[test]
    fn test_from_parts_length_mismatch() {
        let result = ClusterTransforms::from_parts(vec![Quat::IDENTITY], vec![]);
        assert!(matches!(result, Err(Error::Binding(_))));
    }

    #[test]
    fn test_from_raw() {
        // Two clusters: identity rotation, then 180 degrees about Z
        let rotations = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0];
        let translations = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let snapshot = ClusterTransforms::from_raw(&rotations, &translations).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.rotation(0), Some(Quat::IDENTITY));
        assert_eq!(snapshot.translation(1), Some(Vec3::new(4.0, 5.0, 6.0)));
    }

    #[test]
    fn test_from_raw_misaligned() {
        assert!(ClusterTransforms::from_raw(&[0.0; 5], &[0.0; 3]).is_err());
        assert!(ClusterTransforms::from_raw(&[0.0; 4], &[0.0; 4]).is_err());
        // Aligned but describing different cluster counts
        assert!(ClusterTransforms::from_raw(&[0.0; 8], &[0.0; 3]).is_err());
    }
}
