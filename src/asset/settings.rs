//! Soft asset sampling settings

use serde::{Deserialize, Serialize};

/// Sampling and clustering parameters used when a soft asset is authored.
///
/// These drive the upstream voxelization/sampling step and are carried on
/// the asset so a rebuild reproduces the same particle and cluster layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoftSettings {
    /// Spacing between sampled particles, in object units
    pub particle_spacing: f32,
    /// Interior sampling density
    pub volume_sampling: f32,
    /// Surface sampling density
    pub surface_sampling: f32,
    /// Spacing between cluster centers
    pub cluster_spacing: f32,
    /// Radius a cluster gathers particles from
    pub cluster_radius: f32,
    /// Cluster shape-matching stiffness, 0.0-1.0
    pub cluster_stiffness: f32,
}

impl Default for SoftSettings {
    fn default() -> Self {
        Self {
            particle_spacing: 10.0,
            volume_sampling: 4.0,
            surface_sampling: 1.0,
            cluster_spacing: 20.0,
            cluster_radius: 30.0,
            cluster_stiffness: 0.5,
        }
    }
}
