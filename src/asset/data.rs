//! Soft asset JSON persistence

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::asset::binding::{BindingSlot, VertexBindings};
use crate::asset::mesh::RestMesh;
use crate::asset::settings::SoftSettings;
use crate::asset::soft::SoftAsset;
use crate::core::error::Error;
use crate::core::types::{Result, Vec3};

/// Current version of the soft asset file format
pub const SOFT_ASSET_VERSION: u32 = 1;

/// Serializable form of a [`SoftAsset`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftAssetData {
    /// Format version for compatibility
    pub version: u32,
    /// Authoring-time sampling settings
    pub settings: SoftSettings,
    /// Cluster rest centers
    pub centers: Vec<[f32; 3]>,
    /// Rest positions
    pub positions: Vec<[f32; 3]>,
    /// Rest normals
    pub normals: Vec<[f32; 3]>,
    /// Rest tangents
    pub tangents: Vec<[f32; 3]>,
    /// Flat per-vertex binding slots, 4 per vertex
    pub bindings: Vec<BindingSlot>,
}

impl SoftAssetData {
    /// Capture an asset for persistence
    pub fn from_asset(asset: &SoftAsset) -> Self {
        let to_arrays = |vs: &[Vec3]| vs.iter().map(|v| v.to_array()).collect();
        Self {
            version: SOFT_ASSET_VERSION,
            settings: *asset.settings(),
            centers: to_arrays(asset.centers()),
            positions: to_arrays(asset.mesh().positions()),
            normals: to_arrays(asset.mesh().normals()),
            tangents: to_arrays(asset.mesh().tangents()),
            bindings: asset.bindings().all_slots().to_vec(),
        }
    }

    /// Rebuild the asset, re-checking all construction invariants
    pub fn into_asset(self) -> Result<SoftAsset> {
        let from_arrays = |vs: Vec<[f32; 3]>| vs.into_iter().map(Vec3::from_array).collect();
        let mesh = RestMesh::new(
            from_arrays(self.positions),
            from_arrays(self.normals),
            from_arrays(self.tangents),
        )?;
        let bindings = VertexBindings::from_slots(self.bindings)?;
        SoftAsset::new(mesh, from_arrays(self.centers), bindings, self.settings)
    }

    /// Save to a JSON file (sync)
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Export(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from a JSON file (sync)
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let data: Self = serde_json::from_str(&json)
            .map_err(|e| Error::Export(e.to_string()))?;
        if data.version != SOFT_ASSET_VERSION {
            return Err(Error::Export(format!(
                "unsupported soft asset version {}",
                data.version
            )));
        }
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_asset() -> SoftAsset {
        let mesh = RestMesh::new(
            vec![Vec3::ZERO, Vec3::X],
            vec![Vec3::Z, Vec3::Z],
            vec![Vec3::X, Vec3::Y],
        )
        .unwrap();
        let mut slots = vec![BindingSlot::empty(); 8];
        slots[0] = BindingSlot::new(0, 1.0);
        slots[4] = BindingSlot::new(1, 1.0);
        let bindings = VertexBindings::from_slots(slots).unwrap();
        SoftAsset::new(
            mesh,
            vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)],
            bindings,
            SoftSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_asset_persistence_round_trip() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("asset.json");

        let asset = sample_asset();
        SoftAssetData::from_asset(&asset).save_sync(&path).expect("save failed");

        let loaded = SoftAssetData::load_sync(&path)
            .expect("load failed")
            .into_asset()
            .expect("rebuild failed");
        assert_eq!(loaded.cluster_count(), asset.cluster_count());
        assert_eq!(loaded.mesh().len(), asset.mesh().len());
        assert_eq!(loaded.bindings().slots(0)[0], BindingSlot::new(0, 1.0));
    }

    #[test]
    fn test_version_rejected() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("asset.json");

        let mut data = SoftAssetData::from_asset(&sample_asset());
        data.version = 99;
        data.save_sync(&path).expect("save failed");

        assert!(matches!(SoftAssetData::load_sync(&path), Err(Error::Export(_))));
    }
}
