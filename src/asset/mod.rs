//! Soft asset data model: rest-pose mesh buffers, cluster bindings, and
//! asset-kind dispatch.
//!
//! Everything here is authored once (sampling/voxelization happens upstream)
//! and immutable afterwards; only the per-step cluster transforms change at
//! runtime, and those live in [`crate::skinning`].

pub mod mesh;
pub mod binding;
pub mod settings;
pub mod soft;
pub mod data;

pub use mesh::RestMesh;
pub use binding::{BindingSlot, VertexBindings, SLOTS_PER_VERTEX, EMPTY_CLUSTER};
pub use settings::SoftSettings;
pub use soft::{FlexAsset, SoftAsset, ClothAsset, RigidAsset};
pub use data::{SoftAssetData, SOFT_ASSET_VERSION};
