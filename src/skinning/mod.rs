//! Cluster-weighted soft-body skinning
//!
//! The skinning engine blends up to four rigid cluster transforms per vertex
//! to reconstruct the deformed mesh from a simulation snapshot. It is a pure
//! function over its inputs: the snapshot is caller-owned and never mutated,
//! so a skin call cannot race a solver step by construction.

pub mod transforms;
pub mod engine;

pub use transforms::ClusterTransforms;
pub use engine::{skin, SkinResult};
