//! Flexskin - cluster-weighted soft-body skinning for FleX-style soft assets

pub mod core;
pub mod math;
pub mod asset;
pub mod skinning;
pub mod export;
