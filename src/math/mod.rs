//! Mathematical utilities

pub mod rigid;

pub use rigid::RigidTransform;
