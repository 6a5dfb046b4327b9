//! Per-vertex cluster bindings
//!
//! Each vertex carries exactly [`SLOTS_PER_VERTEX`] slots pairing a cluster
//! index with a blend weight. The flat `4 * N` slot layout mirrors the
//! solver's indices/weights vertex buffers, with `-1` marking an unused slot.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;

/// Number of binding slots per vertex
pub const SLOTS_PER_VERTEX: usize = 4;

/// Sentinel cluster index for an empty binding slot
pub const EMPTY_CLUSTER: i32 = -1;

/// One (cluster index, weight) pair of a vertex binding
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct BindingSlot {
    /// Cluster index, or [`EMPTY_CLUSTER`] if the slot is unused
    pub cluster: i32,
    /// Blend weight; ignored when the slot is empty
    pub weight: f32,
}

impl BindingSlot {
    /// Create an active slot
    pub fn new(cluster: u32, weight: f32) -> Self {
        Self { cluster: cluster as i32, weight }
    }

    /// Create an empty slot
    pub fn empty() -> Self {
        Self { cluster: EMPTY_CLUSTER, weight: 0.0 }
    }

    /// True if the slot references a cluster
    pub fn is_active(&self) -> bool {
        self.cluster > EMPTY_CLUSTER
    }
}

impl Default for BindingSlot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Static per-mesh cluster binding table: [`SLOTS_PER_VERTEX`] slots per
/// vertex in a flat array, immutable after asset creation.
///
/// Active weights for a vertex are expected to sum to roughly 1.0, but this
/// is not validated; a bad upstream sampler produces bad skinning output,
/// not an error.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VertexBindings {
    slots: Vec<BindingSlot>,
}

impl VertexBindings {
    /// Create from a flat slot array
    ///
    /// The array length must be a multiple of [`SLOTS_PER_VERTEX`].
    pub fn from_slots(slots: Vec<BindingSlot>) -> Result<Self> {
        if slots.len() % SLOTS_PER_VERTEX != 0 {
            return Err(Error::Binding(format!(
                "binding slot count {} is not a multiple of {}",
                slots.len(),
                SLOTS_PER_VERTEX
            )));
        }
        Ok(Self { slots })
    }

    /// Create from the solver's raw per-vertex buffers
    ///
    /// `indices` and `weights` are the flat `4 * N` cluster index and weight
    /// buffers, index `-1` marking an unused slot.
    pub fn from_raw(indices: &[i16], weights: &[f32]) -> Result<Self> {
        if indices.len() != weights.len() {
            return Err(Error::Binding(format!(
                "binding buffer lengths disagree: {} indices, {} weights",
                indices.len(),
                weights.len()
            )));
        }
        let slots = indices
            .iter()
            .zip(weights)
            .map(|(&cluster, &weight)| BindingSlot { cluster: cluster as i32, weight })
            .collect();
        Self::from_slots(slots)
    }

    /// Number of vertices covered by the table
    pub fn vertex_count(&self) -> usize {
        self.slots.len() / SLOTS_PER_VERTEX
    }

    /// The four binding slots of a vertex
    pub fn slots(&self, vertex: usize) -> &[BindingSlot] {
        let start = vertex * SLOTS_PER_VERTEX;
        &self.slots[start..start + SLOTS_PER_VERTEX]
    }

    /// All slots as a flat array
    pub fn all_slots(&self) -> &[BindingSlot] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_sentinel() {
        assert!(!BindingSlot::empty().is_active());
        assert!(BindingSlot::new(0, 1.0).is_active());
    }

    #[test]
    fn test_from_slots_rejects_ragged() {
        let result = VertexBindings::from_slots(vec![BindingSlot::empty(); 5]);
        assert!(matches!(result, Err(Error::Binding(_))));
    }

    #[test]
    fn test_from_raw() {
        let indices: Vec<i16> = vec![0, 1, -1, -1];
        let weights = vec![0.75, 0.25, 0.0, 0.0];
        let bindings = VertexBindings::from_raw(&indices, &weights).unwrap();
        assert_eq!(bindings.vertex_count(), 1);

        let slots = bindings.slots(0);
        assert_eq!(slots[0], BindingSlot::new(0, 0.75));
        assert_eq!(slots[1], BindingSlot::new(1, 0.25));
        assert!(!slots[2].is_active());
    }

    #[test]
    fn test_from_raw_length_mismatch() {
        let result = VertexBindings::from_raw(&[0, 1], &[1.0]);
        assert!(matches!(result, Err(Error::Binding(_))));
    }
}
