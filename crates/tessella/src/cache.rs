//! Caller-owned memoization for generated geometry.
//!
//! Generation is pure, so results are cached by their full parameter tuple
//! and nothing else. The cache is an explicit object the caller owns and
//! clears - there is no module-level mutable state anywhere in the crate.
//! Float keys go through `to_bits`, so "same parameters" means bitwise-same
//! parameters.

use std::collections::HashMap;

use crate::mesh::MeshBuffer;
use crate::penrose::{generate_penrose, PenroseTiling};
use crate::surface::{build_surface_mesh, SurfaceRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PenroseKey {
    deflations: u32,
    edge_bits: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MeshKey {
    type_bits: u64,
    curvature_bits: u64,
    scale_bits: u64,
    region_bits: [u64; 4],
    samples: usize,
    transform_bits: [u64; 12],
    centroids: bool,
}

impl MeshKey {
    fn from_request(request: &SurfaceRequest) -> Self {
        let (x0, y0, x1, y1) = request.region;
        let cols = request.transform.to_cols_array();
        let mut transform_bits = [0u64; 12];
        for (slot, value) in transform_bits.iter_mut().zip(cols.iter()) {
            *slot = value.to_bits();
        }
        Self {
            type_bits: request.type_value.to_bits(),
            curvature_bits: request.curvature.to_bits(),
            scale_bits: request.tile_scale.to_bits(),
            region_bits: [x0.to_bits(), y0.to_bits(), x1.to_bits(), y1.to_bits()],
            samples: request.samples_per_edge,
            transform_bits,
            centroids: request.want_centroids,
        }
    }
}

/// Memoizes substitution tilings and surface meshes.
#[derive(Debug, Default)]
pub struct GeometryCache {
    penrose: HashMap<PenroseKey, PenroseTiling>,
    meshes: HashMap<MeshKey, MeshBuffer>,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or generate the Penrose tiling for a deflation depth and edge
    /// length.
    pub fn penrose(&mut self, deflations: u32, edge_length: f64) -> &PenroseTiling {
        let key = PenroseKey { deflations, edge_bits: edge_length.to_bits() };
        self.penrose
            .entry(key)
            .or_insert_with(|| generate_penrose(deflations, edge_length))
    }

    /// Get or build the mesh for a surface request.
    pub fn surface_mesh(&mut self, request: &SurfaceRequest) -> &MeshBuffer {
        let key = MeshKey::from_request(request);
        self.meshes
            .entry(key)
            .or_insert_with(|| build_surface_mesh(request))
    }

    /// Number of cached entries (tilings + meshes).
    pub fn len(&self) -> usize {
        self.penrose.len() + self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop everything. Call when a parameter change invalidates topology
    /// wholesale (e.g. the scene is rebuilt).
    pub fn clear(&mut self) {
        self.penrose.clear();
        self.meshes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penrose_entries_are_reused() {
        let mut cache = GeometryCache::new();
        let count_first = cache.penrose(3, 100.0).tiles.len();
        let count_again = cache.penrose(3, 100.0).tiles.len();
        assert_eq!(count_first, count_again);
        assert_eq!(cache.len(), 1, "same key must not grow the cache");

        cache.penrose(4, 100.0);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn distinct_edge_lengths_are_distinct_keys() {
        let mut cache = GeometryCache::new();
        cache.penrose(2, 100.0);
        cache.penrose(2, 50.0);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn mesh_entries_key_on_the_full_request() {
        let mut cache = GeometryCache::new();
        let request = SurfaceRequest::default();
        cache.surface_mesh(&request);
        cache.surface_mesh(&request);
        assert_eq!(cache.len(), 1);

        let curved = SurfaceRequest { curvature: 0.5, ..request.clone() };
        cache.surface_mesh(&curved);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn clear_empties_the_cache() {
        let mut cache = GeometryCache::new();
        cache.penrose(1, 60.0);
        cache.surface_mesh(&SurfaceRequest::default());
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }
}
