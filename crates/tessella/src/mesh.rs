//! Mesh assembly: prototile outline × placements → renderable buffers.
//!
//! Instances one triangulated prototile across every placement, producing
//! flat position/attribute/index arrays ready for a GPU vertex buffer. Tile
//! identity (aspect fraction, lightness) is baked per vertex so the shading
//! stage can color tiles without any per-tile draw calls.

use glam::{DAffine3, DVec3};

use crate::descriptor::Placement;
use crate::geometry::Point;

/// Base lightness for aspect-derived shading.
pub const LIGHTNESS_BASE: f64 = 0.45;

/// Lightness increment per aspect class (aspect mod 3).
pub const LIGHTNESS_STEP: f64 = 0.15;

/// Triangle index array; width chosen by total vertex count.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshIndices {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl MeshIndices {
    pub fn len(&self) -> usize {
        match self {
            MeshIndices::U16(v) => v.len(),
            MeshIndices::U32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Flat vertex/index buffers for one tiled surface.
#[derive(Debug, Clone)]
pub struct MeshBuffer {
    /// World-space positions, 3 floats per vertex.
    pub positions: Vec<f32>,
    /// Per-tile identity, 2 floats per vertex: aspect fraction, lightness.
    pub tile_attrs: Vec<f32>,
    /// Optional per-vertex tile centroid (3 floats), broadcast across each
    /// tile for shader-side per-tile rotation.
    pub centroids: Option<Vec<f32>>,
    pub indices: MeshIndices,
}

impl MeshBuffer {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Instance one prototile across every placement.
///
/// Per placement: apply the 2D placement transform to each outline point,
/// scale by `tile_scale`, lift to z = 0 and run through the 3D `surface`
/// transform. Triangle indices are the prototile's, offset by the
/// placement's base vertex. The result is deterministic in its inputs -
/// rerunning with the same placements produces identical buffers.
///
/// An empty placement list never produces an empty mesh: the caller gets a
/// flat quad covering `region` instead, so there is always something to
/// render.
pub fn assemble_mesh(
    outline: &[Point],
    triangles: &[u32],
    placements: &[Placement],
    aspect_count: usize,
    region: (f64, f64, f64, f64),
    tile_scale: f64,
    surface: &DAffine3,
    want_centroids: bool,
) -> MeshBuffer {
    if placements.is_empty() || outline.len() < 3 || triangles.is_empty() {
        log::warn!(
            "degenerate tiling ({} placements, {} outline points); emitting fallback quad",
            placements.len(),
            outline.len()
        );
        return fallback_quad(region, tile_scale, surface, want_centroids);
    }

    let verts_per_tile = outline.len();
    let total_vertices = placements.len() * verts_per_tile;

    let mut positions = Vec::with_capacity(total_vertices * 3);
    let mut tile_attrs = Vec::with_capacity(total_vertices * 2);
    let mut centroids = want_centroids.then(|| Vec::with_capacity(total_vertices * 3));
    let mut indices: Vec<u32> = Vec::with_capacity(placements.len() * triangles.len());

    for (tile_index, placement) in placements.iter().enumerate() {
        let base = (tile_index * verts_per_tile) as u32;
        let mut sum = DVec3::ZERO;

        for p in outline {
            let placed = placement.transform.apply(*p);
            let world = surface.transform_point3(DVec3::new(
                placed.x * tile_scale,
                placed.y * tile_scale,
                0.0,
            ));
            sum += world;
            positions.extend_from_slice(&[world.x as f32, world.y as f32, world.z as f32]);
        }

        let (fraction, lightness) = aspect_shading(placement.aspect, aspect_count);
        for _ in 0..verts_per_tile {
            tile_attrs.extend_from_slice(&[fraction, lightness]);
        }

        if let Some(buf) = centroids.as_mut() {
            let centroid = sum / verts_per_tile as f64;
            for _ in 0..verts_per_tile {
                buf.extend_from_slice(&[
                    centroid.x as f32,
                    centroid.y as f32,
                    centroid.z as f32,
                ]);
            }
        }

        for &i in triangles {
            indices.push(base + i);
        }
    }

    MeshBuffer {
        positions,
        tile_attrs,
        centroids,
        indices: pack_indices(indices, total_vertices),
    }
}

/// Deterministic per-aspect shading attributes.
fn aspect_shading(aspect: usize, aspect_count: usize) -> (f32, f32) {
    let fraction = aspect as f64 / aspect_count.max(1) as f64;
    let lightness = LIGHTNESS_BASE + (aspect % 3) as f64 * LIGHTNESS_STEP;
    (fraction as f32, lightness as f32)
}

/// 16-bit indices when every vertex is addressable, 32-bit otherwise.
fn pack_indices(indices: Vec<u32>, total_vertices: usize) -> MeshIndices {
    if total_vertices <= u16::MAX as usize + 1 {
        MeshIndices::U16(indices.into_iter().map(|i| i as u16).collect())
    } else {
        MeshIndices::U32(indices)
    }
}

/// Flat quad covering the scaled region - the degenerate-tiling fallback.
fn fallback_quad(
    region: (f64, f64, f64, f64),
    tile_scale: f64,
    surface: &DAffine3,
    want_centroids: bool,
) -> MeshBuffer {
    let (xmin, ymin, xmax, ymax) = region;
    let corners = [
        (xmin, ymin),
        (xmax, ymin),
        (xmax, ymax),
        (xmin, ymax),
    ];

    let mut positions = Vec::with_capacity(12);
    let mut sum = DVec3::ZERO;
    for (x, y) in corners {
        let world = surface.transform_point3(DVec3::new(x * tile_scale, y * tile_scale, 0.0));
        sum += world;
        positions.extend_from_slice(&[world.x as f32, world.y as f32, world.z as f32]);
    }

    let mut tile_attrs = Vec::with_capacity(8);
    for _ in 0..4 {
        tile_attrs.extend_from_slice(&[0.0, LIGHTNESS_BASE as f32]);
    }

    let centroids = want_centroids.then(|| {
        let c = sum / 4.0;
        let mut buf = Vec::with_capacity(12);
        for _ in 0..4 {
            buf.extend_from_slice(&[c.x as f32, c.y as f32, c.z as f32]);
        }
        buf
    });

    MeshBuffer {
        positions,
        tile_attrs,
        centroids,
        indices: MeshIndices::U16(vec![0, 1, 2, 0, 2, 3]),
    }
}
