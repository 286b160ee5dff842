//! Surface mesh building - the rebuild entry point.
//!
//! The rendering layer calls [`build_surface_mesh`] whenever a parameter
//! that affects topology changes (tiling type, curvature, scale, region).
//! Purely photometric changes don't need a rebuild; callers should also
//! memoize through [`crate::cache::GeometryCache`] and rate-limit when
//! parameters are animated, since a full rebuild per frame is not the
//! design point.

use glam::DAffine3;

use crate::descriptor::TilingSource;
use crate::lattice::TilingType;
use crate::mesh::{assemble_mesh, MeshBuffer};
use crate::outline::{build_outline, DEFAULT_SAMPLES_PER_EDGE};
use crate::params::morphed_params;
use crate::triangulate::triangulate;

/// Safety margin added around the queried region, in tiling units.
/// Keeps curved tile edges from leaving visible gaps at surface borders.
pub const REGION_PADDING: f64 = 2.0;

/// Everything needed to tile one target surface.
#[derive(Debug, Clone)]
pub struct SurfaceRequest {
    /// Continuous tiling-type value; the integer part selects the type
    /// (clamped to the catalog), the fraction morphs its parameters.
    pub type_value: f64,
    /// Edge curvature in [0, 1].
    pub curvature: f64,
    pub samples_per_edge: usize,
    /// World size of one tiling unit.
    pub tile_scale: f64,
    /// Region to cover, in tiling units: (xmin, ymin, xmax, ymax).
    pub region: (f64, f64, f64, f64),
    /// Places the tiled plane onto the target surface.
    pub transform: DAffine3,
    /// Emit per-vertex tile centroids for shader-side per-tile rotation.
    pub want_centroids: bool,
}

impl Default for SurfaceRequest {
    fn default() -> Self {
        Self {
            type_value: 0.0,
            curvature: 0.0,
            samples_per_edge: DEFAULT_SAMPLES_PER_EDGE,
            tile_scale: 1.0,
            region: (0.0, 0.0, 10.0, 10.0),
            transform: DAffine3::IDENTITY,
            want_centroids: false,
        }
    }
}

/// Build the mesh for one surface using the built-in type catalog.
pub fn build_surface_mesh(request: &SurfaceRequest) -> MeshBuffer {
    let (tiling_type, fraction) = TilingType::from_continuous(request.type_value);
    let mut source = tiling_type.source();
    build_mesh_from_source(source.as_mut(), tiling_type.index(), fraction, request)
}

/// Build the mesh for one surface from an injected source.
///
/// This is the seam an external isohedral tiling library plugs into; the
/// catalog path above goes through it too.
pub fn build_mesh_from_source(
    source: &mut dyn TilingSource,
    type_index: usize,
    fraction: f64,
    request: &SurfaceRequest,
) -> MeshBuffer {
    let param_count = source.descriptor().param_count;
    if param_count > 0 {
        source.set_params(&morphed_params(type_index, fraction, param_count));
    }

    let descriptor = source.descriptor();
    let outline = build_outline(
        &descriptor,
        request.curvature.clamp(0.0, 1.0),
        request.samples_per_edge.max(1),
    );
    let triangles = triangulate(&outline);

    let (xmin, ymin, xmax, ymax) = request.region;
    let placements = source.fill_region(
        xmin - REGION_PADDING,
        ymin - REGION_PADDING,
        xmax + REGION_PADDING,
        ymax + REGION_PADDING,
    );

    assemble_mesh(
        &outline,
        &triangles,
        &placements,
        descriptor.aspect_count,
        request.region,
        request.tile_scale,
        &request.transform,
        request.want_centroids,
    )
}
