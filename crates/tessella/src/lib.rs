//! # tessella
//!
//! Tiling geometry core for procedurally covered rendering surfaces.
//!
//! Two generators live here:
//!
//! - [`penrose`] builds aperiodic kite/dart tilings by recursive deflation,
//!   with tolerance-based deduplication and a per-tile radial metric.
//! - The prototile pipeline ([`descriptor`] → [`outline`] → [`triangulate`]
//!   → [`mesh`]) turns an abstract tiling description into instanced,
//!   renderable vertex/index buffers for a target surface.
//!
//! Everything is a pure, synchronous function of its inputs; callers own
//! the buffers they get back and memoize through [`cache::GeometryCache`].

pub mod cache;
pub mod descriptor;
pub mod geometry;
pub mod lattice;
pub mod mesh;
pub mod outline;
pub mod params;
pub mod penrose;
pub mod rng;
pub mod surface;
pub mod triangulate;

// Re-export common types at crate root for convenience.
pub use cache::GeometryCache;
pub use descriptor::{EdgeKind, Placement, TilingDescriptor, TilingSource};
pub use geometry::{normalize_deg, Affine2, Point};
pub use lattice::TilingType;
pub use mesh::{assemble_mesh, MeshBuffer, MeshIndices};
pub use outline::{build_outline, DEFAULT_SAMPLES_PER_EDGE};
pub use params::morphed_params;
pub use penrose::{generate_penrose, tile_outline, PenroseTiling, Tile, TileKind, PHI};
pub use rng::Rng;
pub use surface::{build_mesh_from_source, build_surface_mesh, SurfaceRequest, REGION_PADDING};
pub use triangulate::triangulate;
