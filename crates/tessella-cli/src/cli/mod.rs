//! CLI command implementations.
//!
//! - `types` - list the built-in tiling type catalog
//! - `penrose` - render a substitution tiling as SVG
//! - `mesh` - build one surface mesh and report on it
//! - `scene` - build meshes for every surface in a YAML scene file

pub mod common;
pub mod mesh;
pub mod penrose;
pub mod scene;
pub mod types;

pub use mesh::cmd_mesh;
pub use penrose::cmd_penrose;
pub use scene::cmd_scene;
pub use types::cmd_types;
