//! `scene` subcommand - build meshes for every surface in a YAML scene.
//!
//! A scene file lists the surfaces of a room and how each one is tiled:
//!
//! ```yaml
//! name: demo room
//! surfaces:
//!   - name: back wall
//!     tiling: hexagon
//!     curvature: 0.4
//!     scale: 0.5
//!     region: [0, 0, 24, 16]
//!   - name: floor
//!     tiling: brick
//!     plane: floor
//!     region: [0, 0, 24, 24]
//!     offset: [0, -8, 0]
//! ```

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::fs;
use std::process::ExitCode;

use glam::{DAffine3, DVec3};
use serde::Deserialize;
use tessella::{build_surface_mesh, MeshIndices, SurfaceRequest, TilingType};

/// Error type for scene loading.
#[derive(Debug)]
pub enum SceneError {
    Io(String),
    Parse(String),
    UnknownTiling(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Io(msg) => write!(f, "scene read error: {}", msg),
            SceneError::Parse(msg) => write!(f, "scene parse error: {}", msg),
            SceneError::UnknownTiling(name) => write!(f, "unknown tiling '{}'", name),
        }
    }
}

impl std::error::Error for SceneError {}

/// A complete scene: a named list of tiled surfaces.
#[derive(Debug, Deserialize)]
pub struct Scene {
    pub name: String,
    #[serde(default)]
    pub surfaces: Vec<SurfaceSpec>,
}

/// One target surface and how to tile it.
#[derive(Debug, Deserialize)]
pub struct SurfaceSpec {
    pub name: String,
    /// Tiling type name or continuous type value.
    pub tiling: String,
    #[serde(default)]
    pub curvature: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Region in tiling units: [xmin, ymin, xmax, ymax].
    pub region: [f64; 4],
    #[serde(default)]
    pub plane: Plane,
    /// World-space translation applied after orienting the plane.
    #[serde(default)]
    pub offset: [f64; 3],
    #[serde(default)]
    pub centroids: bool,
}

fn default_scale() -> f64 {
    1.0
}

/// Which way the tiled plane faces.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    #[default]
    Wall,
    Floor,
    Ceiling,
}

impl Plane {
    fn orientation(&self) -> DAffine3 {
        match self {
            Plane::Wall => DAffine3::IDENTITY,
            Plane::Floor => DAffine3::from_rotation_x(-FRAC_PI_2),
            Plane::Ceiling => DAffine3::from_rotation_x(FRAC_PI_2),
        }
    }
}

pub fn cmd_scene(args: &[String]) -> ExitCode {
    let Some(path) = args.first() else {
        eprintln!("usage: tessella scene <scene.yaml>");
        return ExitCode::FAILURE;
    };

    let scene = match load_scene(path) {
        Ok(scene) => scene,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    println!("scene: {} ({} surfaces)", scene.name, scene.surfaces.len());

    let mut total_vertices = 0;
    let mut total_triangles = 0;

    for spec in &scene.surfaces {
        let type_value = match resolve_tiling(&spec.tiling) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("{}: {}", spec.name, err);
                return ExitCode::FAILURE;
            }
        };

        let request = SurfaceRequest {
            type_value,
            curvature: spec.curvature,
            tile_scale: spec.scale,
            region: (spec.region[0], spec.region[1], spec.region[2], spec.region[3]),
            transform: DAffine3::from_translation(DVec3::from_array(spec.offset))
                * spec.plane.orientation(),
            want_centroids: spec.centroids,
            ..SurfaceRequest::default()
        };

        let mesh = build_surface_mesh(&request);
        let (ty, _) = TilingType::from_continuous(type_value);
        println!(
            "  {:<16} {:<10} {:>8} vertices {:>8} triangles  {}",
            spec.name,
            ty.name(),
            mesh.vertex_count(),
            mesh.triangle_count(),
            match mesh.indices {
                MeshIndices::U16(_) => "16-bit",
                MeshIndices::U32(_) => "32-bit",
            }
        );

        total_vertices += mesh.vertex_count();
        total_triangles += mesh.triangle_count();
    }

    println!("total: {} vertices, {} triangles", total_vertices, total_triangles);
    ExitCode::SUCCESS
}

fn load_scene(path: &str) -> Result<Scene, SceneError> {
    let raw = fs::read_to_string(path).map_err(|e| SceneError::Io(e.to_string()))?;
    serde_yaml::from_str(&raw).map_err(|e| SceneError::Parse(e.to_string()))
}

fn resolve_tiling(raw: &str) -> Result<f64, SceneError> {
    if let Some(ty) = TilingType::from_name(raw) {
        return Ok(ty.index() as f64);
    }
    raw.parse::<f64>()
        .map_err(|_| SceneError::UnknownTiling(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_scene_file() {
        let yaml = r#"
name: test room
surfaces:
  - name: back wall
    tiling: hexagon
    curvature: 0.4
    region: [0, 0, 8, 6]
  - name: floor
    tiling: "1.5"
    plane: floor
    region: [0, 0, 8, 8]
    offset: [0, -3, 0]
"#;
        let scene: Scene = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scene.name, "test room");
        assert_eq!(scene.surfaces.len(), 2);
        assert_eq!(scene.surfaces[0].scale, 1.0, "scale defaults to 1");
        assert!(matches!(scene.surfaces[1].plane, Plane::Floor));
        assert_eq!(resolve_tiling(&scene.surfaces[1].tiling).unwrap(), 1.5);
    }

    #[test]
    fn unknown_tiling_is_an_error() {
        assert!(resolve_tiling("nonsense").is_err());
        assert!(resolve_tiling("brick").is_ok());
    }

    #[test]
    fn floor_orientation_lays_the_plane_flat() {
        let t = Plane::Floor.orientation();
        let p = t.transform_point3(DVec3::new(1.0, 1.0, 0.0));
        // y of the tiling plane maps onto world -z
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert!((p.z + 1.0).abs() < 1e-12);
    }
}
