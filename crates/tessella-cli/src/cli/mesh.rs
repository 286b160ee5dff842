//! `mesh` subcommand - build one surface mesh and report on it.

use std::process::ExitCode;

use serde_json::json;
use tessella::{build_surface_mesh, MeshIndices, SurfaceRequest, TilingType};

use super::common::{flag_f64, flag_region, has_flag};

pub fn cmd_mesh(args: &[String]) -> ExitCode {
    let Some(type_arg) = args.first() else {
        eprintln!("usage: tessella mesh <type> [-c CURVE] [-s SCALE] [-r X0,Y0,X1,Y1] [--centroids] [--json]");
        return ExitCode::FAILURE;
    };

    let type_value = match resolve_type_value(type_arg) {
        Some(v) => v,
        None => {
            eprintln!("unknown tiling type '{}' (try `tessella types`)", type_arg);
            return ExitCode::FAILURE;
        }
    };

    let request = SurfaceRequest {
        type_value,
        curvature: flag_f64(args, "-c", 0.0),
        tile_scale: flag_f64(args, "-s", 1.0),
        region: flag_region(args, "-r", (0.0, 0.0, 10.0, 10.0)),
        want_centroids: has_flag(args, "--centroids"),
        ..SurfaceRequest::default()
    };

    let mesh = build_surface_mesh(&request);

    if has_flag(args, "--json") {
        let indices: Vec<u32> = match &mesh.indices {
            MeshIndices::U16(v) => v.iter().map(|&i| i as u32).collect(),
            MeshIndices::U32(v) => v.clone(),
        };
        let dump = json!({
            "type_value": request.type_value,
            "curvature": request.curvature,
            "vertex_count": mesh.vertex_count(),
            "triangle_count": mesh.triangle_count(),
            "positions": mesh.positions,
            "tile_attrs": mesh.tile_attrs,
            "centroids": mesh.centroids,
            "indices": indices,
        });
        println!("{}", dump);
        return ExitCode::SUCCESS;
    }

    let (ty, fraction) = TilingType::from_continuous(request.type_value);
    println!("tiling     : {} (value {}, morph {:.3})", ty.name(), request.type_value, fraction);
    println!("curvature  : {}", request.curvature);
    println!("region     : {:?} at scale {}", request.region, request.tile_scale);
    println!("vertices   : {}", mesh.vertex_count());
    println!("triangles  : {}", mesh.triangle_count());
    println!(
        "indices    : {}",
        match mesh.indices {
            MeshIndices::U16(_) => "16-bit",
            MeshIndices::U32(_) => "32-bit",
        }
    );
    println!("centroids  : {}", if mesh.centroids.is_some() { "yes" } else { "no" });

    ExitCode::SUCCESS
}

/// A tiling argument is a catalog name or a raw continuous value.
fn resolve_type_value(arg: &str) -> Option<f64> {
    if let Some(ty) = TilingType::from_name(arg) {
        return Some(ty.index() as f64);
    }
    arg.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_names_and_numbers() {
        assert_eq!(resolve_type_value("square"), Some(0.0));
        assert_eq!(resolve_type_value("hexagon"), Some(2.0));
        assert_eq!(resolve_type_value("1.5"), Some(1.5));
        assert_eq!(resolve_type_value("bogus"), None);
    }
}
