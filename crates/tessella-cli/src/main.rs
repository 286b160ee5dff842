//! tessella - tiling preview and mesh export
//!
//! Usage:
//!   tessella types                     List built-in tiling types
//!   tessella penrose [options]        Render a Penrose tiling as SVG
//!   tessella mesh <type> [options]    Build one surface mesh, print stats
//!   tessella scene <scene.yaml>       Build meshes for every surface in a scene

mod cli;

use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("types") => cli::cmd_types(),
        Some("penrose") => cli::cmd_penrose(&args[2..]),
        Some("mesh") => cli::cmd_mesh(&args[2..]),
        Some("scene") => cli::cmd_scene(&args[2..]),
        Some("help") | None => {
            print_usage();
            ExitCode::SUCCESS
        }
        Some(other) => {
            eprintln!("unknown command: {}", other);
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("tessella - tiling preview and mesh export");
    println!();
    println!("Usage:");
    println!("  tessella types                     List built-in tiling types");
    println!("  tessella penrose [-d N] [-e LEN] [-o FILE]");
    println!("                                     Render a Penrose tiling as SVG");
    println!("  tessella mesh <type> [-c CURVE] [-s SCALE] [-r X0,Y0,X1,Y1] [--centroids] [--json]");
    println!("                                     Build one surface mesh, print stats");
    println!("  tessella scene <scene.yaml>        Build meshes for every surface in a scene");
}
