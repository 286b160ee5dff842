//! Integration tests for tessella CLI commands.
//!
//! These run the actual binary and verify end-to-end behavior.

use std::path::PathBuf;
use std::process::Command;

/// Get the path to the tessella binary from the workspace root.
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // up from tessella-cli to crates
    path.pop(); // up from crates to the workspace root

    let release = path.join("target/release/tessella");
    if release.exists() {
        return release;
    }
    path.join("target/debug/tessella")
}

#[test]
fn types_command_lists_the_catalog() {
    let output = Command::new(binary_path())
        .arg("types")
        .output()
        .expect("failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("square"), "should list 'square'");
    assert!(stdout.contains("brick"), "should list 'brick'");
    assert!(stdout.contains("hexagon"), "should list 'hexagon'");
    assert!(stdout.contains("pentagon"), "should list 'pentagon'");
}

#[test]
fn penrose_command_produces_svg() {
    let output = Command::new(binary_path())
        .args(["penrose", "-d", "2", "-e", "50"])
        .output()
        .expect("failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("<?xml"), "should have XML declaration");
    assert!(stdout.contains("<svg"), "should have SVG element");
    assert!(stdout.contains("<polygon"), "should have tile polygons");
    assert!(stdout.contains("</svg>"), "should close SVG element");
}

#[test]
fn mesh_command_reports_stats() {
    let output = Command::new(binary_path())
        .args(["mesh", "square", "-c", "0.5"])
        .output()
        .expect("failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("vertices"), "should report vertex count");
    assert!(stdout.contains("triangles"), "should report triangle count");
}

#[test]
fn mesh_command_emits_json() {
    let output = Command::new(binary_path())
        .args(["mesh", "hexagon", "--json"])
        .output()
        .expect("failed to execute command");

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert!(parsed["vertex_count"].as_u64().unwrap() > 0);
    assert!(parsed["positions"].as_array().unwrap().len() > 0);
}

#[test]
fn mesh_command_rejects_unknown_type() {
    let output = Command::new(binary_path())
        .args(["mesh", "nonsense"])
        .output()
        .expect("failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn scene_command_builds_every_surface() {
    let scene = r#"
name: integration room
surfaces:
  - name: back wall
    tiling: square
    curvature: 0.3
    region: [0, 0, 6, 4]
  - name: floor
    tiling: brick
    plane: floor
    region: [0, 0, 6, 6]
"#;
    let path = std::env::temp_dir().join("tessella_integration_scene.yaml");
    std::fs::write(&path, scene).expect("failed to write scene file");

    let output = Command::new(binary_path())
        .arg("scene")
        .arg(&path)
        .output()
        .expect("failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("integration room"));
    assert!(stdout.contains("back wall"));
    assert!(stdout.contains("floor"));
    assert!(stdout.contains("total:"));
}
