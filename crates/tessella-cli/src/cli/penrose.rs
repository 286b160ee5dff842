//! `penrose` subcommand - render a substitution tiling as SVG.

use std::fs;
use std::process::ExitCode;

use tessella::penrose::{generate_penrose, tile_outline, PenroseTiling, TileKind};

use super::common::{flag_f64, flag_u32, flag_value};

/// Depths past this get slow fast (tile count grows ~2.6x per step).
const MAX_DEFLATIONS: u32 = 10;

pub fn cmd_penrose(args: &[String]) -> ExitCode {
    let deflations = flag_u32(args, "-d", 4).min(MAX_DEFLATIONS);
    let edge = flag_f64(args, "-e", 60.0).abs().max(1.0);

    let tiling = generate_penrose(deflations, edge);
    eprintln!(
        "generated {} tiles at deflation depth {} (edge {:.3})",
        tiling.tiles.len(),
        deflations,
        tiling.edge_length
    );

    let svg = tiling_to_svg(&tiling);
    match flag_value(args, "-o") {
        Some(path) => {
            if let Err(err) = fs::write(path, svg) {
                eprintln!("failed to write {}: {}", path, err);
                return ExitCode::FAILURE;
            }
            eprintln!("wrote {}", path);
        }
        None => print!("{}", svg),
    }

    ExitCode::SUCCESS
}

/// Render every tile as a filled polygon. Kites and darts get different
/// hues; the radial metric drives lightness so the gradient downstream
/// timing effects run on is visible in the preview.
fn tiling_to_svg(tiling: &PenroseTiling) -> String {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    let outlines: Vec<_> = tiling
        .tiles
        .iter()
        .map(|tile| tile_outline(tile, tiling.edge_length))
        .collect();

    for outline in &outlines {
        for p in outline {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
    }

    let pad = tiling.edge_length * 0.5;
    let mut svg = String::new();
    svg.push_str(&format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.2} {:.2} {:.2} {:.2}">
<g stroke="#222" stroke-width="0.5" stroke-linejoin="round">
"##,
        min_x - pad,
        min_y - pad,
        (max_x - min_x) + pad * 2.0,
        (max_y - min_y) + pad * 2.0,
    ));

    for (tile, outline) in tiling.tiles.iter().zip(outlines.iter()) {
        let hue = match tile.kind {
            TileKind::Kite => 212,
            TileKind::Dart => 36,
        };
        let lightness = 30.0 + tile.metric * 4.5;

        let points: String = outline
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");

        svg.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"hsl({}, 55%, {:.1}%)\"/>\n",
            points, hue, lightness
        ));
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}
