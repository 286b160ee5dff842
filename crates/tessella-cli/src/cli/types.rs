//! `types` subcommand - list the built-in tiling type catalog.

use std::process::ExitCode;

use tessella::TilingType;

pub fn cmd_types() -> ExitCode {
    println!("Available tiling types:");
    println!();

    for ty in TilingType::all() {
        let descriptor = ty.source().descriptor();
        println!(
            "  {:<10} {:<36} params: {}  aspects: {}",
            ty.name(),
            ty.describe(),
            descriptor.param_count,
            descriptor.aspect_count,
        );
    }

    println!();
    println!(
        "Continuous type values morph: e.g. `tessella mesh 1.5` blends the"
    );
    println!("brick presets halfway between shape A and shape B.");
    ExitCode::SUCCESS
}
