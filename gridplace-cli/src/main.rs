use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use gridplace::io::{export, import};
use gridplace::place::GridPlacer;
use gridplace_cli::config::CliConfig;
use gridplace_cli::io;
use gridplace_cli::io::cli::Cli;
use gridplace_cli::io::layout_to_svg::layout_to_svg;
use gridplace_cli::io::output::PlacementOutput;
use log::{error, info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CliConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };

    info!("Successfully parsed CliConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let request = io::read_request(&args.input_file)?;
    let parts = import::import_parts(&request.parts);
    let snapshot = request.snapshot.as_ref().map(import::import_snapshot);
    info!(
        "[MAIN] request contains {} parts and {} existing components",
        parts.len(),
        snapshot.as_ref().map_or(0, |s| s.components.len())
    );

    let placer = GridPlacer::new(config.placer)?;
    let outcome = placer
        .place_all(&parts, snapshot.as_ref())
        .inspect_err(|e| error!("[MAIN] placement failed: {e}"))?;

    for diagnostic in &outcome.diagnostics {
        warn!("[MAIN] {diagnostic}");
    }

    {
        let output = PlacementOutput {
            result: export::export(&outcome),
            config: config.placer,
        };
        let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    if !args.no_svg {
        let svg_path = args.solution_folder.join(format!("sol_{input_file_stem}.svg"));
        let svg = layout_to_svg(
            snapshot.as_ref(),
            &parts,
            &outcome,
            &config.placer,
            config.svg_draw_options,
        );
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(())
}
