mod args;
mod discover;

use args::Args;
use clap::Parser;
use discover::{discover, zoom_range, SourceTile};
use log::{info, LevelFilter};
use mbtiler::{archive_path, ArchiveOptions, TileArchiveWriter};
use std::{error::Error, process::ExitCode};

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .format_timestamp(None)
        .parse_default_env()
        .init();

    if let Err(e) = try_main(args) {
        eprintln!("{e}");

        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(args: Args) -> Result<(), Box<dyn Error>> {
    let mut tiles: Vec<SourceTile> = args.tile.iter().cloned().map(SourceTile::from).collect();

    if let Some(source_dir) = &args.source_dir {
        tiles.extend(
            discover(source_dir).map_err(|e| format!("Error walking directory: {e}"))?,
        );
    }

    let target_file = archive_path(args.output_dir.as_deref(), &args.name);

    if target_file.exists() && !args.append {
        return Err(format!("Target file exists: {}", target_file.display()).into());
    }

    let (min_zoom, max_zoom) = zoom_range(&tiles);

    let options = ArchiveOptions {
        directory: args.output_dir.clone(),
        format: args.format.into(),
        min_zoom,
        max_zoom,
    };

    let mut writer = TileArchiveWriter::open_with(&args.name, &args.description, &options)?;

    for tile in &tiles {
        let (z, x, y) = tile.address(args.scheme);

        if let Err(e) = writer.insert_tile(&tile.path, z, x, y) {
            writer.close();

            return Err(format!("Error inserting tile {}: {e}", tile.path.display()).into());
        }
    }

    info!("packed {} tiles into {}", tiles.len(), writer.path().display());

    writer.close();

    Ok(())
}
