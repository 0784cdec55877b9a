use crate::discover::MAX_ZOOM;
use clap::{Parser, ValueEnum};
use mbtiler::TileFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Archive name, written to <NAME>.mbtiles
    pub name: String,

    /// Input directory laid out as z/x/y.ext
    pub source_dir: Option<PathBuf>,

    /// Description
    #[arg(long, short, default_value = "")]
    pub description: String,

    /// Directory to create the archive in
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Tile format
    #[arg(long, short, value_enum, default_value_t = Format::Png)]
    pub format: Format,

    /// Row numbering of the input tiles
    #[arg(long, short, value_enum, default_value_t = Scheme::Xyz)]
    pub scheme: Scheme,

    /// Single tile as PATH:Z/X/Y, may be repeated
    #[arg(long, short, value_parser = parse_tile)]
    pub tile: Vec<TileArg>,

    /// Add to an existing archive
    #[arg(long, short, default_value_t = false)]
    pub append: bool,

    /// Verbose
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Png,
    Jpeg,
}

impl From<Format> for TileFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Png => TileFormat::Png,
            Format::Jpeg => TileFormat::Jpeg,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Scheme {
    Xyz,
    Tms,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileArg {
    pub path: PathBuf,
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

fn parse_tile(s: &str) -> Result<TileArg, String> {
    let (path, address) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected PATH:Z/X/Y, got {s}"))?;

    let mut parts = address.splitn(3, '/');

    let (Some(z), Some(x), Some(y)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected Z/X/Y, got {address}"));
    };

    if path.is_empty() {
        return Err("empty tile path".into());
    }

    let z: u8 = z.parse().map_err(|e| format!("invalid zoom {z}: {e}"))?;

    if z > MAX_ZOOM {
        return Err(format!("zoom {z} exceeds {MAX_ZOOM}"));
    }

    Ok(TileArg {
        path: path.into(),
        z,
        x: x.parse().map_err(|e| format!("invalid column {x}: {e}"))?,
        y: y.parse().map_err(|e| format!("invalid row {y}: {e}"))?,
    })
}
