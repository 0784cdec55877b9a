use crate::args::{Scheme, TileArg};
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Deepest zoom whose rows still fit a `u32`.
pub const MAX_ZOOM: u8 = 32;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceTile {
    pub path: PathBuf,
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl SourceTile {
    /// Address as stored in the `tiles` table.
    pub fn address(&self, scheme: Scheme) -> (i64, i64, i64) {
        let y = match scheme {
            Scheme::Tms => i64::from(self.y),
            Scheme::Xyz => (1i64 << self.z) - 1 - i64::from(self.y),
        };

        (i64::from(self.z), i64::from(self.x), y)
    }
}

impl From<TileArg> for SourceTile {
    fn from(tile: TileArg) -> Self {
        SourceTile {
            path: tile.path,
            z: tile.z,
            x: tile.x,
            y: tile.y,
        }
    }
}

pub fn discover(source_dir: &Path) -> Result<Vec<SourceTile>, walkdir::Error> {
    let mut tiles = Vec::new();

    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry?;

        if entry.file_type().is_dir() {
            continue;
        }

        let Some((z, x, y)) = parse_path(&entry) else {
            warn!("unexpected file, skipping: {}", entry.path().display());

            continue;
        };

        tiles.push(SourceTile {
            path: entry.into_path(),
            z,
            x,
            y,
        });
    }

    Ok(tiles)
}

pub fn zoom_range(tiles: &[SourceTile]) -> (Option<u8>, Option<u8>) {
    (
        tiles.iter().map(|tile| tile.z).min(),
        tiles.iter().map(|tile| tile.z).max(),
    )
}

fn parse_path(entry: &DirEntry) -> Option<(u8, u32, u32)> {
    let v = entry
        .path()
        .iter()
        .rev()
        .take(entry.depth())
        .map(|part| part.to_string_lossy().to_string())
        .collect::<Vec<_>>();

    let [file, x, z] = v.as_slice() else {
        return None;
    };

    let (y, _ext) = file.split_once('.')?;

    let z = z.parse::<u8>().ok().filter(|z| *z <= MAX_ZOOM)?;

    Some((z, x.parse().ok()?, y.parse().ok()?))
}
