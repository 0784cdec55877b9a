use std::{fmt, path::PathBuf};

/// Tile image format recorded in the archive metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileFormat {
    #[default]
    Png,
    Jpeg,
}

impl TileFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            TileFormat::Png => "png",
            TileFormat::Jpeg => "jpg",
        }
    }
}

impl fmt::Display for TileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for [`crate::TileArchiveWriter::open_with`].
#[derive(Clone, Debug, Default)]
pub struct ArchiveOptions {
    /// Directory the archive is created in; the current directory when `None`.
    pub directory: Option<PathBuf>,

    pub format: TileFormat,

    pub min_zoom: Option<u8>,

    pub max_zoom: Option<u8>,
}
