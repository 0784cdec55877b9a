//! Packs rendered raster tiles into an MBTiles archive.
//!
//! ```no_run
//! use mbtiler::TileArchiveWriter;
//!
//! let mut writer = TileArchiveWriter::open("myset", "test set")?;
//! writer.insert_tile(b"\x89PNG...", 15, 16979, 21196)?;
//! writer.close();
//! # Ok::<(), mbtiler::ArchiveError>(())
//! ```

mod error;
mod metadata;
mod options;
mod schema;
mod tile;
mod writer;

pub use error::{ArchiveError, Result};
pub use metadata::{ARCHIVE_TYPE, ARCHIVE_VERSION};
pub use options::{ArchiveOptions, TileFormat};
pub use tile::TileData;
pub use writer::{archive_path, TileArchiveWriter, ARCHIVE_EXTENSION};
