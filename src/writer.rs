//! MBTiles archive writer.
//!
//! A [`TileArchiveWriter`] owns one SQLite connection to `<name>.mbtiles`.
//! Opening it creates the `metadata` and `tiles` tables when missing and
//! writes the metadata rows; tiles are then appended one at a time through a
//! single cached insert statement.

use crate::{
    error::{ArchiveError, Result},
    metadata::write_metadata,
    options::ArchiveOptions,
    schema::create_schema,
    tile::TileData,
};
use log::{debug, info, warn};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const ARCHIVE_EXTENSION: &str = "mbtiles";

const INSERT_TILE: &str =
    "INSERT INTO tiles (zoom_level, tile_column, tile_row, tile_data) VALUES (?1, ?2, ?3, ?4)";

/// Derives `<directory>/<name>.mbtiles`, appending the extension even when
/// `name` already contains a dot.
pub fn archive_path(directory: Option<&Path>, name: &str) -> PathBuf {
    let file_name = format!("{name}.{ARCHIVE_EXTENSION}");

    match directory {
        Some(directory) => directory.join(file_name),
        None => PathBuf::from(file_name),
    }
}

pub struct TileArchiveWriter {
    conn: Connection,
    path: PathBuf,
}

impl TileArchiveWriter {
    /// Opens `<name>.mbtiles` in the current directory as a `png` archive.
    pub fn open(name: &str, description: &str) -> Result<Self> {
        Self::open_with(name, description, &ArchiveOptions::default())
    }

    /// Opens or creates the archive, creates the schema and writes metadata.
    ///
    /// On error the connection and any prepared statement are released
    /// before returning.
    pub fn open_with(name: &str, description: &str, options: &ArchiveOptions) -> Result<Self> {
        let path = archive_path(options.directory.as_deref(), name);

        if name.is_empty() {
            return Err(ArchiveError::StorageOpen {
                source: rusqlite::Error::InvalidPath(path.clone()),
                path,
            });
        }

        let conn = Connection::open(&path).map_err(|source| ArchiveError::StorageOpen {
            path: path.clone(),
            source,
        })?;

        // only the tile insert is kept prepared
        conn.set_prepared_statement_cache_capacity(1);

        create_schema(&conn)?;

        conn.prepare_cached(INSERT_TILE)
            .map_err(|source| ArchiveError::Schema {
                table: "tiles",
                source,
            })?;

        write_metadata(&conn, name, description, options)?;

        info!("opened archive {}", path.display());

        Ok(Self { conn, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one row to `tiles`. Addresses are stored as given.
    ///
    /// Failures leave the writer usable for the next tile.
    pub fn insert_tile<'a>(
        &mut self,
        data: impl Into<TileData<'a>>,
        zoom: i64,
        column: i64,
        row: i64,
    ) -> Result<()> {
        let data = data.into().load()?;

        // A cached statement is reset with its bindings cleared when it goes
        // back to the cache, and blobs are bound as transient copies.
        let mut stmt = self
            .conn
            .prepare_cached(INSERT_TILE)
            .map_err(|source| ArchiveError::TileWrite {
                zoom,
                column,
                row,
                source,
            })?;

        stmt.execute((zoom, column, row, &*data))
            .map_err(|source| ArchiveError::TileWrite {
                zoom,
                column,
                row,
                source,
            })?;

        debug!("inserted tile {zoom}/{column}/{row} ({} bytes)", data.len());

        Ok(())
    }

    /// Finalizes the cached statement, then closes the connection.
    pub fn close(self) {
        let Self { conn, path } = self;

        match conn.close() {
            Ok(()) => info!("closed archive {}", path.display()),
            Err((_conn, e)) => warn!("error closing archive {}: {e}", path.display()),
        }
    }
}
