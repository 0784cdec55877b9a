use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArchiveError>;

#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The archive file could not be created or opened
    #[error("Error opening archive {}: {source}", path.display())]
    StorageOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A base table could not be created
    #[error("Error creating table {table}: {source}")]
    Schema {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// A metadata row could not be written
    #[error("Error writing metadata {key}: {source}")]
    MetadataWrite {
        key: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// The tile source could not be read in full
    #[error("Error reading tile {}: {source}", path.display())]
    TileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tile row could not be inserted
    #[error("Error inserting tile {zoom}/{column}/{row}: {source}")]
    TileWrite {
        zoom: i64,
        column: i64,
        row: i64,
        #[source]
        source: rusqlite::Error,
    },
}

impl ArchiveError {
    /// Open-time errors leave no writer behind; tile errors leave it usable.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::TileRead { .. } | Self::TileWrite { .. })
    }
}
