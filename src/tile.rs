use crate::error::{ArchiveError, Result};
use std::{
    borrow::Cow,
    fs::File,
    io::{self, Read},
    path::Path,
};

/// Tile payload: either a file to read or bytes already in memory.
#[derive(Clone, Copy, Debug)]
pub enum TileData<'a> {
    Path(&'a Path),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a Path> for TileData<'a> {
    fn from(path: &'a Path) -> Self {
        TileData::Path(path)
    }
}

impl<'a> From<&'a std::path::PathBuf> for TileData<'a> {
    fn from(path: &'a std::path::PathBuf) -> Self {
        TileData::Path(path.as_path())
    }
}

impl<'a> From<&'a [u8]> for TileData<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        TileData::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for TileData<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        TileData::Bytes(bytes.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for TileData<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        TileData::Bytes(bytes.as_slice())
    }
}

impl<'a> TileData<'a> {
    /// Whole payload; files are read in one go.
    pub fn load(self) -> Result<Cow<'a, [u8]>> {
        match self {
            TileData::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
            TileData::Path(path) => read_tile(path)
                .map(Cow::Owned)
                .map_err(|source| ArchiveError::TileRead {
                    path: path.to_path_buf(),
                    source,
                }),
        }
    }
}

fn read_tile(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;

    let expected = file.metadata()?.len();

    let mut data = Vec::with_capacity(usize::try_from(expected).unwrap_or_default());

    file.read_to_end(&mut data)?;

    if (data.len() as u64) < expected {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("short read: {} of {expected} bytes", data.len()),
        ));
    }

    Ok(data)
}
